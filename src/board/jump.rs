use super::error::JumpError;
use super::{Axis, Board, Cell, Heading};

impl Board {
    /// Execute the jump issued at `cell` along `axis`.
    ///
    /// The peg on one side of `cell` lands in the hole on the other side and
    /// the peg at `cell` is removed. The jump must be in the current legal
    /// table; otherwise nothing is touched and `NoLegalJump` is returned.
    pub fn try_apply(&mut self, cell: Cell, axis: Axis) -> Result<Heading, JumpError> {
        let illegal = || JumpError::NoLegalJump { cell, axis };
        let heading = self.legal_jumps(cell).get(axis).ok_or_else(illegal)?;
        let [Some(before), Some(after)] = self.neighbors_of(cell, axis) else {
            return Err(illegal());
        };

        let pegs_before = self.peg_count();

        self.toggle(before);
        self.toggle(cell);
        self.toggle(after);
        self.refresh_legal_moves();

        debug_assert_eq!(self.peg_count() + 1, pegs_before);

        Ok(heading)
    }
}
