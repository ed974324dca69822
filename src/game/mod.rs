//! Game context: board, click state and move history.
//!
//! History is the source of truth. Undo, jumping to an earlier move and
//! loading a saved game all rebuild the board by replaying records from the
//! starting position instead of restoring snapshots, so every state the
//! game reaches is reachable through legal play.

mod action;
mod error;
mod selection;
mod store;
mod view;

use log::{debug, info};

use crate::board::{Axis, Board, Cell, JumpError, JumpRecord};

pub use action::Action;
pub use error::{GameError, HistoryError};
pub use selection::{Choice, Selection};
pub use store::{
    decode_history, encode_history, HistoryStore, JsonFileStore, MemoryStore,
    DEFAULT_HISTORY_FILE,
};
pub use view::{CellView, ChoiceView, GameView};

/// What an action did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    Jumped(JumpRecord),
    /// A cell with jumps on both axes is waiting for a direction
    Selected(Cell),
    Reset,
    /// Board rebuilt from the first `n` moves
    Replayed(usize),
    Saved(usize),
    Loaded(usize),
}

#[derive(Clone, Debug, Default)]
pub struct Game {
    board: Board,
    selection: Selection,
    history: Vec<JumpRecord>,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            selection: Selection::Idle,
            history: Vec::new(),
        }
    }

    /// Rebuild a game by replaying `records` from the starting position.
    ///
    /// Indices must run 1, 2, 3, ... and every jump must be legal when it
    /// is reached. Replay stops after the record with index `stop_after`.
    pub fn from_records(records: &[JumpRecord], stop_after: Option<u32>) -> Result<Game, HistoryError> {
        let mut game = Game::new();
        for (expected, record) in (1u32..).zip(records) {
            if record.index != expected {
                return Err(HistoryError::OutOfSequence {
                    expected,
                    found: record.index,
                });
            }
            if stop_after.is_some_and(|stop| record.index > stop) {
                break;
            }
            game.jump(record.cell, record.axis)
                .map_err(|error| HistoryError::IllegalJump {
                    record: *record,
                    error,
                })?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn history(&self) -> &[JumpRecord] {
        &self.history
    }

    /// History in display form, `(<n>) <cell><H|V>`
    #[must_use]
    pub fn history_strings(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Apply the jump at `cell` along `axis` and record it.
    pub fn jump(&mut self, cell: Cell, axis: Axis) -> Result<JumpRecord, JumpError> {
        let heading = self.board.try_apply(cell, axis)?;
        let index = u32::try_from(self.history.len() + 1).unwrap_or(u32::MAX);
        let record = JumpRecord::new(index, cell, axis);
        self.history.push(record);
        debug!("{record} {heading}, {} pegs left", self.board.peg_count());
        Ok(record)
    }

    /// Handle a click on `cell`.
    ///
    /// A single legal axis jumps right away; jumps on both axes park the
    /// cell until [`Game::choose`]. Clicks on cells without jumps, and any
    /// click while a choice is pending, are ignored.
    pub fn select(&mut self, cell: Cell) -> Result<Outcome, GameError> {
        if self.selection.is_pending() {
            debug!("ignoring {cell}: direction choice pending");
            return Ok(Outcome::Ignored);
        }

        let jumps = self.board.legal_jumps(cell);
        if let Some(pending) = Selection::for_both_axes(cell, jumps) {
            self.selection = pending;
            return Ok(Outcome::Selected(cell));
        }
        match jumps.single() {
            Some((axis, _)) => Ok(Outcome::Jumped(self.jump(cell, axis)?)),
            None => {
                debug!("ignoring {cell}: no legal jump");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Resolve a pending selection along `axis`.
    pub fn choose(&mut self, axis: Axis) -> Result<Outcome, GameError> {
        let Selection::AwaitingChoice { cell, .. } = self.selection else {
            debug!("ignoring {} choice: nothing selected", axis.name());
            return Ok(Outcome::Ignored);
        };
        let record = self.jump(cell, axis)?;
        self.selection = Selection::Idle;
        Ok(Outcome::Jumped(record))
    }

    /// Rebuild the board from the first `stop_after` moves; history is cut
    /// to the replayed moves. `0` gives the starting position.
    pub fn replay_to(&mut self, stop_after: u32) -> Result<usize, GameError> {
        let replayed = Game::from_records(&self.history, Some(stop_after))?;
        *self = replayed;
        debug!("replayed {} moves", self.history.len());
        Ok(self.history.len())
    }

    /// Take back the last move.
    pub fn undo(&mut self) -> Result<Outcome, GameError> {
        match self.history.len() {
            0 => Ok(Outcome::Ignored),
            1 => {
                self.reset();
                Ok(Outcome::Reset)
            }
            n => {
                let target = self.history[n - 2].index;
                Ok(Outcome::Replayed(self.replay_to(target)?))
            }
        }
    }

    /// Replay to a history entry, if it is part of this game.
    pub fn go_to(&mut self, record: JumpRecord) -> Result<Outcome, GameError> {
        if !self.history.contains(&record) {
            debug!("ignoring history entry {record}: not in this game");
            return Ok(Outcome::Ignored);
        }
        Ok(Outcome::Replayed(self.replay_to(record.index)?))
    }

    pub fn save(&self, store: &dyn HistoryStore) -> Result<usize, HistoryError> {
        store.save(&self.history)?;
        info!("saved {} moves", self.history.len());
        Ok(self.history.len())
    }

    /// Replace this game with the stored one. On any failure the current
    /// game is left as it was.
    pub fn load(&mut self, store: &dyn HistoryStore) -> Result<usize, HistoryError> {
        let records = store.load()?;
        let loaded = Game::from_records(&records, None)?;
        *self = loaded;
        info!("loaded {} moves", self.history.len());
        Ok(self.history.len())
    }

    /// Dispatch one request action.
    pub fn perform(&mut self, action: Action, store: &dyn HistoryStore) -> Result<Outcome, GameError> {
        match action {
            Action::None => Ok(Outcome::Ignored),
            Action::Reset => {
                self.reset();
                Ok(Outcome::Reset)
            }
            Action::Choose(axis) => self.choose(axis),
            Action::Undo => self.undo(),
            Action::SaveHistory => Ok(Outcome::Saved(self.save(store)?)),
            Action::LoadHistory => Ok(Outcome::Loaded(self.load(store)?)),
            Action::GoTo(record) => self.go_to(record),
            Action::Select(cell) => self.select(cell),
            Action::Unknown(text) => {
                debug!("ignoring unknown action '{text}'");
                Ok(Outcome::Ignored)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(notation: &str) -> Cell {
        notation.parse().unwrap()
    }

    /// D3V then C3H leaves D3 with a jump on each axis
    fn game_with_pending_choice() -> Game {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();
        assert_eq!(game.select(cell("D3")).unwrap(), Outcome::Selected(cell("D3")));
        game
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.move_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.selection(), Selection::Idle);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_single_axis_click_jumps_immediately() {
        let mut game = Game::new();
        let outcome = game.select(cell("D3")).unwrap();

        assert_eq!(
            outcome,
            Outcome::Jumped(JumpRecord::new(1, cell("D3"), Axis::Vertical))
        );
        assert_eq!(game.history_strings(), vec!["(1) D3V"]);
        assert_eq!(game.move_count(), 1);
        assert!(!game.board().is_occupied(cell("D2")));
        assert!(!game.board().is_occupied(cell("D3")));
        assert!(game.board().is_occupied(cell("D4")));
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_click_without_jump_is_ignored() {
        let mut game = Game::new();
        for target in ["D4", "A1", "D1", "C3"] {
            assert_eq!(game.select(cell(target)).unwrap(), Outcome::Ignored);
        }
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_both_axes_click_waits_for_choice() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();
        let board_before = game.board().clone();

        game.select(cell("D3")).unwrap();

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.move_count(), 2);
        match game.selection() {
            Selection::AwaitingChoice { cell: selected, options } => {
                assert_eq!(selected, cell("D3"));
                assert_eq!(options[0].axis, Axis::Horizontal);
                assert_eq!(options[1].axis, Axis::Vertical);
            }
            Selection::Idle => panic!("expected pending choice"),
        }
    }

    #[test]
    fn test_choice_applies_selected_axis() {
        let mut game = game_with_pending_choice();
        let outcome = game.choose(Axis::Horizontal).unwrap();

        assert_eq!(
            outcome,
            Outcome::Jumped(JumpRecord::new(3, cell("D3"), Axis::Horizontal))
        );
        assert_eq!(game.selection(), Selection::Idle);
        assert!(game.board().is_occupied(cell("C3")));
        assert!(!game.board().is_occupied(cell("D3")));
        assert!(!game.board().is_occupied(cell("E3")));
        // vertical line untouched
        assert!(!game.board().is_occupied(cell("D2")));
        assert!(game.board().is_occupied(cell("D4")));
    }

    #[test]
    fn test_clicks_ignored_while_choice_pending() {
        let mut game = game_with_pending_choice();
        let board_before = game.board().clone();

        assert_eq!(game.select(cell("E3")).unwrap(), Outcome::Ignored);
        assert_eq!(game.board(), &board_before);
        assert!(game.selection().is_pending());
    }

    #[test]
    fn test_choice_without_selection_is_ignored() {
        let mut game = Game::new();
        assert_eq!(game.choose(Axis::Vertical).unwrap(), Outcome::Ignored);
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn test_illegal_jump_is_an_error_and_changes_nothing() {
        let mut game = Game::new();
        let err = game.jump(cell("D4"), Axis::Vertical).unwrap_err();
        assert_eq!(
            err,
            JumpError::NoLegalJump {
                cell: cell("D4"),
                axis: Axis::Vertical
            }
        );
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut game = Game::new();
        assert_eq!(game.undo().unwrap(), Outcome::Ignored);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_undo_after_one_move_resets() {
        let mut game = Game::new();
        game.select(cell("E4")).unwrap();
        assert_eq!(game.undo().unwrap(), Outcome::Reset);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_undo_replays_all_but_last() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        let after_first = game.board().clone();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();

        assert_eq!(game.undo().unwrap(), Outcome::Replayed(1));
        assert_eq!(game.board(), &after_first);
        assert_eq!(game.history_strings(), vec!["(1) D3V"]);
    }

    #[test]
    fn test_undo_clears_pending_choice() {
        let mut game = game_with_pending_choice();
        game.undo().unwrap();
        assert_eq!(game.selection(), Selection::Idle);
    }

    #[test]
    fn test_replay_to_last_reproduces_state() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        let board = game.board().clone();
        let history = game.history().to_vec();

        assert_eq!(game.replay_to(3).unwrap(), 3);
        assert_eq!(game.board(), &board);
        assert_eq!(game.history(), history.as_slice());
    }

    #[test]
    fn test_replay_to_bounds() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();
        let board = game.board().clone();

        assert_eq!(game.replay_to(99).unwrap(), 2);
        assert_eq!(game.board(), &board);

        assert_eq!(game.replay_to(0).unwrap(), 0);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_go_to_history_entry() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        let after_first = game.board().clone();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();

        let first = game.history()[0];
        assert_eq!(game.go_to(first).unwrap(), Outcome::Replayed(1));
        assert_eq!(game.board(), &after_first);
    }

    #[test]
    fn test_go_to_unknown_entry_is_ignored() {
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        let stranger = JumpRecord::new(1, cell("E4"), Axis::Horizontal);

        assert_eq!(game.go_to(stranger).unwrap(), Outcome::Ignored);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_from_records_rejects_gaps() {
        let records = [
            JumpRecord::new(1, cell("D3"), Axis::Vertical),
            JumpRecord::new(3, cell("C3"), Axis::Horizontal),
        ];
        let err = Game::from_records(&records, None).unwrap_err();
        assert!(matches!(
            err,
            HistoryError::OutOfSequence {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_from_records_rejects_illegal_jump() {
        let records = [JumpRecord::new(1, cell("D4"), Axis::Vertical)];
        let err = Game::from_records(&records, None).unwrap_err();
        assert!(matches!(err, HistoryError::IllegalJump { .. }));
    }

    #[test]
    fn test_save_then_load_reproduces_state() {
        let store = MemoryStore::new();
        let mut game = Game::new();
        game.jump(cell("D3"), Axis::Vertical).unwrap();
        game.jump(cell("C3"), Axis::Horizontal).unwrap();
        let board = game.board().clone();

        assert_eq!(game.save(&store).unwrap(), 2);
        game.reset();
        assert_eq!(game.load(&store).unwrap(), 2);

        assert_eq!(game.board(), &board);
        assert_eq!(game.history_strings(), vec!["(1) D3V", "(2) C3H"]);
    }

    #[test]
    fn test_failed_load_keeps_current_game() {
        let store = MemoryStore::with_contents(r#"["(1) D3V","(2) D3V"]"#);
        let mut game = Game::new();
        game.jump(cell("E4"), Axis::Horizontal).unwrap();
        let board = game.board().clone();

        assert!(game.load(&store).is_err());
        assert_eq!(game.board(), &board);
        assert_eq!(game.history_strings(), vec!["(1) E4H"]);
    }

    #[test]
    fn test_perform_dispatch() {
        let store = MemoryStore::new();
        let mut game = Game::new();

        assert_eq!(game.perform(Action::parse(""), &store).unwrap(), Outcome::Ignored);
        assert!(matches!(
            game.perform(Action::parse("C4"), &store).unwrap(),
            Outcome::Jumped(_)
        ));
        assert_eq!(game.perform(Action::parse("Save History"), &store).unwrap(), Outcome::Saved(1));
        assert_eq!(game.perform(Action::parse("Reset"), &store).unwrap(), Outcome::Reset);
        assert_eq!(game.perform(Action::parse("Load History"), &store).unwrap(), Outcome::Loaded(1));
        assert_eq!(game.perform(Action::parse("Undo"), &store).unwrap(), Outcome::Reset);
        assert_eq!(game.perform(Action::parse("bogus"), &store).unwrap(), Outcome::Ignored);
    }

    mod random_play {
        use super::*;
        use proptest::prelude::*;

        fn play(seed: u64, num_moves: usize) -> Game {
            use rand::prelude::*;

            let mut game = Game::new();
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..num_moves {
                let moves = game.board().legal_moves();
                if moves.is_empty() {
                    break;
                }
                let (cell, axis) = moves[rng.gen_range(0..moves.len())];
                game.jump(cell, axis).unwrap();
            }
            game
        }

        proptest! {
            /// Replaying the whole history rebuilds the same board
            #[test]
            fn prop_replay_to_last_restores_board(seed in any::<u64>(), num_moves in 1..=31usize) {
                let played = play(seed, num_moves);
                let last = played.history().last().map_or(0, |r| r.index);

                let mut replayed = played.clone();
                prop_assert_eq!(replayed.replay_to(last).unwrap(), played.move_count());
                prop_assert_eq!(replayed.board(), played.board());
                prop_assert_eq!(replayed.history(), played.history());
            }

            /// Save then load into a fresh game reproduces board and history
            #[test]
            fn prop_save_load_restores_game(seed in any::<u64>(), num_moves in 0..=31usize) {
                let played = play(seed, num_moves);
                let store = MemoryStore::new();
                played.save(&store).unwrap();

                let mut loaded = Game::new();
                prop_assert_eq!(loaded.load(&store).unwrap(), played.move_count());
                prop_assert_eq!(loaded.board(), played.board());
                prop_assert_eq!(loaded.history(), played.history());
            }
        }
    }
}
