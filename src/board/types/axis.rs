//! Jump axes and headings.

use std::fmt;

use serde::Serialize;

/// The line along which a jump happens.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Single-letter form used in move records
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Axis::Horizontal => 'H',
            Axis::Vertical => 'V',
        }
    }

    #[must_use]
    pub const fn from_letter(c: char) -> Option<Axis> {
        match c {
            'H' => Some(Axis::Horizontal),
            'V' => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Full name, also the form value of the direction choice buttons
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "Horizontal",
            Axis::Vertical => "Vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Direction of travel of the jumping peg.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Heading of a peg coming from the left/top neighbor
    #[inline]
    #[must_use]
    pub const fn forward(axis: Axis) -> Heading {
        match axis {
            Axis::Horizontal => Heading::Right,
            Axis::Vertical => Heading::Down,
        }
    }

    /// Heading of a peg coming from the right/bottom neighbor
    #[inline]
    #[must_use]
    pub const fn backward(axis: Axis) -> Heading {
        match axis {
            Axis::Horizontal => Heading::Left,
            Axis::Vertical => Heading::Up,
        }
    }

    /// Arrow glyph shown on clickable cells and choice buttons
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Heading::Left => '\u{2190}',
            Heading::Up => '\u{2191}',
            Heading::Right => '\u{2192}',
            Heading::Down => '\u{2193}',
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
