//! Cell kinds and per-cell satisfaction states.

use std::fmt;

/// What occupies a single grid cell.
///
/// Exactly two populated kinds exist; [`Kind::Empty`] marks a vacancy
/// and is never classified as satisfied or unsatisfied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// First populated kind (rendered red).
    KindA,
    /// Second populated kind (rendered blue).
    KindB,
    /// Unoccupied location.
    Empty,
}

impl Kind {
    /// The two populated kinds, in fill order.
    pub const ALL_POPULATED: [Kind; 2] = [Kind::KindA, Kind::KindB];

    /// Returns `true` for [`Kind::Empty`].
    pub fn is_empty(self) -> bool {
        self == Kind::Empty
    }

    /// Single-character glyph used by the text rendering of a grid.
    pub fn glyph(self) -> char {
        match self {
            Kind::KindA => 'R',
            Kind::KindB => 'B',
            Kind::Empty => '.',
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Satisfaction verdict for one cell.
///
/// [`Satisfaction::NotApplicable`] appears exactly where the occupancy
/// grid holds [`Kind::Empty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Satisfaction {
    /// Enough same-kind neighbours; the agent stays.
    Satisfied,
    /// Too few same-kind neighbours; the agent wants to move.
    Unsatisfied,
    /// The cell is empty.
    NotApplicable,
}

impl Satisfaction {
    /// Single-character glyph used by the text rendering of a state grid.
    pub fn glyph(self) -> char {
        match self {
            Satisfaction::Satisfied => 'S',
            Satisfaction::Unsatisfied => 'U',
            Satisfaction::NotApplicable => '.',
        }
    }
}

impl fmt::Display for Satisfaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_is_empty() {
        assert!(Kind::Empty.is_empty());
        assert!(Kind::ALL_POPULATED.iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn glyphs_are_distinct() {
        assert_ne!(Kind::KindA.glyph(), Kind::KindB.glyph());
        assert_ne!(Kind::KindA.glyph(), Kind::Empty.glyph());
        assert_eq!(Satisfaction::NotApplicable.glyph(), Kind::Empty.glyph());
    }
}
