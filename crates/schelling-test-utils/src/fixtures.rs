//! Hand-built worlds with known classifications.

use schelling_core::{Grid, Kind, Satisfaction, StateGrid, World};

/// Parse a world from text rows: `R` → KindA, `B` → KindB, `.` → Empty.
/// Whitespace is ignored.
///
/// Panics on malformed input; fixtures are test-only.
pub fn parse_world(text: &str) -> World {
    let rows: Vec<Vec<Kind>> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    'R' => Kind::KindA,
                    'B' => Kind::KindB,
                    '.' => Kind::Empty,
                    other => panic!("unexpected glyph {other:?} in fixture"),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).expect("fixture rows must form a square")
}

/// The 3×3 worked example:
///
/// ```text
/// R R .
/// . B .
/// R . B
/// ```
pub fn three_by_three() -> World {
    parse_world(
        "RR.
         .B.
         R.B",
    )
}

/// Classification of [`three_by_three`] at threshold 0.5, derived per
/// cell with edge truncation.
pub fn three_by_three_states() -> StateGrid {
    use Satisfaction::*;
    Grid::from_rows(vec![
        vec![Satisfied, Satisfied, NotApplicable],
        vec![NotApplicable, Unsatisfied, NotApplicable],
        vec![Unsatisfied, NotApplicable, Satisfied],
    ])
    .expect("fixture is square")
}

/// A `side × side` world holding only `kind`.
pub fn uniform_world(side: usize, kind: Kind) -> World {
    Grid::filled(side, kind).expect("fixture side must be positive")
}
