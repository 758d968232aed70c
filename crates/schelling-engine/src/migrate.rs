//! Relocation of unsatisfied agents into vacancies.

use crate::shuffle::shuffle;
use rand::Rng;
use schelling_core::{Kind, Satisfaction, SimError, StateGrid, World};

/// What one [`step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Agents classified unsatisfied going into the step.
    pub unsatisfied: usize,
    /// Empty cells going into the step.
    pub vacancies: usize,
    /// Agents actually moved: `min(unsatisfied, vacancies)`.
    pub moved: usize,
}

/// Row-major flat indices of every cell in `states` equal to `state`.
pub fn indices_with(states: &StateGrid, state: Satisfaction) -> Vec<usize> {
    states
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(i, s)| (*s == state).then_some(i))
        .collect()
}

/// Advance `grid` by one generation.
///
/// `states` must be the classification of `grid` as it is now. The
/// unsatisfied and empty index lists are shuffled independently and
/// paired off; each pair moves one agent into one vacancy. Agents left
/// over when vacancies run out stay where they are.
///
/// Per-kind counts and the number of empty cells are unchanged. Returns
/// `Err(SimError::DimensionMismatch)` without touching `grid` if the two
/// grids differ in size.
pub fn step<R: Rng + ?Sized>(
    states: &StateGrid,
    grid: &mut World,
    rng: &mut R,
) -> Result<StepOutcome, SimError> {
    if states.side() != grid.side() {
        return Err(SimError::DimensionMismatch {
            expected: grid.side(),
            actual: states.side(),
        });
    }

    let mut movers = indices_with(states, Satisfaction::Unsatisfied);
    let mut vacancies = indices_with(states, Satisfaction::NotApplicable);
    shuffle(&mut movers, rng);
    shuffle(&mut vacancies, rng);

    let cells = grid.cells_mut();
    let mut moved = 0;
    for (&from, &to) in movers.iter().zip(&vacancies) {
        debug_assert!(
            !cells[from].is_empty() && cells[to].is_empty(),
            "states are stale: cell {from} -> {to}"
        );
        cells[to] = cells[from];
        cells[from] = Kind::Empty;
        moved += 1;
    }

    Ok(StepOutcome {
        unsatisfied: movers.len(),
        vacancies: vacancies.len(),
        moved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use schelling_core::Grid;
    use schelling_test_utils::{kind_counts, parse_world, three_by_three, uniform_world};

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    #[test]
    fn indices_are_row_major() {
        let states = classify(&three_by_three(), 0.5);
        assert_eq!(indices_with(&states, Satisfaction::Unsatisfied), vec![4, 6]);
        assert_eq!(
            indices_with(&states, Satisfaction::NotApplicable),
            vec![2, 3, 5, 7]
        );
        assert_eq!(indices_with(&states, Satisfaction::Satisfied), vec![0, 1, 8]);
    }

    #[test]
    fn worked_example_moves_both_unsatisfied() {
        let mut w = three_by_three();
        let before = w.clone();
        let states = classify(&w, 0.5);
        let out = step(&states, &mut w, &mut rng()).unwrap();

        assert_eq!(
            out,
            StepOutcome {
                unsatisfied: 2,
                vacancies: 4,
                moved: 2
            }
        );
        assert_eq!(kind_counts(&w), kind_counts(&before));
        // Sources are vacated; satisfied agents are untouched.
        assert_eq!(w[(1, 1)], Kind::Empty);
        assert_eq!(w[(2, 0)], Kind::Empty);
        for (r, c) in [(0, 0), (0, 1), (2, 2)] {
            assert_eq!(w[(r, c)], before[(r, c)]);
        }
    }

    #[test]
    fn surplus_movers_stay_put() {
        // One vacancy, many isolated-in-enemy-territory agents.
        let mut w = parse_world(
            "RBR
             BRB
             RB.",
        );
        let states = classify(&w, 1.0);
        let out = step(&states, &mut w, &mut rng()).unwrap();
        assert_eq!(out.moved, 1);
        assert_eq!(out.vacancies, 1);
        assert!(out.unsatisfied > 1);
        assert_eq!(w.count(&Kind::Empty), 1);
    }

    #[test]
    fn no_vacancies_no_moves() {
        let mut w = parse_world(
            "RB
             BR",
        );
        let before = w.clone();
        let states = classify(&w, 1.0);
        let out = step(&states, &mut w, &mut rng()).unwrap();
        assert_eq!(out.moved, 0);
        assert_eq!(w, before);
    }

    #[test]
    fn all_satisfied_is_a_fixed_point() {
        let mut w = uniform_world(5, Kind::KindA);
        w.set(2, 2, Kind::Empty).unwrap();
        let before = w.clone();
        let states = classify(&w, 0.5);
        let out = step(&states, &mut w, &mut rng()).unwrap();
        assert_eq!(out.unsatisfied, 0);
        assert_eq!(w, before);
    }

    #[test]
    fn dimension_mismatch_leaves_grid_untouched() {
        let mut w = three_by_three();
        let before = w.clone();
        let states = Grid::filled(4, Satisfaction::Unsatisfied).unwrap();
        assert_eq!(
            step(&states, &mut w, &mut rng()).unwrap_err(),
            SimError::DimensionMismatch {
                expected: 3,
                actual: 4
            }
        );
        assert_eq!(w, before);
    }

    fn arb_world() -> impl Strategy<Value = World> {
        (2usize..12).prop_flat_map(|side| {
            proptest::collection::vec(
                prop_oneof![Just(Kind::KindA), Just(Kind::KindB), Just(Kind::Empty)],
                side * side,
            )
            .prop_map(move |cells| Grid::from_cells(side, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn exactly_min_vacancies_filled_and_no_double_write(
            w in arb_world(),
            threshold in 0.0f64..1.0,
            seed: u64,
        ) {
            let before = w.clone();
            let mut w = w;
            let states = classify(&w, threshold);
            let out = step(&states, &mut w, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap();
            prop_assert_eq!(out.moved, out.unsatisfied.min(out.vacancies));

            let filled = (0..w.len())
                .filter(|&i| before.cells()[i].is_empty() && !w.cells()[i].is_empty())
                .count();
            let vacated = (0..w.len())
                .filter(|&i| !before.cells()[i].is_empty() && w.cells()[i].is_empty())
                .count();
            prop_assert_eq!(filled, out.moved);
            prop_assert_eq!(vacated, out.moved);

            // Only unsatisfied cells may be vacated; satisfied agents never move.
            for i in 0..w.len() {
                if states.cells()[i] == Satisfaction::Satisfied {
                    prop_assert_eq!(w.cells()[i], before.cells()[i]);
                }
            }
            prop_assert_eq!(kind_counts(&w), kind_counts(&before));
        }
    }
}
