//! Problem set generation: enumerate, filter, dedup, shuffle, truncate.
//!
//! The universe of candidate problems is every `(top, bottom)` pair in the
//! operand range that the operator allows. For the fixed 0–10 range that is
//! [`ADDITION_UNIVERSE`](crate::constants::ADDITION_UNIVERSE) pairs for `+` and
//! [`SUBTRACTION_UNIVERSE`](crate::constants::SUBTRACTION_UNIVERSE) for `-`,
//! so both page counts are always satisfiable.
//!
//! The random source is a parameter: servers pass `rand::rng()`, tests pass a
//! seeded `SmallRng` to get a reproducible order.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{OPERAND_MAX, OPERAND_MIN};
use crate::types::{Operator, Problem};

/// All valid, unique problems for `operator` with both operands in `range`,
/// in enumeration order (top-major).
///
/// `range` is clamped to `OPERAND_MIN..=OPERAND_MAX`; the tally column has
/// room for ten bars, so larger operands are never produced.
pub fn problem_universe(operator: Operator, range: RangeInclusive<u8>) -> Vec<Problem> {
    let operands = clamp_operands(range);
    let mut seen = HashSet::new();
    let mut universe = Vec::new();
    for top in operands.clone() {
        for bottom in operands.clone() {
            if !operator.allows(top, bottom) {
                continue;
            }
            let problem = Problem::new(top, bottom);
            if seen.insert(problem) {
                universe.push(problem);
            }
        }
    }
    universe
}

fn clamp_operands(range: RangeInclusive<u8>) -> RangeInclusive<u8> {
    let (start, end) = range.into_inner();
    start.max(OPERAND_MIN)..=end.min(OPERAND_MAX)
}

/// Pick up to `requested` random unique problems from the 0–10 universe.
///
/// Returns `None` when no problem is valid for the operator.
pub fn generate<R: Rng + ?Sized>(
    operator: Operator,
    requested: usize,
    rng: &mut R,
) -> Option<Vec<Problem>> {
    generate_in_range(operator, OPERAND_MIN..=OPERAND_MAX, requested, rng)
}

/// [`generate`] over an explicit operand range, clamped as in
/// [`problem_universe`].
///
/// If the universe is smaller than `requested`, the whole universe is
/// returned (shuffled) rather than padding with repeats.
pub fn generate_in_range<R: Rng + ?Sized>(
    operator: Operator,
    range: RangeInclusive<u8>,
    requested: usize,
    rng: &mut R,
) -> Option<Vec<Problem>> {
    let mut problems = problem_universe(operator, range);
    if problems.is_empty() {
        return None;
    }

    if problems.len() < requested {
        tracing::warn!(
            operator = %operator,
            requested,
            available = problems.len(),
            "problem universe smaller than requested count, using all of it"
        );
    }

    problems.shuffle(rng);
    problems.truncate(requested);
    Some(problems)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ADDITION_UNIVERSE, SUBTRACTION_UNIVERSE};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_universe_sizes() {
        assert_eq!(
            problem_universe(Operator::Add, OPERAND_MIN..=OPERAND_MAX).len(),
            ADDITION_UNIVERSE
        );
        assert_eq!(
            problem_universe(Operator::Subtract, OPERAND_MIN..=OPERAND_MAX).len(),
            SUBTRACTION_UNIVERSE
        );
    }

    #[test]
    fn test_subtraction_universe_non_negative() {
        for p in problem_universe(Operator::Subtract, 0..=10) {
            assert!(p.top >= p.bottom, "{p:?}");
        }
    }

    #[test]
    fn test_generate_exact_count() {
        let mut rng = SmallRng::seed_from_u64(7);
        let one = generate(Operator::Add, 18, &mut rng).unwrap();
        assert_eq!(one.len(), 18);
        let two = generate(Operator::Subtract, 36, &mut rng).unwrap();
        assert_eq!(two.len(), 36);
    }

    #[test]
    fn test_generate_takes_whole_universe_when_short() {
        let mut rng = SmallRng::seed_from_u64(1);
        // 0..=2 under subtraction: (0,0) (1,0) (1,1) (2,0) (2,1) (2,2)
        let problems = generate_in_range(Operator::Subtract, 0..=2, 36, &mut rng).unwrap();
        assert_eq!(problems.len(), 6);
        let unique: HashSet<_> = problems.iter().copied().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_generate_empty_universe() {
        let mut rng = SmallRng::seed_from_u64(1);
        #[allow(clippy::reversed_empty_ranges)]
        let empty = generate_in_range(Operator::Add, 5..=4, 18, &mut rng);
        assert!(empty.is_none());
    }

    #[test]
    fn test_out_of_range_operands_are_clamped() {
        let mut rng = SmallRng::seed_from_u64(11);
        let problems =
            generate_in_range(Operator::Add, 0..=20, ADDITION_UNIVERSE + 50, &mut rng).unwrap();
        assert_eq!(problems.len(), ADDITION_UNIVERSE);
        assert!(problems
            .iter()
            .all(|p| p.top <= OPERAND_MAX && p.bottom <= OPERAND_MAX));

        assert_eq!(
            problem_universe(Operator::Subtract, 8..=200).len(),
            // tops 8..=10, bottoms 8..=top
            1 + 2 + 3
        );
        assert!(generate_in_range(Operator::Add, 11..=20, 18, &mut rng).is_none());
    }

    #[test]
    fn test_generate_zero_requested() {
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(generate(Operator::Add, 0, &mut rng), Some(Vec::new()));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate(Operator::Add, 18, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = generate(Operator::Add, 18, &mut SmallRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = SmallRng::seed_from_u64(3);
        let all = generate(Operator::Add, ADDITION_UNIVERSE, &mut rng).unwrap();
        let ordered = problem_universe(Operator::Add, 0..=10);
        assert_eq!(all.len(), ordered.len());
        assert_ne!(all, ordered);
    }
}
