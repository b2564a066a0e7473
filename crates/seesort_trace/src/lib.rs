//! Animation traces for sorting algorithms.
//!
//! Each generator sorts a private copy of its input and returns a [`Trace`]:
//! the comparisons it made and the writes it performed, in order. Replaying
//! the [`Step::Update`] steps against the original input reproduces the
//! sorted sequence, so a player can animate the sort without running it.
//!
//! ```
//! use seesort_trace::Algorithm;
//!
//! let input = [5, 3, 8, 1];
//! let trace = Algorithm::Bubble.trace(&input);
//! assert_eq!(trace.replay(&input).unwrap(), vec![1, 3, 5, 8]);
//! assert_eq!(trace.highlight_count(), 6);
//! ```

pub mod algorithms;
pub mod error;
mod recorder;
pub mod step;

pub use algorithms::{
    Algorithm, bubble_sort_trace, insertion_sort_trace, merge_sort_trace, quick_sort_trace,
};
pub use error::TraceError;
pub use step::{ColorToken, Step, Trace};

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_updates_in_bounds, seeded_values};
    use rstest::rstest;

    fn sorted(input: &[u32]) -> Vec<u32> {
        let mut v = input.to_vec();
        v.sort_unstable();
        v
    }

    #[rstest]
    fn empty_and_single_give_empty_traces(
        #[values(Algorithm::Merge, Algorithm::Quick, Algorithm::Insertion, Algorithm::Bubble)]
        algorithm: Algorithm,
        #[values(&[][..], &[42][..])] input: &[u32],
    ) {
        assert!(algorithm.trace(input).is_empty());
    }

    #[rstest]
    fn replay_sorts_seeded_inputs(
        #[values(Algorithm::Merge, Algorithm::Quick, Algorithm::Insertion, Algorithm::Bubble)]
        algorithm: Algorithm,
        #[values(2, 3, 15, 30, 64)] len: usize,
        #[values(1, 7, 0xdead_beef)] seed: u64,
    ) {
        let input = seeded_values(len, seed);
        let trace = algorithm.trace(&input);
        assert_updates_in_bounds(&trace, &input);
        assert_eq!(trace.replay(&input).unwrap(), sorted(&input));
    }

    #[rstest]
    #[case::sorted(vec![1, 2, 3, 4, 5, 6])]
    #[case::reversed(vec![6, 5, 4, 3, 2, 1])]
    #[case::all_equal(vec![4, 4, 4])]
    #[case::two_values(vec![2, 1, 2, 1, 2, 1])]
    fn replay_sorts_shaped_inputs(
        #[values(Algorithm::Merge, Algorithm::Quick, Algorithm::Insertion, Algorithm::Bubble)]
        algorithm: Algorithm,
        #[case] input: Vec<u32>,
    ) {
        let trace = algorithm.trace(&input);
        assert_eq!(trace.replay(&input).unwrap(), sorted(&input));
    }

    #[rstest]
    fn generation_is_deterministic(
        #[values(Algorithm::Merge, Algorithm::Quick, Algorithm::Insertion, Algorithm::Bubble)]
        algorithm: Algorithm,
    ) {
        let input = seeded_values(40, 99);
        let first = algorithm.trace(&input);
        let second = algorithm.trace(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[rstest]
    fn swaps_are_preceded_by_one_highlight(
        #[values(Algorithm::Quick, Algorithm::Bubble)] algorithm: Algorithm,
    ) {
        let input = seeded_values(20, 11);
        let steps = algorithm.trace(&input).steps().to_vec();
        let mut i = 0;
        while i < steps.len() {
            if steps[i].is_update() {
                // swap-based algorithms only write in pairs right after a highlight
                assert!(i >= 1 && steps[i - 1].is_highlight(), "update at {i} without highlight");
                assert!(steps.get(i + 1).is_some_and(|s| s.is_update()));
                let (
                    Step::Highlight { a, b, .. },
                    Step::Update { index: x, .. },
                    Step::Update { index: y, .. },
                ) = (steps[i - 1], steps[i], steps[i + 1])
                else {
                    unreachable!();
                };
                assert_eq!((a, b), (x, y), "{algorithm} swap at {i}");
                i += 2;
            } else {
                i += 1;
            }
        }
    }

    #[test]
    fn floats_are_supported() {
        let input = [2.5_f64, -1.0, 0.25];
        let trace = Algorithm::Merge.trace(&input);
        assert_eq!(trace.replay(&input).unwrap(), vec![-1.0, 0.25, 2.5]);
    }
}
