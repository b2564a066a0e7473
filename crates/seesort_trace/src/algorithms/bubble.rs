use crate::recorder::Recorder;
use crate::step::{ColorToken, Trace};

/// Bubble sort over shrinking ranges. Every pass runs, even after a pass
/// without swaps, so the trace length only depends on the input length.
pub fn bubble_sort_trace<T: Copy + PartialOrd>(input: &[T]) -> Trace<T> {
    let mut recorder = Recorder::new(input);
    let n = recorder.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - pass {
            recorder.push_highlight(j, j + 1, ColorToken::Compare);
            if recorder.get(j) > recorder.get(j + 1) {
                recorder.swap(j, j + 1);
            }
        }
    }
    recorder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;
    use rstest::rstest;

    #[test]
    fn four_elements() {
        let input = [5, 3, 8, 1];
        let trace = bubble_sort_trace(&input);
        assert_eq!(trace.replay(&input).unwrap(), vec![1, 3, 5, 8]);
        assert_eq!(trace.highlight_count(), 6);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(5, 10)]
    #[case(30, 435)]
    fn comparison_count_is_fixed(#[case] n: usize, #[case] expected: usize) {
        let sorted: Vec<usize> = (0..n).collect();
        assert_eq!(bubble_sort_trace(&sorted).highlight_count(), expected);
        assert_eq!(bubble_sort_trace(&sorted).update_count(), 0);
    }

    #[test]
    fn swaps_follow_their_comparison() {
        let trace = bubble_sort_trace(&[2, 1]);
        assert_eq!(
            trace.steps(),
            &[
                Step::Highlight { a: 0, b: 1, color: ColorToken::Compare },
                Step::Update { index: 0, value: 1 },
                Step::Update { index: 1, value: 2 },
            ]
        );
    }
}
