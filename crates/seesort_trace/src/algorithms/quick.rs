use crate::recorder::Recorder;
use crate::step::{ColorToken, Trace};

/// Quicksort with a Lomuto partition around the rightmost element of each
/// range.
///
/// The pivot choice is part of the trace contract: changing it reorders the
/// steps (never the result). Pending ranges are kept on an explicit stack so
/// already sorted inputs, which degrade to linear depth, cannot overflow the
/// call stack. The left range is always visited before the right one.
pub fn quick_sort_trace<T: Copy + PartialOrd>(input: &[T]) -> Trace<T> {
    let mut recorder = Recorder::new(input);
    let mut pending: Vec<(usize, usize)> = Vec::new();
    if recorder.len() > 1 {
        pending.push((0, recorder.len() - 1));
    }

    while let Some((lo, hi)) = pending.pop() {
        let pivot = partition(&mut recorder, lo, hi);
        // push right first so the left side is processed next
        if pivot + 1 < hi {
            pending.push((pivot + 1, hi));
        }
        if pivot > lo + 1 {
            pending.push((lo, pivot - 1));
        }
    }
    recorder.finish()
}

/// Partitions the inclusive range `[lo, hi]` and returns the pivot's final
/// index.
fn partition<T: Copy + PartialOrd>(recorder: &mut Recorder<T>, lo: usize, hi: usize) -> usize {
    let pivot = recorder.get(hi);
    let mut store = lo;
    for j in lo..hi {
        recorder.push_highlight(j, hi, ColorToken::Pivot);
        if recorder.get(j) < pivot {
            // the swap gets its own highlight on the pair it writes
            recorder.push_highlight(store, j, ColorToken::Compare);
            recorder.swap(store, j);
            store += 1;
        }
    }
    recorder.push_highlight(store, hi, ColorToken::Pivot);
    recorder.swap(store, hi);
    store
}
