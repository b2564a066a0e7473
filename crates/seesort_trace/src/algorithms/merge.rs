use crate::recorder::Recorder;
use crate::step::{ColorToken, Trace};

/// Top-down merge sort. Equal values keep their left-to-right order.
pub fn merge_sort_trace<T: Copy + PartialOrd>(input: &[T]) -> Trace<T> {
    let mut recorder = Recorder::new(input);
    let len = recorder.len();
    sort_range(&mut recorder, 0, len);
    recorder.finish()
}

fn sort_range<T: Copy + PartialOrd>(recorder: &mut Recorder<T>, lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(recorder, lo, mid);
    sort_range(recorder, mid, hi);
    merge(recorder, lo, mid, hi);
}

fn merge<T: Copy + PartialOrd>(recorder: &mut Recorder<T>, lo: usize, mid: usize, hi: usize) {
    let aux = recorder.copy_range(lo, hi);
    // aux[x - lo] is the value that sat at index x before this merge
    let source = |index: usize| aux[index - lo];

    let (mut i, mut j, mut k) = (lo, mid, lo);
    while i < mid && j < hi {
        recorder.push_highlight(i, j, ColorToken::Compare);
        if source(i) <= source(j) {
            recorder.set(k, source(i));
            i += 1;
        } else {
            recorder.set(k, source(j));
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        recorder.set(k, source(i));
        i += 1;
        k += 1;
    }
    while j < hi {
        recorder.set(k, source(j));
        j += 1;
        k += 1;
    }
}
