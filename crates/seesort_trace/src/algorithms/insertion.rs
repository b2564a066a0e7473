use crate::recorder::Recorder;
use crate::step::{ColorToken, Trace};

/// Insertion sort that shifts larger neighbours right one write at a time.
///
/// Every pass ends with an update placing the carried value, even when it
/// never moved.
pub fn insertion_sort_trace<T: Copy + PartialOrd>(input: &[T]) -> Trace<T> {
    let mut recorder = Recorder::new(input);
    for i in 1..recorder.len() {
        let key = recorder.get(i);
        let mut cursor = i;
        while cursor > 0 {
            recorder.push_highlight(cursor - 1, cursor, ColorToken::Compare);
            let left = recorder.get(cursor - 1);
            if left > key {
                recorder.set(cursor, left);
                cursor -= 1;
            } else {
                break;
            }
        }
        recorder.set(cursor, key);
    }
    recorder.finish()
}
