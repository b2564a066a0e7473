use crate::step::{ColorToken, Step, Trace};

/// Owns the working copy of one generator run and logs every comparison and
/// write made against it.
///
/// Writes only go through [`Recorder::set`] and [`Recorder::swap`], so each
/// recorded update always matches the working copy at the time it was pushed.
pub(crate) struct Recorder<T> {
    working: Vec<T>,
    steps: Vec<Step<T>>,
}

impl<T: Copy> Recorder<T> {
    pub fn new(input: &[T]) -> Self {
        Self {
            working: input.to_vec(),
            steps: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn get(&self, index: usize) -> T {
        self.working[index]
    }

    /// Snapshot of `range`, used as the merge buffer.
    pub fn copy_range(&self, lo: usize, hi: usize) -> Vec<T> {
        self.working[lo..hi].to_vec()
    }

    pub fn push_highlight(&mut self, a: usize, b: usize, color: ColorToken) {
        self.steps.push(Step::Highlight { a, b, color });
    }

    pub fn set(&mut self, index: usize, value: T) {
        self.working[index] = value;
        self.steps.push(Step::Update { index, value });
    }

    /// Swaps two positions and records both post-swap values, `i` first.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.working.swap(i, j);
        self.steps.push(Step::Update {
            index: i,
            value: self.working[i],
        });
        self.steps.push(Step::Update {
            index: j,
            value: self.working[j],
        });
    }

    pub fn finish(self) -> Trace<T> {
        Trace::from_steps(self.steps)
    }

    #[cfg(test)]
    pub fn working(&self) -> &[T] {
        &self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_records_post_swap_values() {
        let mut recorder = Recorder::new(&[3, 9]);
        recorder.push_highlight(0, 1, ColorToken::Compare);
        recorder.swap(0, 1);
        assert_eq!(recorder.working(), &[9, 3]);
        assert_eq!(
            recorder.finish().steps(),
            &[
                Step::Highlight { a: 0, b: 1, color: ColorToken::Compare },
                Step::Update { index: 0, value: 9 },
                Step::Update { index: 1, value: 3 },
            ]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![2, 1];
        let mut recorder = Recorder::new(&input);
        recorder.set(0, 1);
        assert_eq!(input, vec![2, 1]);
        assert_eq!(recorder.working(), &[1, 1]);
    }
}
