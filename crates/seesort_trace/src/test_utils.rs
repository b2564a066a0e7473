use crate::step::{Step, Trace};

pub(crate) struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9e3779b97f4a7c15 } else { seed },
        }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        // xorshift64*
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

/// Bar heights in the same range the visualizer draws, duplicates included.
pub(crate) fn seeded_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = XorShift64::new(seed);
    (0..n).map(|_| 5 + (rng.next_u64() % 726) as u32).collect()
}

/// Every step must point inside the input, and every written value must be
/// one of the input's values.
pub(crate) fn assert_updates_in_bounds<T: Copy + PartialEq + std::fmt::Debug>(
    trace: &Trace<T>,
    input: &[T],
) {
    for step in trace {
        match *step {
            Step::Update { index, value } => {
                assert!(index < input.len(), "update index {index} out of range");
                assert!(input.contains(&value), "value {value:?} not in input");
            }
            Step::Highlight { a, b, .. } => {
                assert!(a < input.len() && b < input.len(), "highlight ({a}, {b}) out of range");
            }
        }
    }
}
