use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::step::Trace;

mod bubble;
mod insertion;
mod merge;
mod quick;

pub use bubble::bubble_sort_trace;
pub use insertion::insertion_sort_trace;
pub use merge::merge_sort_trace;
pub use quick::quick_sort_trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Algorithm {
    Merge,
    Quick,
    Insertion,
    Bubble,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Insertion,
        Algorithm::Bubble,
    ];

    /// Records the animation trace of sorting `input` ascending.
    pub fn trace<T: Copy + PartialOrd>(self, input: &[T]) -> Trace<T> {
        let trace = match self {
            Algorithm::Merge => merge_sort_trace(input),
            Algorithm::Quick => quick_sort_trace(input),
            Algorithm::Insertion => insertion_sort_trace(input),
            Algorithm::Bubble => bubble_sort_trace(input),
        };
        tracing::debug!(
            algorithm = self.key(),
            len = input.len(),
            steps = trace.len(),
            highlights = trace.highlight_count(),
            "generated trace"
        );
        trace
    }

    /// Human readable name, used to tag playback completion.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Insertion => "insertion",
            Algorithm::Bubble => "bubble",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("sort").unwrap_or(&lowered).trim();
        let name = name.strip_suffix(['_', '-']).unwrap_or(name);
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == name)
            .ok_or_else(|| TraceError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
