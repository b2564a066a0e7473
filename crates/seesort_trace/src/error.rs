use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("unknown algorithm `{name}` (expected one of: merge, quick, insertion, bubble)")]
    UnknownAlgorithm { name: String },

    #[error("step {step} updates index {index} but the sequence has {len} elements")]
    IndexOutOfBounds { step: usize, index: usize, len: usize },
}
