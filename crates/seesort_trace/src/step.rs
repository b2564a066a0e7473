use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Semantic highlight color. The player decides how each token looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Two positions are being compared with each other.
    Compare,
    /// A position is being compared against the quicksort pivot.
    Pivot,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Compare => "compare",
            ColorToken::Pivot => "pivot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Step<T> {
    #[serde(rename = "highlight")]
    Highlight { a: usize, b: usize, color: ColorToken },
    #[serde(rename = "update")]
    Update { index: usize, value: T },
}

impl<T> Step<T> {
    pub fn is_highlight(&self) -> bool {
        matches!(self, Step::Highlight { .. })
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Step::Update { .. })
    }
}

impl<T: fmt::Display> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Highlight { a, b, color } => write!(f, "{} {a} {b}", color.as_str()),
            Step::Update { index, value } => write!(f, "set {index} = {value}"),
        }
    }
}

/// Ordered, immutable log of the steps recorded while sorting one input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    pub(crate) fn from_steps(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    pub fn highlight_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_highlight()).count()
    }

    pub fn update_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_update()).count()
    }
}

impl<T: Copy> Trace<T> {
    /// Applies every update, in order, to a copy of `initial`.
    ///
    /// Highlights carry no value change and are skipped. Fails if an update
    /// points outside `initial`, which means the trace was recorded for a
    /// different input.
    pub fn replay(&self, initial: &[T]) -> Result<Vec<T>, TraceError> {
        let mut values = initial.to_vec();
        for (position, step) in self.steps.iter().enumerate() {
            if let Step::Update { index, value } = *step {
                let len = values.len();
                let slot = values.get_mut(index).ok_or(TraceError::IndexOutOfBounds {
                    step: position,
                    index,
                    len,
                })?;
                *slot = value;
            }
        }
        Ok(values)
    }
}

impl<T> IntoIterator for Trace<T> {
    type Item = Step<T>;
    type IntoIter = std::vec::IntoIter<Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Trace<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
