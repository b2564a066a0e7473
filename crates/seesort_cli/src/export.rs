use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use seesort_trace::{Algorithm, Trace};

/// On-disk form of one generated trace, with the input it was recorded for.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TraceFile {
    pub algorithm: Algorithm,
    pub initial: Vec<u64>,
    pub steps: Trace<u64>,
}

impl TraceFile {
    pub fn record(algorithm: Algorithm, initial: Vec<u64>) -> Self {
        let steps = algorithm.trace(&initial);
        Self {
            algorithm,
            initial,
            steps,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize trace")
    }

    pub fn to_text(&self) -> String {
        let initial = self
            .initial
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "# {} [{}]: {} steps, {} comparisons\n{}",
            self.algorithm,
            initial,
            self.steps.len(),
            self.steps.highlight_count(),
            self.steps
        )
    }

    pub fn write(&self, path: &Path, json: bool) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = if json { self.to_json()? } else { self.to_text() };
        fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_export() {
        let file = TraceFile::record(Algorithm::Merge, vec![2, 1]);
        insta::assert_snapshot!(file.to_text(), @r"
        # Merge Sort [2, 1]: 3 steps, 1 comparisons
        compare 0 1
        set 0 = 1
        set 1 = 2
        ");
    }

    #[test]
    fn json_loads_back_and_replays() {
        let file = TraceFile::record(Algorithm::Quick, vec![5, 3, 8, 1]);
        let loaded: TraceFile = serde_json::from_str(&file.to_json().unwrap()).unwrap();
        assert_eq!(loaded, file);
        assert_eq!(
            loaded.steps.replay(&loaded.initial).unwrap(),
            vec![1, 3, 5, 8]
        );
    }

    #[test]
    fn json_names_the_algorithm() {
        let json = TraceFile::record(Algorithm::Insertion, vec![]).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "insertion");
        assert_eq!(value["steps"], serde_json::json!([]));
    }
}
