use std::path::PathBuf;
use std::time::Duration;

/// Settings shared by the TUI player and headless export.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerConfig {
    /// Delay between two consecutive steps.
    pub step_delay: Duration,
    /// Bars drawn on wide terminals.
    pub bar_count: usize,
    /// Bars drawn when the terminal is narrower than `narrow_width`.
    pub narrow_bar_count: usize,
    pub narrow_width: u16,
    pub min_value: u64,
    pub max_value: u64,
    /// Fixed seed for array generation; entropy when unset.
    pub seed: Option<u64>,
    pub log_file: PathBuf,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(70),
            bar_count: 30,
            narrow_bar_count: 15,
            narrow_width: 80,
            min_value: 5,
            max_value: 730,
            seed: None,
            log_file: PathBuf::from("seesort.log"),
        }
    }
}

impl PlayerConfig {
    /// Number of bars to draw for a terminal `width` columns wide.
    pub fn bar_count_for_width(&self, width: u16) -> usize {
        if width < self.narrow_width {
            self.narrow_bar_count
        } else {
            self.bar_count
        }
    }
}
