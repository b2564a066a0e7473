use rand::rngs::StdRng;
use seesort_trace::{Algorithm, ColorToken, Step};

use crate::config::PlayerConfig;
use crate::tui::worker::PlayMsg;
use crate::values::{new_rng, random_values};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub a: usize,
    pub b: usize,
    pub color: ColorToken,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playing {
    pub algorithm: Algorithm,
    pub applied: usize,
    pub total: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Completion {
    pub algorithm: Algorithm,
    pub comparisons: usize,
    pub writes: usize,
}

#[derive(Debug)]
pub struct App {
    pub config: PlayerConfig,
    pub values: Vec<u64>,
    pub max_value: u64,
    pub highlight: Option<Highlight>,
    /// The bars came from `--values`; resizing keeps them.
    pub supplied: bool,

    // Playback
    pub playing: Option<Playing>,
    pub completed: Option<Completion>,
    pub status: Option<String>,

    // Popups
    pub show_help: bool,
    pub show_config: bool,

    rng: StdRng,
}

impl App {
    pub fn new(config: PlayerConfig, bar_count: usize) -> Self {
        let rng = new_rng(&config);
        let mut app = Self {
            config,
            values: Vec::new(),
            max_value: 0,
            highlight: None,
            supplied: false,
            playing: None,
            completed: None,
            status: None,
            show_help: false,
            show_config: false,
            rng,
        };
        app.regenerate(bar_count);
        app
    }

    pub fn with_values(config: PlayerConfig, values: Vec<u64>) -> Self {
        let mut app = Self::new(config, 0);
        app.set_values(values);
        app.supplied = true;
        app
    }

    pub fn is_busy(&self) -> bool {
        self.playing.is_some() || self.completed.is_some()
    }

    pub fn regenerate(&mut self, bar_count: usize) {
        let values = random_values(&mut self.rng, bar_count, &self.config);
        self.set_values(values);
        self.supplied = false;
    }

    fn set_values(&mut self, values: Vec<u64>) {
        self.max_value = values.iter().copied().max().unwrap_or(0);
        self.values = values;
        self.highlight = None;
        self.completed = None;
        self.status = None;
    }

    /// Picks the bar count for a new terminal width; regenerates when idle
    /// and the bars are random.
    pub fn resize(&mut self, width: u16) {
        let bar_count = self.config.bar_count_for_width(width);
        if bar_count != self.values.len() && !self.is_busy() && !self.supplied {
            self.regenerate(bar_count);
        }
    }

    /// Locks the controls as soon as a sort is requested. The worker's
    /// `Started` message fills in the step total later.
    pub fn start_playing(&mut self, algorithm: Algorithm) {
        self.highlight = None;
        self.status = None;
        self.playing = Some(Playing {
            algorithm,
            applied: 0,
            total: 0,
        });
    }

    pub fn apply_step(&mut self, step: Step<u64>) {
        match step {
            Step::Highlight { a, b, color } => {
                self.highlight = Some(Highlight { a, b, color });
            }
            Step::Update { index, value } => {
                let len = self.values.len();
                match self.values.get_mut(index) {
                    Some(slot) => *slot = value,
                    None => tracing::warn!(index, len, "update out of range"),
                }
            }
        }
    }

    pub fn apply_play_update(&mut self, msg: PlayMsg) {
        match msg {
            PlayMsg::Started { algorithm, total } => {
                self.playing = Some(Playing {
                    algorithm,
                    applied: 0,
                    total,
                });
                self.status = None;
            }
            PlayMsg::Step(step) => {
                self.apply_step(step);
                if let Some(playing) = self.playing.as_mut() {
                    playing.applied += 1;
                }
            }
            PlayMsg::Finished {
                algorithm,
                comparisons,
                writes,
            } => {
                self.playing = None;
                self.highlight = None;
                self.completed = Some(Completion {
                    algorithm,
                    comparisons,
                    writes,
                });
            }
            PlayMsg::Cancelled { algorithm, applied } => {
                self.playing = None;
                self.highlight = None;
                self.status = Some(format!("{algorithm} cancelled after {applied} steps"));
            }
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.show_config = false;
        }
    }

    pub fn toggle_config(&mut self) {
        self.show_config = !self.show_config;
        if self.show_config {
            self.show_help = false;
        }
    }
}
