pub mod app;
pub mod input;
pub mod run;
pub mod term;
pub mod ui;
pub mod worker;

pub use run::run_tui;
