use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::tui::app::App;

mod bars;
mod config;
mod help;
mod status;
mod summary;
mod utils;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    status::draw_title(f, chunks[0], app);
    bars::draw_bars(f, chunks[1], app);
    status::draw_controls(f, chunks[2], app);

    if let Some(completion) = &app.completed {
        summary::draw_summary(f, f.area(), completion);
    } else if app.show_config {
        config::draw_config(f, f.area(), app);
    } else if app.show_help {
        help::draw_help(f, f.area());
    }
}
