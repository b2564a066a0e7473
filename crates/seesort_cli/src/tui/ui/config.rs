use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Row, Table};

use crate::config::PlayerConfig;
use crate::tui::app::App;

use super::utils::centered_rect;

pub(crate) fn config_rows(config: &PlayerConfig) -> Vec<(&'static str, String)> {
    vec![
        ("step_delay", format!("{} ms", config.step_delay.as_millis())),
        ("bars", config.bar_count.to_string()),
        (
            "narrow_bars",
            format!("{} below {} cols", config.narrow_bar_count, config.narrow_width),
        ),
        (
            "values",
            format!("{}..={}", config.min_value, config.max_value),
        ),
        (
            "seed",
            config
                .seed
                .map(|s| s.to_string())
                .unwrap_or_else(|| "random".to_string()),
        ),
        ("log_file", config.log_file.display().to_string()),
    ]
}

pub(super) fn draw_config(f: &mut Frame, area: Rect, app: &App) {
    let popup = centered_rect(60, 50, area);

    let header = Row::new(vec![Cell::from("setting"), Cell::from("value")])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = config_rows(&app.config)
        .into_iter()
        .map(|(label, value)| Row::new(vec![Cell::from(label), Cell::from(value)]));

    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("config"));

    f.render_widget(Clear, popup);
    f.render_widget(table, popup);
}
