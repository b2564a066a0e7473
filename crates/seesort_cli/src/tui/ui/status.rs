use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;

pub(crate) fn status_line(app: &App) -> String {
    if let Some(playing) = &app.playing {
        format!(
            "{} · step {}/{}",
            playing.algorithm, playing.applied, playing.total
        )
    } else if let Some(status) = &app.status {
        status.clone()
    } else {
        format!("{} bars", app.values.len())
    }
}

pub(super) fn draw_title(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        UiSpan::styled(
            " See The Sort ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        UiSpan::raw(" "),
        UiSpan::styled(status_line(app), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn control(key: &str, label: &str, enabled: bool) -> Vec<UiSpan<'static>> {
    let key_style = if enabled {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label_style = if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    vec![
        UiSpan::styled(format!(" {key} "), key_style),
        UiSpan::styled(format!("{label}  "), label_style),
    ]
}

pub(super) fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let idle = app.playing.is_none();
    let mut spans = Vec::new();
    spans.extend(control("1", "merge", idle));
    spans.extend(control("2", "quick", idle));
    spans.extend(control("3", "insertion", idle));
    spans.extend(control("4", "bubble", idle));
    spans.extend(control("g", "generate", idle));
    spans.extend(control("x", "cancel", !idle));
    spans.extend(control("?", "help", true));
    spans.extend(control("q", "quit", true));
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
