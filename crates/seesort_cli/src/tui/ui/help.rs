use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::Span as UiSpan;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::utils::centered_rect;

fn help_section(title: &str) -> Line<'static> {
    Line::from(UiSpan::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn help_line(key: &str, desc: &str) -> Line<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_label = format!("{:<14}", key);
    Line::from(vec![
        UiSpan::styled(key_label, key_style),
        UiSpan::raw(desc.to_string()),
    ])
}

fn help_text() -> Text<'static> {
    let lines = Vec::from([
        help_section("general"),
        help_line("q", "quit"),
        help_line("h / ?", "toggle help"),
        help_line("c", "toggle config"),
        help_line("Esc", "close popups"),
        Line::from(""),
        help_section("sort"),
        help_line("1 / m", "merge sort"),
        help_line("2 / k", "quick sort (rightmost pivot)"),
        help_line("3 / i", "insertion sort"),
        help_line("4 / b", "bubble sort"),
        help_line("x", "cancel the running sort"),
        Line::from(""),
        help_section("array"),
        help_line("g", "generate a new array"),
        Line::from(""),
        help_section("colors"),
        Line::from(vec![
            UiSpan::styled(format!("{:<14}", "cyan"), Style::default().fg(Color::Cyan)),
            UiSpan::raw("pair being compared"),
        ]),
        Line::from(vec![
            UiSpan::styled(format!("{:<14}", "magenta"), Style::default().fg(Color::Magenta)),
            UiSpan::raw("element compared with the pivot"),
        ]),
    ]);
    Text::from(lines)
}

pub(super) fn draw_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 70, area);
    let block = Block::default().borders(Borders::ALL).title("help");
    let wrap = ratatui::widgets::Wrap { trim: false };
    let help = Paragraph::new(help_text()).block(block).wrap(wrap);
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}
