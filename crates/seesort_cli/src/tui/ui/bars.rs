use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};

use crate::palette::{gradient_color, token_color};
use crate::tui::app::App;

use super::utils::bar_width;

const BAR_GAP: u16 = 1;

pub(crate) fn bar_color(app: &App, index: usize, value: u64) -> Color {
    match app.highlight {
        Some(h) if h.a == index || h.b == index => token_color(h.color),
        _ => gradient_color(value, app.max_value),
    }
}

pub(super) fn draw_bars(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);

    let bars: Vec<Bar> = app
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(app, index, value);
            Bar::default()
                .value(value)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width(inner.width, app.values.len(), BAR_GAP))
        .bar_gap(BAR_GAP)
        .max(app.max_value.max(1))
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
