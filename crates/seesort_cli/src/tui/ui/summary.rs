use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::Completion;

use super::utils::centered_rect;

pub(crate) fn summary_text(completion: &Completion) -> Text<'static> {
    Text::from(vec![
        Line::styled(
            format!("{} finished", completion.algorithm),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("comparisons  {}", completion.comparisons)),
        Line::from(format!("writes       {}", completion.writes)),
        Line::from(""),
        Line::styled("press any key", Style::default().fg(Color::DarkGray)),
    ])
}

pub(super) fn draw_summary(f: &mut Frame, area: Rect, completion: &Completion) {
    let popup = centered_rect(40, 40, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(completion.algorithm.display_name());
    f.render_widget(Clear, popup);
    f.render_widget(Paragraph::new(summary_text(completion)).block(block), popup);
}
