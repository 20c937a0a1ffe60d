use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::view::FilterMode;

/// 渲染空状态提示
pub fn render(
    frame: &mut Frame,
    area: Rect,
    filter: FilterMode,
    searching: bool,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let (title, hint) = get_hint_text(filter, searching);

    let lines = vec![
        Line::from(Span::styled(title, Style::default().fg(colors.muted))),
        Line::from(vec![
            Span::styled("Press", Style::default().fg(colors.muted)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let y_offset = inner_area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: inner_area.height.min(2),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}

fn get_hint_text(filter: FilterMode, searching: bool) -> (&'static str, &'static str) {
    if searching {
        return ("No tasks match the search", "to add a new task");
    }
    match filter {
        FilterMode::All => ("No tasks yet", "to add a new task"),
        FilterMode::Active => ("Nothing left to do", "to add a new task"),
        FilterMode::Completed => ("No completed tasks", "to add a new task"),
    }
}
