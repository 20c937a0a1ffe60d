use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Header 总高度：1 (边框) + 1 (标题) + 1 (API 信息)
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部区域（标题 + API 信息）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    api_label: &str,
    task_count: usize,
    colors: &ThemeColors,
) {
    // 外框
    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, info_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner_area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Task Master",
        Style::default()
            .fg(colors.logo)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    render_api_info(frame, info_area, api_label, task_count, colors);
}

fn render_api_info(
    frame: &mut Frame,
    area: Rect,
    api_label: &str,
    task_count: usize,
    colors: &ThemeColors,
) {
    let left = Span::styled(format!(" {}", api_label), Style::default().fg(colors.muted));

    let right = Span::styled(
        format!("{} tasks ", task_count),
        Style::default().fg(colors.muted),
    );

    // 计算中间填充空格
    let total_width = area.width as usize;
    let used_width = left.width() + right.width();
    let padding = " ".repeat(total_width.saturating_sub(used_width));

    let line = Line::from(vec![left, Span::raw(padding), right]);
    frame.render_widget(Paragraph::new(line), area);
}
