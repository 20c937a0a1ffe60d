//! 任务列表

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;

use super::truncate;

/// 渲染任务列表：选择器、复选框、标题；已完成的标题划线并变暗
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[&Task],
    list_state: &mut ListState,
    colors: &ThemeColors,
) {
    let selected = list_state.selected();
    // 左右边框 2 + 选择器 2 + 复选框 4
    let title_width = (area.width as usize).saturating_sub(8);

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected == Some(i);
            let selector = if is_selected { "❯ " } else { "  " };

            let (checkbox, checkbox_style) = if task.completed {
                ("[x] ", Style::default().fg(colors.highlight))
            } else {
                ("[ ] ", Style::default().fg(colors.muted))
            };

            let title_style = if task.completed {
                Style::default()
                    .fg(colors.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            ListItem::new(Line::from(vec![
                Span::styled(selector, Style::default().fg(colors.highlight)),
                Span::styled(checkbox, checkbox_style),
                Span::styled(truncate(&task.title, title_width), title_style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(colors.border)),
        )
        .highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, list_state);
}
