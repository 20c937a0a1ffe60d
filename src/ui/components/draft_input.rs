//! 新任务输入框

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 输入框高度（含边框）
pub const DRAFT_HEIGHT: u16 = 3;

/// 渲染草稿输入框
/// is_editing: 是否正在输入（显示光标、高亮边框）
pub fn render(frame: &mut Frame, area: Rect, draft: &str, is_editing: bool, colors: &ThemeColors) {
    let mut spans = vec![Span::styled(" + ", Style::default().fg(colors.highlight))];

    if draft.is_empty() && !is_editing {
        spans.push(Span::styled(
            "Add a new task",
            Style::default().fg(colors.muted),
        ));
    } else {
        spans.push(Span::styled(draft, Style::default().fg(colors.text)));
    }

    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let border_color = if is_editing {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
