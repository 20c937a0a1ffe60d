use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;
use crate::view::{FilterMode, TaskView};

/// 渲染过滤 Tab 栏（带计数）
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current: FilterMode,
    view: &TaskView<'_>,
    colors: &ThemeColors,
) {
    let modes = FilterMode::all();

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, mode) in modes.iter().enumerate() {
        let label = format!("  {} {}  ", mode.label(), view.count_for(*mode));

        if *mode == current {
            // 选中的 Tab: 背景高亮块
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(colors.muted)));
        }

        if i < modes.len() - 1 {
            spans.push(Span::raw(" "));
        }
    }

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
