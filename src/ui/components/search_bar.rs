//! 搜索框组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染搜索框：左侧搜索词，右侧匹配数
pub fn render(
    frame: &mut Frame,
    area: Rect,
    term: &str,
    matches: usize,
    is_editing: bool,
    colors: &ThemeColors,
) {
    let mut left = vec![
        Span::styled(" search: ", Style::default().fg(colors.highlight)),
        Span::styled(term, Style::default().fg(colors.text)),
    ];

    if is_editing {
        left.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let right = Span::styled(
        match matches {
            1 => "1 match ".to_string(),
            n => format!("{} matches ", n),
        },
        Style::default().fg(colors.muted),
    );

    let used: usize = left.iter().map(|s| s.width()).sum::<usize>() + right.width();
    left.push(Span::raw(" ".repeat((area.width as usize).saturating_sub(used))));
    left.push(right);

    let paragraph = Paragraph::new(Line::from(left)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(paragraph, area);
}
