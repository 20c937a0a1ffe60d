use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::InputMode;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, mode: InputMode, has_items: bool, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(mode, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn get_shortcuts(mode: InputMode, has_items: bool) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::EditingDraft => vec![("Enter", "add"), ("Esc", "done")],
        InputMode::Search => vec![("Enter", "keep"), ("Esc", "clear"), ("↑↓", "move")],
        InputMode::Normal => {
            if has_items {
                vec![
                    ("a", "add"),
                    ("Space", "toggle"),
                    ("x", "delete"),
                    ("/", "search"),
                    ("Tab", "filter"),
                    ("r", "refresh"),
                    ("q", "quit"),
                ]
            } else {
                vec![
                    ("a", "add"),
                    ("/", "search"),
                    ("Tab", "filter"),
                    ("r", "refresh"),
                    ("q", "quit"),
                ]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_actions_only_with_items() {
        let keys = |has_items| -> Vec<&'static str> {
            get_shortcuts(InputMode::Normal, has_items)
                .into_iter()
                .map(|(k, _)| k)
                .collect()
        };
        assert!(keys(true).contains(&"Space"));
        assert!(!keys(false).contains(&"Space"));
        assert!(!keys(false).contains(&"x"));
    }

    #[test]
    fn test_mode_specific_shortcuts() {
        assert_eq!(get_shortcuts(InputMode::EditingDraft, true)[0], ("Enter", "add"));
        assert_eq!(get_shortcuts(InputMode::Search, false)[1], ("Esc", "clear"));
    }
}
