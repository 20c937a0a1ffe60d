use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, InputMode};
use crate::view::FilterMode;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl+C 任何模式下都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::EditingDraft => handle_draft_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// 处理列表导航模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 删除
        KeyCode::Char('x') | KeyCode::Char('d') => {
            app.delete_selected();
        }

        // 编辑草稿
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.start_editing_draft();
        }

        // 搜索
        KeyCode::Char('/') => {
            app.enter_search_mode();
        }

        // Tab 切换过滤
        KeyCode::Tab => {
            app.cycle_filter();
        }

        // 数字快捷键切换过滤
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Active),
        KeyCode::Char('3') => app.set_filter(FilterMode::Completed),

        // 刷新
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.refresh();
        }

        _ => {}
    }
}

/// 处理草稿输入模式的键盘事件
fn handle_draft_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交
        KeyCode::Enter => {
            app.submit_draft();
        }

        // 离开输入（保留草稿）
        KeyCode::Esc => {
            app.mode = InputMode::Normal;
        }

        // 删除字符
        KeyCode::Backspace => {
            app.draft_pop();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.draft_push(c);
        }

        _ => {}
    }
}

/// 处理搜索模式的键盘事件
fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 保留搜索词，回到列表
        KeyCode::Enter => {
            app.exit_search_mode();
        }

        // 取消搜索
        KeyCode::Esc => {
            app.clear_search();
        }

        // 导航
        KeyCode::Down => {
            app.select_next();
        }
        KeyCode::Up => {
            app.select_previous();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.search_pop();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.search_push(c);
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::remote::fake::FakeApi;
    use crate::storage::config::Config;

    fn new_app() -> App {
        App::new(Arc::new(FakeApi::default()), &Config::default(), "test")
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_draft_editing_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, InputMode::EditingDraft);

        // 'q' 在输入模式下是普通字符
        type_str(&mut app, "quiz");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state().draft_title, "qui");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.state().draft_title, "qui");
    }

    #[test]
    fn test_filter_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state().filter_mode, FilterMode::Active);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state().filter_mode, FilterMode::Completed);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state().filter_mode, FilterMode::All);
    }

    #[test]
    fn test_search_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, InputMode::Search);
        type_str(&mut app, "milk");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.state().search_term, "milk");

        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Esc);
        assert!(app.state().search_term.is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app();
        app.start_editing_draft();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_without_selection_is_noop() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.async_ops.has_active_operation());
    }
}
