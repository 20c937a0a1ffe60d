use std::sync::Arc;
use std::time::Duration;

use ratatui::widgets::ListState;

use crate::async_ops_state::AsyncOpsState;
use crate::client::{TaskList, TaskListClient};
use crate::model::Task;
use crate::remote::TaskApi;
use crate::storage::config::Config;
use crate::sync::{self, Mutation};
use crate::theme::{Theme, ThemeColors};
use crate::view::FilterMode;

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// 列表导航
    #[default]
    Normal,
    /// 编辑新任务草稿
    EditingDraft,
    /// 输入搜索词
    Search,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务列表与远端 API
    pub client: TaskListClient<dyn TaskApi>,
    /// 当前输入模式
    pub mode: InputMode,
    /// 列表选择状态（索引基于过滤后的可见列表）
    pub list_state: ListState,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 后台请求状态
    pub async_ops: AsyncOpsState,
    /// 自动刷新间隔
    pub auto_refresh: Option<Duration>,
    /// 顶部显示的 API 地址
    pub api_label: String,
}

impl App {
    pub fn new(api: Arc<dyn TaskApi>, config: &Config, api_label: impl Into<String>) -> Self {
        let theme = Theme::from_name(&config.ui.theme);
        let state = TaskList::new(config.ui.draft_policy, config.ui.default_filter);
        let auto_refresh = match config.ui.auto_refresh_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Self {
            should_quit: false,
            client: TaskListClient::new(api, state),
            mode: InputMode::Normal,
            list_state: ListState::default(),
            theme,
            colors: theme.colors(),
            async_ops: AsyncOpsState::new(),
            auto_refresh,
            api_label: api_label.into(),
        }
    }

    pub fn state(&self) -> &TaskList {
        self.client.state()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// 在后台执行一个远端操作，结果由 `poll_sync_results` 应用
    pub fn dispatch(&mut self, mutation: Mutation) {
        let tx = self.async_ops.start();
        sync::spawn(self.client.api(), mutation, tx);
    }

    /// 刷新数据
    pub fn refresh(&mut self) {
        self.dispatch(Mutation::Refresh);
    }

    /// 应用所有已返回的后台结果（后到者覆盖先到者）
    pub fn poll_sync_results(&mut self) {
        for msg in self.async_ops.drain() {
            if msg.outcome.is_rejected() {
                tracing::debug!(action = msg.mutation.name(), "request rejected, skipping refresh");
            }
            // 失败已在 apply 中记录日志，界面保持不变
            let _ = self.client.state_mut().apply(&msg.mutation, msg.outcome);
        }
        self.ensure_selection();
    }

    // ========== 草稿 ==========

    pub fn start_editing_draft(&mut self) {
        self.mode = InputMode::EditingDraft;
    }

    pub fn draft_push(&mut self, c: char) {
        self.client.state_mut().draft_title.push(c);
    }

    pub fn draft_pop(&mut self) {
        self.client.state_mut().draft_title.pop();
    }

    /// 提交草稿；空白标题不发请求
    pub fn submit_draft(&mut self) {
        if let Some(mutation) = self.client.state_mut().submit_draft() {
            self.dispatch(mutation);
        }
    }

    // ========== 过滤与搜索 ==========

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.client.state_mut().filter_mode = mode;
        self.reset_selection();
    }

    pub fn cycle_filter(&mut self) {
        let next = self.state().filter_mode.cycle();
        self.set_filter(next);
    }

    pub fn enter_search_mode(&mut self) {
        self.mode = InputMode::Search;
    }

    pub fn exit_search_mode(&mut self) {
        self.mode = InputMode::Normal;
    }

    /// 清空搜索并退出搜索模式
    pub fn clear_search(&mut self) {
        self.client.state_mut().search_term.clear();
        self.mode = InputMode::Normal;
        self.reset_selection();
    }

    pub fn search_push(&mut self, c: char) {
        self.client.state_mut().search_term.push(c);
        self.reset_selection();
    }

    pub fn search_pop(&mut self) {
        self.client.state_mut().search_term.pop();
        self.reset_selection();
    }

    // ========== 选择与操作 ==========

    fn visible_len(&self) -> usize {
        self.state().view().visible.len()
    }

    /// 当前选中的可见任务
    pub fn selected_task(&self) -> Option<Task> {
        let index = self.list_state.selected()?;
        self.state().view().visible.get(index).map(|t| (*t).clone())
    }

    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.dispatch(Mutation::toggle(&task));
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.dispatch(Mutation::delete(&task.id));
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    fn reset_selection(&mut self) {
        self.list_state.select(None);
        self.ensure_selection();
    }

    /// 确保选中项落在可见列表范围内
    pub fn ensure_selection(&mut self) {
        let len = self.visible_len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::DraftPolicy;
    use crate::remote::fake::FakeApi;

    fn app_with(api: Arc<FakeApi>, config: &Config) -> App {
        App::new(api, config, "test")
    }

    /// 等待所有后台请求返回并应用
    async fn settle(app: &mut App) {
        for _ in 0..200 {
            app.poll_sync_results();
            if !app.async_ops.has_active_operation() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("background requests did not finish");
    }

    #[test]
    fn test_new_uses_config() {
        let mut config = Config::default();
        config.ui.theme = "Light".to_string();
        config.ui.default_filter = FilterMode::Active;
        config.ui.auto_refresh_secs = 15;
        config.ui.draft_policy = DraftPolicy::ClearOnSubmit;

        let app = app_with(Arc::new(FakeApi::default()), &config);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.state().filter_mode, FilterMode::Active);
        assert_eq!(app.state().draft_policy, DraftPolicy::ClearOnSubmit);
        assert_eq!(app.auto_refresh, Some(Duration::from_secs(15)));
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[tokio::test]
    async fn test_refresh_and_selection() {
        let api = Arc::new(FakeApi::with_titles(&[("a", false), ("b", true), ("c", false)]));
        let mut app = app_with(api, &Config::default());

        app.refresh();
        settle(&mut app).await;
        assert_eq!(app.state().tasks().len(), 3);
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));

        app.set_filter(FilterMode::Completed);
        assert_eq!(app.selected_task().map(|t| t.title), Some("b".to_string()));
    }

    #[tokio::test]
    async fn test_submit_toggle_delete() {
        let api = Arc::new(FakeApi::default());
        let mut app = app_with(api.clone(), &Config::default());

        for c in "Buy milk".chars() {
            app.draft_push(c);
        }
        app.submit_draft();
        settle(&mut app).await;
        assert!(app.state().draft_title.is_empty());
        assert_eq!(app.state().tasks().len(), 1);

        app.toggle_selected();
        settle(&mut app).await;
        assert!(app.state().tasks()[0].completed);

        app.delete_selected();
        settle(&mut app).await;
        assert!(app.state().tasks().is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert!(api.store.is_empty());
    }

    #[tokio::test]
    async fn test_failed_submit_is_silent() {
        let api = Arc::new(FakeApi::default());
        api.set_fail_mutations(true);
        let mut app = app_with(api, &Config::default());

        app.draft_push('x');
        app.submit_draft();
        settle(&mut app).await;
        assert_eq!(app.state().draft_title, "x");
        assert!(app.state().tasks().is_empty());
    }

    #[test]
    fn test_blank_draft_dispatches_nothing() {
        let mut app = app_with(Arc::new(FakeApi::default()), &Config::default());
        app.draft_push(' ');
        app.submit_draft();
        assert!(!app.async_ops.has_active_operation());
    }

    #[tokio::test]
    async fn test_search_narrows_selection() {
        let api = Arc::new(FakeApi::with_titles(&[("Buy milk", false), ("Walk dog", false)]));
        let mut app = app_with(api, &Config::default());
        app.refresh();
        settle(&mut app).await;
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(1));

        app.enter_search_mode();
        for c in "MILK".chars() {
            app.search_push(c);
        }
        assert_eq!(app.list_state.selected(), Some(0));
        assert_eq!(app.selected_task().map(|t| t.title), Some("Buy milk".to_string()));

        app.clear_search();
        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.state().search_term.is_empty());
    }
}
