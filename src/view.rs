//! 派生视图
//!
//! 从任务列表计算显示用的子集与统计，纯函数、无副作用。

use serde::{Deserialize, Serialize};

use crate::model::Task;

/// 完成状态过滤
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// 显示名称
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// 所有过滤模式（Tab 顺序）
    pub fn all() -> [FilterMode; 3] {
        [FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }

    /// 切换到下一个模式
    pub fn cycle(&self) -> Self {
        match self {
            FilterMode::All => FilterMode::Active,
            FilterMode::Active => FilterMode::Completed,
            FilterMode::Completed => FilterMode::All,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !task.completed,
            FilterMode::Completed => task.completed,
        }
    }
}

/// 派生视图结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView<'a> {
    /// 过滤后的任务，保持服务端返回顺序
    pub visible: Vec<&'a Task>,
    /// 全量任务数
    pub total: usize,
    /// 已完成数（基于全量）
    pub completed_count: usize,
    /// 未完成数 = total - completed_count
    pub active_count: usize,
}

impl TaskView<'_> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// 某个过滤模式在全量列表中的数量
    pub fn count_for(&self, mode: FilterMode) -> usize {
        match mode {
            FilterMode::All => self.total,
            FilterMode::Active => self.active_count,
            FilterMode::Completed => self.completed_count,
        }
    }
}

/// 先按完成状态过滤，再按标题做大小写不敏感的子串匹配
///
/// 空白搜索词匹配全部任务。统计数字始终基于全量列表。
pub fn derive_view<'a>(tasks: &'a [Task], filter: FilterMode, search: &str) -> TaskView<'a> {
    let needle = search.trim().to_lowercase();

    let visible = tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| needle.is_empty() || task.title.to_lowercase().contains(&needle))
        .collect();

    let total = tasks.len();
    let completed_count = tasks.iter().filter(|task| task.completed).count();

    TaskView {
        visible,
        total,
        completed_count,
        active_count: total - completed_count,
    }
}
