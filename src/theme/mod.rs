mod colors;

use ratatui::style::Color;

pub use colors::*;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Dracula,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
        }
    }

    /// 从名称创建主题（用于配置加载），未知名称回退到 Dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dracula" => Theme::Dracula,
            _ => Theme::Dark,
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Dark => dark_colors(),
            Theme::Light => light_colors(),
            Theme::Dracula => dracula_colors(),
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行、搜索框）
    pub bg_secondary: Color,
    /// 标题颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字
    pub muted: Color,
    /// 边框
    pub border: Color,
    /// 已完成任务
    pub done: Color,
    pub tab_active_fg: Color,
    pub tab_active_bg: Color,
}
