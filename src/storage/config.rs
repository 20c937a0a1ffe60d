//! 应用配置持久化
//!
//! `~/.taskmaster/config.toml`，缺失的文件或字段使用默认值。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::{save_toml, taskmaster_dir};
use crate::client::DraftPolicy;
use crate::error::Result;
use crate::view::FilterMode;

/// Overrides `api.base_url`
pub const API_URL_ENV: &str = "TASKMASTER_API_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// 远端 API 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 任务 API 前缀，如 "http://localhost:5000/api"
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 请求超时（秒），未设置则不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// 界面配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// 主题名: "Dark" / "Light" / "Dracula"
    #[serde(default = "default_theme_name")]
    pub theme: String,
    /// 草稿清空时机
    #[serde(default)]
    pub draft_policy: DraftPolicy,
    /// 启动时的过滤模式
    #[serde(default)]
    pub default_filter: FilterMode,
    /// 自动刷新间隔（秒），0 表示关闭
    #[serde(default)]
    pub auto_refresh_secs: u64,
}

fn default_theme_name() -> String {
    "Dark".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            draft_policy: DraftPolicy::default(),
            default_filter: FilterMode::default(),
            auto_refresh_secs: 0,
        }
    }
}

impl Config {
    /// 解析 API 地址：命令行 > 环境变量 > 配置文件 > 默认值
    pub fn resolve_base_url(&self, cli: Option<&str>) -> String {
        let env = std::env::var(API_URL_ENV).ok();
        self.resolve_base_url_with(cli, env.as_deref())
    }

    /// 生效配置：`api.base_url` 替换为实际使用的地址
    pub fn effective(&self, cli: Option<&str>) -> Config {
        let env = std::env::var(API_URL_ENV).ok();
        self.effective_with(cli, env.as_deref())
    }

    fn effective_with(&self, cli: Option<&str>, env: Option<&str>) -> Config {
        let mut config = self.clone();
        config.api.base_url = self.resolve_base_url_with(cli, env);
        config
    }

    fn resolve_base_url_with(&self, cli: Option<&str>, env: Option<&str>) -> String {
        [cli, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or(self.api.base_url.as_str())
            .to_string()
    }
}

/// 获取配置文件路径
pub fn config_path() -> PathBuf {
    taskmaster_dir().join("config.toml")
}

/// 加载配置（不存在则返回默认值）
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// 从指定路径加载配置，读取或解析失败时回退到默认值
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read_config(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        }
    }
}

/// 读取并解析配置文件
pub fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 配置的 TOML 文本（`taskmaster config` 输出）
pub fn render_config(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// 保存配置
pub fn save_config(config: &Config) -> io::Result<()> {
    save_toml(&config_path(), config)
}
