pub mod config;

use std::io;
use std::path::{Path, PathBuf};

/// Overrides the data directory (defaults to `~/.taskmaster`)
pub const HOME_ENV: &str = "TASKMASTER_HOME";

/// 获取 ~/.taskmaster/ 目录路径
pub fn taskmaster_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".taskmaster")
}

/// TUI 运行时的日志文件
pub fn log_path() -> PathBuf {
    taskmaster_dir().join("taskmaster.log")
}

/// 将数据序列化后保存到 TOML 文件（自动创建父目录）
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}
