//! Task Master 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理。远端请求的所有失败（网络错误、
//! 非 2xx 状态、无法解析的响应）统一折叠为 [`TaskError::Request`]。

use std::io;
use thiserror::Error;

/// Task Master 错误类型
#[derive(Debug, Error)]
pub enum TaskError {
    /// 远端请求失败（网络错误或非成功 HTTP 状态）
    #[error("Request failed ({op}): {message}")]
    Request { op: &'static str, message: String },

    /// I/O 错误（配置文件读写等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 资源不存在
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Task Master Result 类型别名
pub type Result<T> = std::result::Result<T, TaskError>;

impl TaskError {
    /// 创建请求失败错误
    pub fn request(op: &'static str, message: impl Into<String>) -> Self {
        Self::Request {
            op,
            message: message.into(),
        }
    }

    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 NotFound 错误
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// 是否为远端请求失败
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Request { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::request("list", "connection refused");
        assert_eq!(err.to_string(), "Request failed (list): connection refused");

        let err = TaskError::not_found("task 7");
        assert_eq!(err.to_string(), "Not found: task 7");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TaskError = io_err.into();
        assert!(matches!(err, TaskError::Io(_)));
        assert!(!err.is_request());
    }

    #[test]
    fn test_request_kind() {
        assert!(TaskError::request("create", "boom").is_request());
        assert!(!TaskError::config("bad url").is_request());
    }
}
