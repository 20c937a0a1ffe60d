//! 任务数据模型
//!
//! `Task` 是唯一的实体。id 由远端分配，客户端从不自行生成。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 远端分配的任务 ID
///
/// 对客户端不透明：参考后端返回整数，其他部署可能返回字符串。
/// 反序列化时接受两种形式，序列化时按原样回写，这样 `PUT` 回传的完整记录
/// 与服务端自己的表示一致。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Int(i64),
    Str(String),
}

impl TaskId {
    /// 从命令行参数解析：能解析为整数则视为整数 id
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => TaskId::Int(n),
            Err(_) => TaskId::Str(raw.to_string()),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Int(n) => write!(f, "{}", n),
            TaskId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TaskId {
    fn from(n: i64) -> Self {
        TaskId::Int(n)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::Str(s.to_string())
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 远端分配，创建后不变
    pub id: TaskId,
    /// 显示标题，创建后不再修改
    pub title: String,
    /// 完成标记
    pub completed: bool,
}

impl Task {
    /// 返回 `completed` 取反、其余字段不变的完整记录（toggle 请求体）
    pub fn toggled(&self) -> Task {
        Task {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

/// 创建请求体：`{title, completed: false}`，不含 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_id_accepts_int_and_string() {
        let task: Task =
            serde_json::from_value(json!({"id": 1, "title": "Buy milk", "completed": false}))
                .unwrap();
        assert_eq!(task.id, TaskId::Int(1));

        let task: Task =
            serde_json::from_value(json!({"id": "a1b2", "title": "Buy eggs", "completed": true}))
                .unwrap();
        assert_eq!(task.id, TaskId::Str("a1b2".to_string()));
        assert!(task.completed);
    }

    #[test]
    fn test_task_id_echoes_server_form() {
        let task = Task {
            id: TaskId::Int(42),
            title: "x".to_string(),
            completed: false,
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], json!(42));

        let task = Task {
            id: TaskId::from("42"),
            ..task
        };
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["id"], json!("42"));
    }

    #[test]
    fn test_task_id_parse_and_display() {
        assert_eq!(TaskId::parse("7"), TaskId::Int(7));
        assert_eq!(TaskId::parse(" 7 "), TaskId::Int(7));
        assert_eq!(TaskId::parse("abc"), TaskId::Str("abc".to_string()));
        assert_eq!(TaskId::from(7), TaskId::Int(7));
        assert_eq!(TaskId::Int(7).to_string(), "7");
        assert_eq!(TaskId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_toggled_only_flips_completed() {
        let task = Task {
            id: TaskId::Int(3),
            title: "Walk dog".to_string(),
            completed: false,
        };
        let toggled = task.toggled();
        assert_eq!(toggled.id, task.id);
        assert_eq!(toggled.title, task.title);
        assert!(toggled.completed);
        assert!(!toggled.toggled().completed);
    }

    #[test]
    fn test_new_task_body() {
        let body = serde_json::to_value(NewTask::new("Buy milk")).unwrap();
        assert_eq!(body, json!({"title": "Buy milk", "completed": false}));
    }
}
