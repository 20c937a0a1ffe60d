//! 异步操作状态管理
//!
//! 每个远端操作在 tokio 上独立运行，完成后通过通道把结果送回事件循环。
//! 不排队、不取消：结果按到达顺序应用。

use std::sync::mpsc;

use crate::sync::SyncMessage;

/// 异步操作状态
#[derive(Debug)]
pub struct AsyncOpsState {
    /// 后台操作结果发送端（克隆给每个后台任务）
    tx: mpsc::Sender<SyncMessage>,
    /// 后台操作结果通道
    rx: mpsc::Receiver<SyncMessage>,
    /// 尚未返回结果的请求数
    in_flight: usize,
}

impl Default for AsyncOpsState {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncOpsState {
    /// 创建新的异步操作状态
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            in_flight: 0,
        }
    }

    /// 登记一个新的后台操作，返回其结果发送端
    pub fn start(&mut self) -> mpsc::Sender<SyncMessage> {
        self.in_flight += 1;
        self.tx.clone()
    }

    /// 取出所有已到达的结果（按到达顺序）
    pub fn drain(&mut self) -> Vec<SyncMessage> {
        let messages: Vec<SyncMessage> = self.rx.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(messages.len());
        messages
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// 检查是否有活跃的异步操作
    pub fn has_active_operation(&self) -> bool {
        self.in_flight() > 0
    }

    /// Loading 消息（后台操作进行中时显示）
    pub fn loading_message(&self) -> Option<String> {
        match self.in_flight() {
            0 => None,
            1 => Some("Syncing...".to_string()),
            n => Some(format!("Syncing ({} requests)...", n)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
