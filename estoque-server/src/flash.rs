//! 提示消息 (flash)
//!
//! 变更成功后先入队再重定向，下一次渲染的页面取出并显示。
//! 消息在浏览器端由 CSS 动画在 [`FLASH_TTL_MS`] 后淡出。

use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// 消息显示时长 (毫秒)
pub const FLASH_TTL_MS: u64 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS class
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

/// Messages waiting for the next rendered page (single operator)
#[derive(Debug, Clone, Default)]
pub struct FlashQueue {
    pending: Arc<Mutex<Vec<Flash>>>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, flash: Flash) {
        self.pending.lock().push(flash);
    }

    /// Take every queued message, oldest first
    pub fn drain(&self) -> Vec<Flash> {
        std::mem::take(&mut *self.pending.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let queue = FlashQueue::new();
        queue.push(Flash::success("Produto adicionado!"));
        queue.push(Flash::error("Falha ao salvar os dados."));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, FlashKind::Success);
        assert_eq!(drained[1].message, "Falha ao salvar os dados.");
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_clones_share_queue() {
        let queue = FlashQueue::new();
        queue.clone().push(Flash::success("ok"));
        assert_eq!(queue.drain().len(), 1);
    }
}
