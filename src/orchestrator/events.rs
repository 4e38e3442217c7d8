//! 导航事件
//!
//! 导航器只通过事件通知展示层，不依赖任何界面框架

use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::descriptor::DocumentDescriptor;
use crate::models::question::QuestionMarker;

/// 文档就绪时携带的内容
#[derive(Debug, Clone, Serialize)]
pub struct ReadyPayload {
    pub descriptor: DocumentDescriptor,
    pub annotated_markdown: String,
    pub html: String,
    pub questions: Vec<QuestionMarker>,
}

/// 导航事件
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum NavigatorEvent {
    /// 文档已加载并渲染
    Ready(ReadyPayload),
    /// 文档加载失败，之前的内容保持不变
    LoadFailed {
        descriptor: DocumentDescriptor,
        message: String,
    },
    /// 选中了某道题：滚动到锚点并高亮侧边栏条目
    QuestionSelected { ordinal: usize, anchor: String },
}

/// 事件接收方
///
/// 导航器在持有状态锁时调用 `emit`，实现必须立即返回、不得阻塞
pub trait EventSink: Send + Sync {
    fn emit(&self, event: NavigatorEvent);
}

/// 通过 tokio 无界通道转发事件
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: UnboundedSender<NavigatorEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, UnboundedReceiver<NavigatorEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: NavigatorEvent) {
        if self.sender.send(event).is_err() {
            warn!("事件接收方已关闭，事件被丢弃");
        }
    }
}

/// 只写日志
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: NavigatorEvent) {
        match event {
            NavigatorEvent::Ready(payload) => info!(
                "✓ 文档就绪: {} ({} 道题目)",
                payload.descriptor.title,
                payload.questions.len()
            ),
            NavigatorEvent::LoadFailed { descriptor, message } => {
                warn!("⚠️ 文档加载失败: {} - {}", descriptor.locator, message)
            }
            NavigatorEvent::QuestionSelected { ordinal, anchor } => {
                info!("→ 跳转到题目 {} (#{})", ordinal, anchor)
            }
        }
    }
}

/// 生成加载失败提示
///
/// `ko` 分组使用韩文，其他分组使用英文，与原有页面的错误提示一致
pub fn failure_message(group: &str, error: &AppError) -> String {
    let (heading, label) = if group == "ko" {
        ("문서를 불러올 수 없습니다", "오류")
    } else {
        ("Unable to load document", "Error")
    };
    format!("{}. {}: {}", heading, label, error.summary())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    #[test]
    fn test_failure_message_is_localized() {
        let err = AppError::from(FetchError::BadStatus {
            locator: "x.md".to_string(),
            status: 404,
        });
        assert_eq!(
            failure_message("ko", &err),
            "문서를 불러올 수 없습니다. 오류: Failed to load document: 404"
        );
        assert_eq!(
            failure_message("en", &err),
            "Unable to load document. Error: Failed to load document: 404"
        );
    }

    #[test]
    fn test_events_serialize_with_tag() {
        let event = NavigatorEvent::QuestionSelected {
            ordinal: 2,
            anchor: "question-2".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "question_selected");
        assert_eq!(json["anchor"], "question-2");
    }

    #[test]
    fn test_channel_sink_forwards() {
        let (sink, mut rx) = ChannelSink::new();
        sink.emit(NavigatorEvent::QuestionSelected {
            ordinal: 1,
            anchor: "question-1".to_string(),
        });
        assert!(matches!(
            rx.try_recv(),
            Ok(NavigatorEvent::QuestionSelected { ordinal: 1, .. })
        ));
    }
}
