//! 导航状态
//!
//! 只由导航器持有和修改，外部只能拿到快照

use serde::Serialize;

use crate::models::descriptor::{DocumentDescriptor, GroupTag};
use crate::models::question::QuestionMarker;
use crate::workflow::DocumentContent;

/// 加载阶段
///
/// `Idle → Loading → Ready`，`Loading → Failed`；导航操作会重新进入 `Loading`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// 前后翻页方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// 导航状态
#[derive(Debug)]
pub(crate) struct NavigatorState {
    pub phase: LoadPhase,
    pub active_group: Option<GroupTag>,
    pub active_document_index: usize,
    /// 当前展示的内容；加载失败时保留上一次成功的内容
    pub content: Option<DocumentContent>,
    pub active_question_index: Option<usize>,
    /// 最近一次发出的加载序号
    pub issued_seq: u64,
    pub last_error: Option<String>,
}

impl NavigatorState {
    pub fn new(active_group: Option<GroupTag>) -> Self {
        Self {
            phase: LoadPhase::Idle,
            active_group,
            active_document_index: 0,
            content: None,
            active_question_index: None,
            issued_seq: 0,
            last_error: None,
        }
    }

    pub fn questions(&self) -> &[QuestionMarker] {
        self.content
            .as_ref()
            .map(|c| c.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            phase: self.phase,
            active_group: self.active_group.clone(),
            active_document_index: self.active_document_index,
            active_question_index: self.active_question_index,
            content: self.content.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

/// 只读快照
#[derive(Debug, Clone, Serialize)]
pub struct NavigatorSnapshot {
    pub phase: LoadPhase,
    pub active_group: Option<GroupTag>,
    pub active_document_index: usize,
    pub active_question_index: Option<usize>,
    pub content: Option<DocumentContent>,
    pub last_error: Option<String>,
}

impl NavigatorSnapshot {
    pub fn raw_text(&self) -> &str {
        self.content.as_ref().map(|c| c.raw_text.as_str()).unwrap_or("")
    }

    pub fn questions(&self) -> &[QuestionMarker] {
        self.content
            .as_ref()
            .map(|c| c.questions.as_slice())
            .unwrap_or(&[])
    }

    /// 当前展示内容对应的文档（加载失败时可能与选中的文档不同）
    pub fn displayed(&self) -> Option<&DocumentDescriptor> {
        self.content.as_ref().map(|c| &c.descriptor)
    }
}

/// 文档列表条目（侧边栏 / 下拉框）
#[derive(Debug, Clone, Serialize)]
pub struct DocumentEntry {
    pub index: usize,
    pub descriptor: DocumentDescriptor,
    pub active: bool,
}
