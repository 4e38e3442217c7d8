//! 文档导航器 - 编排层
//!
//! ## 职责
//!
//! 1. **持有状态**：唯一拥有 `NavigatorState`，所有修改都经过这里
//! 2. **导航操作**：切换分组、选择文档、前后翻页、选择题目
//! 3. **加载调度**：每次加载发放递增序号，只采用最新序号的结果
//! 4. **事件通知**：通过 `EventSink` 告知展示层
//!
//! ## 并发约定
//!
//! - 所有方法只需要 `&self`，状态放在 `std::sync::Mutex` 中
//! - 锁不会跨越 `.await` 持有，唯一的挂起点是获取文档
//! - 事件在持锁期间发出，保证事件顺序与状态变更顺序一致

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::infrastructure::TextFetcher;
use crate::models::catalog::{Catalog, GroupSwitch};
use crate::models::question::anchor_id;
use crate::orchestrator::events::{failure_message, EventSink, NavigatorEvent, ReadyPayload};
use crate::orchestrator::state::{Direction, DocumentEntry, LoadPhase, NavigatorSnapshot, NavigatorState};
use crate::services::MarkdownRenderer;
use crate::workflow::{DocumentContent, DocumentFlow, LoadTicket};

/// 一次导航或加载的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 参数越界、分组未知等情况，状态未变
    Ignored,
    /// 加载成功并已采用
    Ready,
    /// 加载失败，已记录错误
    Failed,
    /// 有更新的请求，本次结果被丢弃
    Superseded,
}

/// 文档导航器
pub struct Navigator {
    catalog: Catalog,
    flow: DocumentFlow,
    sink: Arc<dyn EventSink>,
    state: Mutex<NavigatorState>,
}

impl Navigator {
    pub fn new(
        catalog: Catalog,
        fetcher: Arc<dyn TextFetcher>,
        renderer: Arc<dyn MarkdownRenderer>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let initial_group = catalog.initial_group().map(str::to_string);
        Self {
            catalog,
            flow: DocumentFlow::new(fetcher, renderer),
            sink,
            state: Mutex::new(NavigatorState::new(initial_group)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn lock(&self) -> MutexGuard<'_, NavigatorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> NavigatorSnapshot {
        self.lock().snapshot()
    }

    pub fn phase(&self) -> LoadPhase {
        self.lock().phase
    }

    /// 当前分组的文档列表，标记出选中的一篇
    pub fn document_list(&self) -> Vec<DocumentEntry> {
        let state = self.lock();
        let Some(group) = state.active_group.as_deref() else {
            return Vec::new();
        };

        self.catalog
            .documents(group)
            .iter()
            .enumerate()
            .map(|(index, descriptor)| DocumentEntry {
                index,
                descriptor: descriptor.clone(),
                active: index == state.active_document_index,
            })
            .collect()
    }

    /// 前后翻页按钮是否可用
    pub fn can_step(&self, direction: Direction) -> bool {
        let state = self.lock();
        self.step_target(&state, direction).is_some()
    }

    /// 切换分组
    ///
    /// 分组未知或已是当前分组时不做任何事
    pub async fn select_group(&self, tag: &str) -> LoadOutcome {
        let ticket = {
            let mut state = self.lock();
            let Some(group) = self.catalog.group(tag) else {
                debug!("忽略未知分组: {}", tag);
                return LoadOutcome::Ignored;
            };
            if state.active_group.as_deref() == Some(tag) {
                return LoadOutcome::Ignored;
            }

            let index = match self.catalog.group_switch() {
                GroupSwitch::ResetToFirst => 0,
                GroupSwitch::KeepIndex => state
                    .active_document_index
                    .min(group.documents().len().saturating_sub(1)),
            };

            info!("🌐 切换分组: {:?} → {}", state.active_group, tag);
            state.active_group = Some(tag.to_string());
            state.active_document_index = index;
            state.active_question_index = None;
            self.issue_ticket(&mut state)
        };

        self.run_ticket(ticket).await
    }

    /// 选择当前分组中的文档
    ///
    /// 越界时不做任何事；重新选择当前文档会重新加载
    pub async fn select_document(&self, index: usize) -> LoadOutcome {
        let ticket = {
            let mut state = self.lock();
            let len = self.active_len(&state);
            if index >= len {
                debug!("忽略越界的文档索引: {} (共 {} 篇)", index, len);
                return LoadOutcome::Ignored;
            }
            self.move_to(&mut state, index)
        };

        self.run_ticket(ticket).await
    }

    /// 前后翻页，到达边界时不做任何事，不会循环
    pub async fn step(&self, direction: Direction) -> LoadOutcome {
        let ticket = {
            let mut state = self.lock();
            let Some(index) = self.step_target(&state, direction) else {
                return LoadOutcome::Ignored;
            };
            self.move_to(&mut state, index)
        };

        self.run_ticket(ticket).await
    }

    /// 加载当前选中的文档
    pub async fn load_active(&self) -> LoadOutcome {
        let ticket = {
            let mut state = self.lock();
            state.active_question_index = None;
            self.issue_ticket(&mut state)
        };

        self.run_ticket(ticket).await
    }

    /// 选择题目（序号从 1 开始）
    ///
    /// 越界时返回 `false` 且不发事件
    pub fn select_question(&self, ordinal: usize) -> bool {
        let mut state = self.lock();
        if ordinal == 0 || ordinal > state.questions().len() {
            debug!("忽略越界的题目序号: {}", ordinal);
            return false;
        }

        state.active_question_index = Some(ordinal - 1);
        self.sink.emit(NavigatorEvent::QuestionSelected {
            ordinal,
            anchor: anchor_id(ordinal),
        });
        true
    }

    // ========== 内部辅助 ==========

    fn active_len(&self, state: &NavigatorState) -> usize {
        state
            .active_group
            .as_deref()
            .map(|g| self.catalog.documents(g).len())
            .unwrap_or(0)
    }

    fn step_target(&self, state: &NavigatorState, direction: Direction) -> Option<usize> {
        let current = state.active_document_index;
        match direction {
            Direction::Prev => current.checked_sub(1),
            Direction::Next => Some(current + 1).filter(|&next| next < self.active_len(state)),
        }
    }

    fn move_to(&self, state: &mut NavigatorState, index: usize) -> Option<LoadTicket> {
        state.active_document_index = index;
        state.active_question_index = None;
        self.issue_ticket(state)
    }

    /// 发放新的加载序号并进入 Loading
    fn issue_ticket(&self, state: &mut NavigatorState) -> Option<LoadTicket> {
        let group = state.active_group.clone()?;
        let descriptor = self
            .catalog
            .document(&group, state.active_document_index)?
            .clone();

        state.issued_seq += 1;
        state.phase = LoadPhase::Loading;
        Some(LoadTicket::new(
            state.issued_seq,
            group,
            state.active_document_index,
            descriptor,
        ))
    }

    async fn run_ticket(&self, ticket: Option<LoadTicket>) -> LoadOutcome {
        let Some(ticket) = ticket else {
            return LoadOutcome::Ignored;
        };

        let pattern = self
            .catalog
            .group(&ticket.group)
            .map(|g| g.pattern().clone())
            .unwrap_or_default();
        let result = self.flow.run(&ticket, &pattern).await;

        self.apply(ticket, result)
    }

    /// 采用加载结果；序号不是最新时直接丢弃
    fn apply(&self, ticket: LoadTicket, result: AppResult<DocumentContent>) -> LoadOutcome {
        let mut state = self.lock();
        if ticket.seq != state.issued_seq {
            debug!("{} 已被 #{} 取代，丢弃结果", ticket, state.issued_seq);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(content) => {
                info!(
                    "{} ✓ 文档就绪，{} 道题目",
                    ticket,
                    content.questions.len()
                );
                let payload = ReadyPayload {
                    descriptor: content.descriptor.clone(),
                    annotated_markdown: content.annotated_markdown.clone(),
                    html: content.html.clone(),
                    questions: content.questions.clone(),
                };
                state.content = Some(content);
                state.active_question_index = None;
                state.last_error = None;
                state.phase = LoadPhase::Ready;
                self.sink.emit(NavigatorEvent::Ready(payload));
                LoadOutcome::Ready
            }
            Err(e) => {
                warn!("{} ⚠️ 加载失败: {}", ticket, e);
                let message = failure_message(&ticket.group, &e);
                state.last_error = Some(message.clone());
                state.phase = LoadPhase::Failed;
                self.sink.emit(NavigatorEvent::LoadFailed {
                    descriptor: ticket.descriptor,
                    message,
                });
                LoadOutcome::Failed
            }
        }
    }
}
