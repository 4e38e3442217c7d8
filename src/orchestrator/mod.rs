//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 持有导航状态，决定何时加载、采用哪一次加载的结果，并把变化通知给展示层。
//!
//! ## 模块划分
//!
//! ### `navigator` - 文档导航器
//! - 切换分组、选择文档、前后翻页、选择题目
//! - 为每次加载发放递增序号，丢弃过期结果
//!
//! ### `state` - 导航状态
//! - 加载阶段、当前分组/文档/题目、展示内容、错误信息
//! - 对外只提供快照
//!
//! ### `events` - 导航事件
//! - `Ready` / `LoadFailed` / `QuestionSelected`
//! - `EventSink` 观察者接口及通道、日志两种实现
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::Navigator (状态 + 导航操作)
//!     ↓
//! workflow::DocumentFlow (加载单篇文档)
//!     ↓
//! services (提取 / 注释 / 渲染)
//!     ↓
//! infrastructure (TextFetcher)
//! ```

pub mod events;
pub mod navigator;
pub mod state;

pub use events::{failure_message, ChannelSink, EventSink, LogSink, NavigatorEvent, ReadyPayload};
pub use navigator::{LoadOutcome, Navigator};
pub use state::{Direction, DocumentEntry, LoadPhase, NavigatorSnapshot};
pub use crate::workflow::DocumentContent;
