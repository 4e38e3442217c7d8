//! # Markdown Navigator
//!
//! 一个用于浏览 Markdown 题库和教程的文档导航库
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露"按地址取文本"的能力
//! - `TextFetcher` - HTTP / 本地文件 / 内存三种实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单篇文档
//! - `QuestionExtractor` - 识别 `N. **标题**` 题目行
//! - `annotate` - 在题目行前插入锚点
//! - `GfmRenderer` - Markdown 渲染
//! - `PageBuilder` - 拼装完整页面
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一篇文档"的加载流程
//! - `LoadTicket` - 加载凭据（序号 + 分组 + 文档）
//! - `DocumentFlow` - 获取 → 提取 → 注释 → 渲染
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/navigator` - 持有导航状态，丢弃过期的加载结果
//! - `orchestrator/events` - 向展示层发送事件
//!
//! ## 模块结构

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{FileFetcher, HttpFetcher, MemoryFetcher, TextFetcher};
pub use models::{Catalog, DocumentDescriptor, QuestionMarker, QuestionPattern};
pub use orchestrator::{Direction, EventSink, LoadOutcome, LoadPhase, Navigator, NavigatorEvent};
pub use services::{GfmRenderer, MarkdownRenderer};
pub use workflow::{DocumentContent, DocumentFlow, LoadTicket};
