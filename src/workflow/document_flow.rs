//! 文档加载流程 - 流程层
//!
//! 核心职责：定义"一篇文档"的完整加载流程
//!
//! 流程顺序：
//! 1. 获取原文
//! 2. 提取题目
//! 3. 插入锚点
//! 4. 渲染 HTML
//!
//! 不持有导航状态，也不决定结果是否被采用

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::TextFetcher;
use crate::models::descriptor::DocumentDescriptor;
use crate::models::question::{QuestionMarker, QuestionPattern};
use crate::services::{annotate, MarkdownRenderer, QuestionExtractor};
use crate::utils::logging::truncate_text;
use crate::workflow::load_ticket::LoadTicket;

/// 一篇加载完成的文档
#[derive(Debug, Clone, Serialize)]
pub struct DocumentContent {
    pub descriptor: DocumentDescriptor,
    pub raw_text: String,
    pub annotated_markdown: String,
    pub html: String,
    pub questions: Vec<QuestionMarker>,
}

/// 文档加载流程
#[derive(Clone)]
pub struct DocumentFlow {
    fetcher: Arc<dyn TextFetcher>,
    renderer: Arc<dyn MarkdownRenderer>,
}

impl DocumentFlow {
    pub fn new(fetcher: Arc<dyn TextFetcher>, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        Self { fetcher, renderer }
    }

    pub async fn run(&self, ticket: &LoadTicket, pattern: &QuestionPattern) -> AppResult<DocumentContent> {
        info!("{} 📄 正在获取文档...", ticket);
        let raw_text = self.fetcher.fetch(&ticket.descriptor.locator).await?;
        debug!(
            "{} 原文 {} 字节: {}",
            ticket,
            raw_text.len(),
            truncate_text(raw_text.trim_start(), 60)
        );

        Self::process(ticket.descriptor.clone(), raw_text, pattern, self.renderer.as_ref())
    }

    /// 对已获取的原文执行提取、注释和渲染
    pub fn process(
        descriptor: DocumentDescriptor,
        raw_text: String,
        pattern: &QuestionPattern,
        renderer: &dyn MarkdownRenderer,
    ) -> AppResult<DocumentContent> {
        let questions = QuestionExtractor::new(pattern.clone()).extract(&raw_text);
        let annotated_markdown = annotate(&raw_text, &questions);
        let html = renderer.render(&annotated_markdown)?;

        debug!("{} 识别出 {} 道题目", descriptor.locator, questions.len());

        Ok(DocumentContent {
            descriptor,
            raw_text,
            annotated_markdown,
            html,
            questions,
        })
    }
}
