//! 题目标记与题目匹配规则
//!
//! 题目标记（QuestionMarker）是从文档文本中识别出的"编号 + 粗体标题"行，
//! 每次加载文档时重新计算，不跨文档保留。

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// 默认题目规则：行首的 `N. **标题**`
///
/// 只匹配第 0 列，嵌套列表里缩进的条目不算题目
pub const DEFAULT_QUESTION_PATTERN: &str = r"^(?P<number>\d+)\.\s+\*\*(?P<label>.*?)\*\*";

static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_QUESTION_PATTERN).expect("默认题目正则必须合法"));

/// 生成锚点 ID
///
/// 注释器、事件和页面生成共用这一个命名规则
pub fn anchor_id(ordinal: usize) -> String {
    format!("question-{}", ordinal)
}

/// 题目标记
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionMarker {
    /// 扫描顺序编号，从 1 开始
    pub ordinal: usize,
    /// 粗体中的标题文本
    pub label: String,
    /// 所在行号（从 0 开始）
    pub source_line_index: usize,
    /// 原文写的编号，仅用于展示
    pub literal_number: Option<u64>,
}

impl QuestionMarker {
    pub fn anchor(&self) -> String {
        anchor_id(self.ordinal)
    }
}

/// 题目匹配规则
///
/// 标题取命名捕获组 `label`，没有时取第 1 个捕获组；
/// 原文编号取命名捕获组 `number`（可选）
#[derive(Debug, Clone)]
pub struct QuestionPattern {
    regex: Regex,
}

impl QuestionPattern {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// 匹配单行，返回 (标题, 原文编号)
    pub fn capture(&self, line: &str) -> Option<(String, Option<u64>)> {
        let caps = self.regex.captures(line)?;
        let label = caps
            .name("label")
            .or_else(|| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let number = caps.name("number").and_then(|m| m.as_str().parse().ok());
        Some((label, number))
    }
}

impl Default for QuestionPattern {
    fn default() -> Self {
        Self {
            regex: DEFAULT_REGEX.clone(),
        }
    }
}
