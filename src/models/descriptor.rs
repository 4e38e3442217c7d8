//! 文档描述符
//!
//! 描述"一份可获取的文档"：ID、获取地址、标题以及所属分组

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// 分组标签（语言或分类，如 `ko` / `en`）
pub type GroupTag = String;

/// 文档 ID
///
/// 教程章节使用数字编号，面试题库使用 `part1` 这样的字符串
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Number(u64),
    Name(String),
}

impl Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Number(n) => write!(f, "{}", n),
            DocId::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<u64> for DocId {
    fn from(n: u64) -> Self {
        DocId::Number(n)
    }
}

impl From<&str> for DocId {
    fn from(name: &str) -> Self {
        DocId::Name(name.to_string())
    }
}

impl From<String> for DocId {
    fn from(name: String) -> Self {
        DocId::Name(name)
    }
}

/// 文档描述符，进入目录后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub id: DocId,
    /// 获取路径（相对路径或 URL 片段）
    #[serde(alias = "filename")]
    pub locator: String,
    pub title: String,
    /// 所属分组，由目录构建时补齐
    #[serde(default)]
    pub group: Option<GroupTag>,
}

impl DocumentDescriptor {
    pub fn new(id: impl Into<DocId>, locator: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            locator: locator.into(),
            title: title.into(),
            group: None,
        }
    }

    pub fn in_group(mut self, tag: impl Into<GroupTag>) -> Self {
        self.group = Some(tag.into());
        self
    }

    /// 下拉框里显示的短标题
    ///
    /// 标题形如 `JavaScript 面试题 (基本概念)` 时取括号内的部分，否则返回完整标题
    pub fn short_title(&self) -> &str {
        match (self.title.find('('), self.title.rfind(')')) {
            (Some(open), Some(close)) if open < close => {
                let inner = self.title[open + 1..close].trim();
                if inner.is_empty() {
                    &self.title
                } else {
                    inner
                }
            }
            _ => &self.title,
        }
    }
}

impl Display for DocumentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.locator)
    }
}
