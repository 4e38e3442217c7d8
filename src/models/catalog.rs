//! 文档目录
//!
//! 启动时由静态配置构建一次，运行期间只读。
//! 分组顺序和组内文档顺序即导航顺序。

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::descriptor::{DocumentDescriptor, GroupTag};
use crate::models::question::QuestionPattern;

/// 单分组目录使用的默认标签
pub const DEFAULT_GROUP: &str = "default";

/// 切换分组时文档位置的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupSwitch {
    /// 回到第一篇
    #[default]
    ResetToFirst,
    /// 保持当前序号（超出范围时取最后一篇），适合多语言对照的题库
    KeepIndex,
}

/// 一个分组及其文档列表
#[derive(Debug, Clone)]
pub struct DocumentGroup {
    tag: GroupTag,
    documents: Vec<DocumentDescriptor>,
    pattern: QuestionPattern,
}

impl DocumentGroup {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn documents(&self) -> &[DocumentDescriptor] {
        &self.documents
    }

    pub fn pattern(&self) -> &QuestionPattern {
        &self.pattern
    }
}

/// 文档目录
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    groups: Vec<DocumentGroup>,
    default_group: Option<GroupTag>,
    group_switch: GroupSwitch,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn groups(&self) -> &[DocumentGroup] {
        &self.groups
    }

    pub fn group(&self, tag: &str) -> Option<&DocumentGroup> {
        self.groups.iter().find(|g| g.tag == tag)
    }

    pub fn contains_group(&self, tag: &str) -> bool {
        self.group(tag).is_some()
    }

    /// 分组内的文档，分组不存在时为空
    pub fn documents(&self, tag: &str) -> &[DocumentDescriptor] {
        self.group(tag).map(|g| g.documents()).unwrap_or(&[])
    }

    pub fn document(&self, tag: &str, index: usize) -> Option<&DocumentDescriptor> {
        self.documents(tag).get(index)
    }

    /// 启动时激活的分组：配置的默认分组，否则第一个分组
    pub fn initial_group(&self) -> Option<&str> {
        self.default_group
            .as_deref()
            .filter(|tag| self.contains_group(tag))
            .or_else(|| self.groups.first().map(|g| g.tag.as_str()))
    }

    pub fn group_switch(&self) -> GroupSwitch {
        self.group_switch
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_documents(&self) -> usize {
        self.groups.iter().map(|g| g.documents.len()).sum()
    }
}

/// 目录构建器
///
/// 构建过程没有失败路径：空分组直接丢弃，重复的分组标签会合并
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    groups: Vec<DocumentGroup>,
    default_group: Option<GroupTag>,
    group_switch: GroupSwitch,
}

impl CatalogBuilder {
    pub fn group<I>(self, tag: impl Into<GroupTag>, documents: I) -> Self
    where
        I: IntoIterator<Item = DocumentDescriptor>,
    {
        self.group_with_pattern(tag, QuestionPattern::default(), documents)
    }

    pub fn group_with_pattern<I>(
        mut self,
        tag: impl Into<GroupTag>,
        pattern: QuestionPattern,
        documents: I,
    ) -> Self
    where
        I: IntoIterator<Item = DocumentDescriptor>,
    {
        let tag = tag.into();
        let documents = documents.into_iter().map(|mut doc| {
            doc.group.get_or_insert_with(|| tag.clone());
            doc
        });

        match self.groups.iter_mut().find(|g| g.tag == tag) {
            Some(existing) => {
                existing.documents.extend(documents);
                existing.pattern = pattern;
            }
            None => {
                let documents = documents.collect();
                self.groups.push(DocumentGroup {
                    tag,
                    documents,
                    pattern,
                });
            }
        }
        self
    }

    pub fn default_group(mut self, tag: impl Into<GroupTag>) -> Self {
        self.default_group = Some(tag.into());
        self
    }

    pub fn group_switch(mut self, policy: GroupSwitch) -> Self {
        self.group_switch = policy;
        self
    }

    pub fn build(self) -> Catalog {
        let groups = self
            .groups
            .into_iter()
            .filter(|g| {
                if g.documents.is_empty() {
                    warn!("分组 {} 没有文档，已忽略", g.tag);
                    false
                } else {
                    true
                }
            })
            .collect();

        Catalog {
            groups,
            default_group: self.default_group,
            group_switch: self.group_switch,
        }
    }
}
