use crate::error::CatalogError;
use crate::models::catalog::{Catalog, GroupSwitch, DEFAULT_GROUP};
use crate::models::descriptor::DocumentDescriptor;
use crate::models::question::QuestionPattern;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

/// 目录文件结构
///
/// ```toml
/// default_group = "ko"
/// group_switch = "keep_index"
///
/// [[groups]]
/// tag = "ko"
///
/// [[groups.documents]]
/// id = "part1"
/// filename = "javascript_interview_ko_part1.md"
/// title = "JavaScript 개발자 인터뷰 질문 (기본 개념)"
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    default_group: Option<String>,
    #[serde(default)]
    group_switch: GroupSwitch,
    #[serde(default)]
    groups: Vec<GroupFile>,
}

#[derive(Debug, Deserialize)]
struct GroupFile {
    /// 省略时使用 `DEFAULT_GROUP`
    #[serde(default = "default_tag")]
    tag: String,
    /// 自定义题目正则（可选）
    question_pattern: Option<String>,
    #[serde(default)]
    documents: Vec<DocumentDescriptor>,
}

fn default_tag() -> String {
    DEFAULT_GROUP.to_string()
}

/// 从 TOML 文件加载目录
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

    let catalog = parse_catalog(&content, &path.display().to_string())?;

    tracing::info!(
        "已加载目录 {}: {} 个分组, {} 篇文档",
        path.file_name().unwrap_or_default().to_string_lossy(),
        catalog.groups().len(),
        catalog.total_documents()
    );

    Ok(catalog)
}

/// 解析 TOML 文本为目录
///
/// `origin` 只用于错误信息
pub fn parse_catalog(content: &str, origin: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|source| CatalogError::TomlParseFailed {
            path: origin.to_string(),
            source,
        })?;

    let mut builder = Catalog::builder().group_switch(file.group_switch);
    if let Some(tag) = file.default_group {
        builder = builder.default_group(tag);
    }

    for group in file.groups {
        let pattern = match group.question_pattern.as_deref() {
            Some(raw) => QuestionPattern::new(raw).map_err(|source| {
                CatalogError::InvalidPattern {
                    group: group.tag.clone(),
                    source,
                }
            })?,
            None => QuestionPattern::default(),
        };
        builder = builder.group_with_pattern(group.tag, pattern, group.documents);
    }

    Ok(builder.build())
}
