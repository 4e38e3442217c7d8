//! Markdown 渲染服务 - 业务能力层
//!
//! ## 技术栈
//! - 使用 `markdown` crate（markdown-rs）按 GFM 渲染
//! - 允许原始 HTML，否则注释阶段插入的锚点会被转义
//!
//! ## 换行
//! 段落内的单个换行按 CommonMark 处理为软换行，不生成 `<br />`，
//! `**题目**` 和紧跟的下一行答案会显示在同一行。markdown-rs 没有
//! 对应 `breaks: true` 的选项，需要硬换行时在行尾加两个空格或 `\`。

use crate::error::RenderError;

/// Markdown 渲染器
///
/// 视为无副作用的纯函数，只在注释之后调用
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, RenderError>;
}

/// GFM 渲染器
#[derive(Debug, Clone)]
pub struct GfmRenderer {
    allow_dangerous_html: bool,
}

impl GfmRenderer {
    pub fn new() -> Self {
        Self {
            allow_dangerous_html: true,
        }
    }

    /// 转义所有原始 HTML（锚点也会失效，只适合纯预览）
    pub fn escaping_html() -> Self {
        Self {
            allow_dangerous_html: false,
        }
    }

    fn options(&self) -> markdown::Options {
        markdown::Options {
            parse: markdown::ParseOptions::gfm(),
            compile: markdown::CompileOptions {
                allow_dangerous_html: self.allow_dangerous_html,
                ..markdown::CompileOptions::gfm()
            },
        }
    }
}

impl Default for GfmRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer for GfmRenderer {
    fn render(&self, markdown: &str) -> Result<String, RenderError> {
        markdown::to_html_with_options(markdown, &self.options())
            .map_err(|e| RenderError::Markdown(e.to_string()))
    }
}
