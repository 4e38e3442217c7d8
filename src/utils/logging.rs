/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

use crate::config::Config;
use crate::models::catalog::Catalog;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - Markdown 文档导航");
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 文档根: {}", config.docs_base);
    info!("📝 输出页面: {}", config.output_html);
    info!("{}", "=".repeat(60));
}

/// 记录目录信息
pub fn log_catalog(catalog: &Catalog) {
    info!(
        "✓ 目录共 {} 个分组, {} 篇文档",
        catalog.groups().len(),
        catalog.total_documents()
    );
    for group in catalog.groups() {
        info!("  [{}] {} 篇", group.tag(), group.documents().len());
    }
}

/// 打印命令帮助
pub fn log_usage() {
    info!("{}", "─".repeat(60));
    info!("命令: next | prev | doc N | group TAG | q N | list | reload | quit");
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("테라폼 소개", 3), "테라폼...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
