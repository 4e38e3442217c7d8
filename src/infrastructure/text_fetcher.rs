//! 文本获取能力 - 基础设施层
//!
//! 只负责"按地址取回一段 UTF-8 文本"，不认识目录、题目或导航状态

use async_trait::async_trait;
use std::path::{Component, Path};
use std::sync::Arc;

use crate::error::FetchError;

/// 文本获取器
///
/// 非成功状态（HTTP 4xx/5xx、文件不存在）都视为失败
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: TextFetcher + ?Sized> TextFetcher for Arc<T> {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        (**self).fetch(locator).await
    }
}

/// 地址必须是非空的相对路径，且不含 `..`
pub(crate) fn check_relative(locator: &str) -> Result<&Path, FetchError> {
    let relative = Path::new(locator);
    let escapes_root = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

    if locator.is_empty() || escapes_root {
        return Err(FetchError::InvalidLocator {
            locator: locator.to_string(),
        });
    }
    Ok(relative)
}

/// 按 UTF-8 解码，不做有损替换
pub(crate) fn decode_utf8(locator: &str, bytes: Vec<u8>) -> Result<String, FetchError> {
    String::from_utf8(bytes).map_err(|_| FetchError::InvalidUtf8 {
        locator: locator.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_relative() {
        assert!(check_relative("en/part1.md").is_ok());
        assert!(check_relative("./part1.md").is_ok());
        for bad in ["", "../x.md", "en/../../x.md", "/etc/passwd"] {
            assert!(
                matches!(check_relative(bad), Err(FetchError::InvalidLocator { .. })),
                "{bad:?} 应该被拒绝"
            );
        }
    }

    #[test]
    fn test_decode_utf8_rejects_invalid_bytes() {
        assert_eq!(decode_utf8("a.md", "클로저".as_bytes().to_vec()).unwrap(), "클로저");
        assert!(matches!(
            decode_utf8("b.md", vec![0xff, 0xfe]),
            Err(FetchError::InvalidUtf8 { ref locator }) if locator == "b.md"
        ));
    }
}
