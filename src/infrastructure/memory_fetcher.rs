//! 内存文本获取器
//!
//! 文档内容预先放在内存里，可以给单个地址设置延迟或强制失败，
//! 用于嵌入式文档和并发场景的验证

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::FetchError;
use crate::infrastructure::text_fetcher::TextFetcher;

#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    documents: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    failures: HashMap<String, u16>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, locator: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.insert(locator.into(), text.into());
        self
    }

    /// 获取该地址时先等待一段时间
    pub fn with_delay(mut self, locator: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(locator.into(), delay);
        self
    }

    /// 该地址总是返回指定的 HTTP 状态
    pub fn with_status(mut self, locator: impl Into<String>, status: u16) -> Self {
        self.failures.insert(locator.into(), status);
        self
    }
}

#[async_trait]
impl TextFetcher for MemoryFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        if let Some(delay) = self.delays.get(locator) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(status) = self.failures.get(locator) {
            return Err(FetchError::BadStatus {
                locator: locator.to_string(),
                status: *status,
            });
        }

        self.documents
            .get(locator)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                locator: locator.to_string(),
            })
    }
}
