//! HTTP 文本获取器
//!
//! 以基础 URL 拼接文档地址，通过 reqwest 获取

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;
use crate::infrastructure::text_fetcher::{check_relative, decode_utf8, TextFetcher};

pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    /// 创建 HTTP 获取器
    ///
    /// # 参数
    /// - `base_url`: 文档根地址，缺少结尾 `/` 时自动补上
    /// - `timeout`: 单次请求超时
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|_| FetchError::InvalidLocator {
            locator: base_url.to_string(),
        })?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::ClientInit {
                source: Box::new(e),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 拼接完整 URL，地址里的非 ASCII 字符会被百分号编码
    ///
    /// 结果必须仍在基础 URL 之下
    pub fn resolve(&self, locator: &str) -> Result<Url, FetchError> {
        let invalid = || FetchError::InvalidLocator {
            locator: locator.to_string(),
        };

        check_relative(locator)?;
        let url = self.base_url.join(locator).map_err(|_| invalid())?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(invalid());
        }
        Ok(url)
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let url = self.resolve(locator)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    locator: locator.to_string(),
                }
            } else {
                FetchError::RequestFailed {
                    locator: locator.to_string(),
                    source: Box::new(e),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                locator: locator.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::RequestFailed {
            locator: locator.to_string(),
            source: Box::new(e),
        })?;
        decode_utf8(locator, body.to_vec())
    }
}
