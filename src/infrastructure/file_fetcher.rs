//! 本地文件获取器
//!
//! 文档地址是相对于根目录的路径，不允许跳出根目录

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::error::FetchError;
use crate::infrastructure::text_fetcher::{check_relative, decode_utf8, TextFetcher};

pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 把文档地址解析为根目录下的路径
    pub fn resolve(&self, locator: &str) -> Result<PathBuf, FetchError> {
        Ok(self.root.join(check_relative(locator)?))
    }
}

#[async_trait]
impl TextFetcher for FileFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let path = self.resolve(locator)?;
        debug!("读取文件: {}", path.display());

        let bytes = fs::read(&path).await.map_err(|source| match source.kind() {
            ErrorKind::NotFound => FetchError::NotFound {
                locator: locator.to_string(),
            },
            _ => FetchError::ReadFailed {
                path: path.display().to_string(),
                source,
            },
        })?;

        decode_utf8(locator, bytes)
    }
}
