//! 种子数据加载
//!
//! 首次启动 (无持久化数据) 或用户确认重置时，从静态 JSON 文档读取初始商品。
//! 来源可以是本地文件，也可以是 `http(s)` URL。任何失败都作为
//! [`SeedError`] 返回，由调用方决定如何处理 (启动时致命，重置时提示)。

use serde_json::{Map, Value};
use shared::ProductMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::inventory::normalize;

/// Seed loading errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch seed document: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Seed request returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Seed document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Seed document must be a JSON object")]
    NotAnObject,
}

/// Where the seed document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    File(PathBuf),
    Url(String),
}

impl SeedSource {
    /// `http://` / `https://` → URL，其余视为文件路径
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

/// Loads the static seed document
#[derive(Debug, Clone)]
pub struct SeedLoader {
    source: SeedSource,
    client: reqwest::Client,
}

impl SeedLoader {
    pub fn new(source: SeedSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    pub fn source(&self) -> &SeedSource {
        &self.source
    }

    /// Fetch the raw seed mapping
    pub async fn load(&self) -> Result<Map<String, Value>, SeedError> {
        let bytes = match &self.source {
            SeedSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| SeedError::Io {
                    path: path.clone(),
                    source,
                })?
            }
            SeedSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                if !response.status().is_success() {
                    return Err(SeedError::Status(response.status()));
                }
                response.bytes().await?.to_vec()
            }
        };

        match serde_json::from_slice::<Value>(&bytes)? {
            Value::Object(map) => Ok(map),
            _ => Err(SeedError::NotAnObject),
        }
    }

    /// Fetch and normalize the seed document
    pub async fn load_products(&self) -> Result<ProductMap, SeedError> {
        let raw = self.load().await?;
        let products = normalize(&raw);
        tracing::info!(count = products.len(), "Seed data loaded");
        Ok(products)
    }
}
