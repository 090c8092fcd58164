//! 持久化层 - 单槽位 JSON 文档
//!
//! 整个记录集序列化为一个 JSON 对象，存放在固定 key [`STORAGE_KEY`] 下。
//! 每次变更后整体覆盖写入 (last-writer-wins，无版本、无合并)。
//!
//! # 读取语义
//!
//! [`Persistence::load`] 从不返回错误：
//!
//! | 情况 | 结果 |
//! |------|------|
//! | key 不存在 / 空值 | [`LoadOutcome::Missing`] |
//! | 读取失败、JSON 无法解析、不是对象 | [`LoadOutcome::Corrupt`] |
//! | 合法 JSON 对象 | [`LoadOutcome::Found`] |
//!
//! 损坏的数据在被种子数据覆盖之前会先备份到 [`CORRUPT_BACKUP_KEY`]。

mod redb_store;

pub use redb_store::RedbStore;

use serde_json::{Map, Value};
use shared::ProductMap;
use std::sync::Arc;
use thiserror::Error;

/// Fixed slot holding the whole record set
pub const STORAGE_KEY: &str = "estoque_site_v1";

/// Slot receiving the raw bytes of an unreadable document
pub const CORRUPT_BACKUP_KEY: &str = "estoque_site_v1.corrupt";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Raw key-value slot storage
pub trait KvStore: Send + Sync {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}

/// Result of reading the persisted record set
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A JSON object was stored (not yet normalized)
    Found(Map<String, Value>),
    /// Nothing stored yet
    Missing,
    /// Something was stored but could not be used
    Corrupt { reason: String },
}

impl LoadOutcome {
    /// Collapse to "mapping or not found"
    pub fn into_option(self) -> Option<Map<String, Value>> {
        match self {
            Self::Found(map) => Some(map),
            Self::Missing | Self::Corrupt { .. } => None,
        }
    }
}

/// Persistence adapter for the inventory document
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KvStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Read the persisted record set
    pub fn load(&self) -> LoadOutcome {
        let bytes = match self.store.read(STORAGE_KEY) {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => return LoadOutcome::Missing,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted inventory, treating as corrupt");
                return LoadOutcome::Corrupt {
                    reason: e.to_string(),
                };
            }
        };

        let reason = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => return LoadOutcome::Found(map),
            Ok(_) => "stored document is not a JSON object".to_string(),
            Err(e) => e.to_string(),
        };

        tracing::warn!(
            reason = %reason,
            bytes = bytes.len(),
            "Persisted inventory is corrupt, falling back to seed data"
        );
        self.preserve_corrupt(&bytes);
        LoadOutcome::Corrupt { reason }
    }

    /// Overwrite the slot with the whole record set
    pub fn save(&self, products: &ProductMap) -> StorageResult<()> {
        let value = serde_json::to_vec(products)?;
        self.store.write(STORAGE_KEY, &value)
    }

    /// Raw bytes of the last corrupt document, if one was preserved
    pub fn corrupt_backup(&self) -> StorageResult<Option<Vec<u8>>> {
        self.store.read(CORRUPT_BACKUP_KEY)
    }

    fn preserve_corrupt(&self, bytes: &[u8]) {
        if let Err(e) = self.store.write(CORRUPT_BACKUP_KEY, bytes) {
            tracing::error!(error = %e, "Failed to back up corrupt inventory document");
        }
    }
}
