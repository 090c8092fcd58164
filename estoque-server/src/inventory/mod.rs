//! 库存领域
//!
//! - [`normalize`] - 松散 JSON → [`ProductMap`]
//! - [`summary`] - 派生视图模型
//! - [`actions`] - 变更操作与表单
//! - [`error`] - 操作错误 (pt-BR 提示)
//!
//! [`Inventory`] 持有内存中的记录集和持久化适配器，由 `ServerState`
//! 在互斥锁内持有唯一一份。

pub mod actions;
pub mod error;
pub mod normalize;
pub mod summary;

pub use actions::{
    AddProductForm, AddedProduct, QueryForm, ResetForm, RestockForm, SaleRequest, SellForm,
    StockChange,
};
pub use error::{InventoryError, InventoryResult};
pub use normalize::{normalize, normalize_product};
pub use summary::{InventorySummary, ItemView, LOW_STOCK_THRESHOLD};

use shared::{Product, ProductCode, ProductMap};

use crate::seed::SeedLoader;
use crate::storage::{LoadOutcome, Persistence};

/// The record set plus its persistence slot
pub struct Inventory {
    products: ProductMap,
    persistence: Persistence,
}

impl Inventory {
    pub fn new(products: ProductMap, persistence: Persistence) -> Self {
        Self {
            products,
            persistence,
        }
    }

    /// Load persisted state or fall back to the seed document.
    ///
    /// 已有数据会被规范化后写回；缺失或损坏时加载种子数据。
    /// 种子加载失败直接返回错误。
    pub async fn boot(persistence: Persistence, seed: &SeedLoader) -> InventoryResult<Self> {
        let products = match persistence.load() {
            LoadOutcome::Found(raw) => {
                let products = normalize(&raw);
                tracing::info!(
                    stored = raw.len(),
                    kept = products.len(),
                    "Loaded persisted inventory"
                );
                products
            }
            LoadOutcome::Missing => {
                tracing::info!(source = ?seed.source(), "No persisted inventory, loading seed data");
                seed.load_products().await?
            }
            LoadOutcome::Corrupt { reason } => {
                tracing::warn!(reason = %reason, "Replacing corrupt inventory with seed data");
                seed.load_products().await?
            }
        };

        persistence.save(&products)?;
        Ok(Self::new(products, persistence))
    }

    pub fn products(&self) -> &ProductMap {
        &self.products
    }

    pub fn get(&self, code: ProductCode) -> Option<&Product> {
        self.products.get(&code)
    }

    pub fn summary(&self) -> InventorySummary {
        InventorySummary::from_products(&self.products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedSource;
    use crate::storage::{KvStore, RedbStore, STORAGE_KEY};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn bundled_seed() -> SeedLoader {
        SeedLoader::new(SeedSource::File(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/data/seed.json"),
        ))
    }

    fn missing_seed() -> SeedLoader {
        SeedLoader::new(SeedSource::File(PathBuf::from("/nonexistent/seed.json")))
    }

    #[tokio::test]
    async fn test_boot_from_seed_when_missing() {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        let inv = Inventory::boot(Persistence::new(store.clone()), &bundled_seed())
            .await
            .unwrap();

        assert_eq!(inv.products().len(), 15);
        // 种子数据立即写回存储 (统一字段名)
        let raw = store.read(STORAGE_KEY).unwrap().unwrap();
        let text = String::from_utf8(raw).unwrap();
        assert!(text.contains(r#""name":"Mouse""#));
    }

    #[tokio::test]
    async fn test_boot_normalizes_persisted_state() {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        store
            .write(
                STORAGE_KEY,
                br#"{"2":{"Produto":"Teclado","Preco":"80","Quantidade":"15"},"x":{}}"#,
            )
            .unwrap();

        let inv = Inventory::boot(Persistence::new(store.clone()), &missing_seed())
            .await
            .unwrap();

        assert_eq!(inv.products().len(), 1);
        let code = ProductCode::new(2).unwrap();
        assert_eq!(inv.get(code), Some(&Product::new("Teclado", 80.0, 15)));

        let raw = store.read(STORAGE_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            br#"{"2":{"name":"Teclado","price":80.0,"quantity":15}}"#.to_vec()
        );
    }

    #[tokio::test]
    async fn test_boot_replaces_corrupt_state() {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        store.write(STORAGE_KEY, b"not json").unwrap();

        let persistence = Persistence::new(store);
        let inv = Inventory::boot(persistence.clone(), &bundled_seed())
            .await
            .unwrap();

        assert_eq!(inv.products().len(), 15);
        assert_eq!(
            persistence.corrupt_backup().unwrap().as_deref(),
            Some(&b"not json"[..])
        );
    }

    #[tokio::test]
    async fn test_boot_fails_without_seed() {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        let result = Inventory::boot(Persistence::new(store), &missing_seed()).await;
        assert!(matches!(result, Err(InventoryError::Seed(_))));
    }
}
