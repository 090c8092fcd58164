//! 派生视图模型 (不持久化，每次渲染重新计算)

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{Product, ProductCode, ProductMap};

use crate::utils::money;

/// 库存偏低阈值 (quantity <= 3)
pub const LOW_STOCK_THRESHOLD: u32 = 3;

/// One row of the product table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub code: ProductCode,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    /// price × quantity
    pub total: Decimal,
}

impl ItemView {
    pub fn new(code: ProductCode, product: &Product) -> Self {
        Self {
            code,
            name: product.name.clone(),
            price: product.price,
            quantity: product.quantity,
            total: money::line_total(product.price, product.quantity),
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= LOW_STOCK_THRESHOLD
    }
}

/// Aggregates derived from the record set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySummary {
    /// All items, ascending by code
    pub items: Vec<ItemView>,
    /// Sum of quantities
    pub total_items: u64,
    /// Sum of item totals
    pub total_invested: Decimal,
    /// Number of distinct products
    pub product_count: usize,
    /// Items with quantity <= [`LOW_STOCK_THRESHOLD`], ascending by quantity
    pub low_stock: Vec<ItemView>,
}

impl InventorySummary {
    pub fn from_products(products: &ProductMap) -> Self {
        // BTreeMap 迭代即按编码升序
        let items: Vec<ItemView> = products
            .iter()
            .map(|(code, product)| ItemView::new(*code, product))
            .collect();

        let total_items: u64 = items.iter().map(|it| u64::from(it.quantity)).sum();
        let total_invested = money::sum(items.iter().map(|it| it.total));

        // 稳定排序：数量相同时保持编码顺序
        let mut low_stock: Vec<ItemView> =
            items.iter().filter(|it| it.is_low_stock()).cloned().collect();
        low_stock.sort_by_key(|it| it.quantity);

        Self {
            product_count: items.len(),
            items,
            total_items,
            total_invested,
            low_stock,
        }
    }
}
