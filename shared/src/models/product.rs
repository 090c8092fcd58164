//! Product Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroU32;

/// Product code (主键，正整数)
///
/// 编码即记录集的 map key，因此唯一性由结构保证。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(NonZeroU32);

impl ProductCode {
    /// 第一个可用编码 (空记录集时使用)
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// 下一个编码，溢出时返回 `None`
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl TryFrom<i64> for ProductCode {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(value)
    }
}

impl fmt::Display for ProductCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product entity
///
/// 持久化格式: `{"name": "...", "price": 199.9, "quantity": 10}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Unit price (finite, non-negative)
    pub price: f64,
    /// Quantity on hand
    pub quantity: u32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// 完整记录集: 编码 → 商品，按编码升序
pub type ProductMap = BTreeMap<ProductCode, Product>;

/// 下一个可用编码: 当前最大编码 + 1，空集时为 1
pub fn next_code(products: &ProductMap) -> Option<ProductCode> {
    match products.keys().next_back() {
        Some(max) => max.next(),
        None => Some(ProductCode::FIRST),
    }
}
