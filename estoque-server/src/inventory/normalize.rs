//! 数据规范化
//!
//! 把任意来源 (持久化文档、种子文档) 的松散 JSON 转换为强类型的
//! [`ProductMap`]。每个字段都有明确的转换函数和默认值，格式错误的
//! 数据不会向下游传播：
//!
//! | 字段 | 接受的 key | 默认值 |
//! |------|-----------|--------|
//! | name | `name`, `Produto` | `""` |
//! | price | `price`, `Preço`, `Preco` | `0.0` |
//! | quantity | `quantity`, `Quantidade` | `0` |
//!
//! 编码 key 必须是正整数，否则整条记录被丢弃。

use serde_json::{Map, Value};
use shared::{Product, ProductCode, ProductMap};

use crate::utils::{money, parse_int_strict, parse_number_strict};

const NAME_KEYS: &[&str] = &["name", "Produto"];
const PRICE_KEYS: &[&str] = &["price", "Preço", "Preco"];
const QUANTITY_KEYS: &[&str] = &["quantity", "Quantidade"];

/// Normalize a raw `code → record` mapping.
pub fn normalize(raw: &Map<String, Value>) -> ProductMap {
    let mut products = ProductMap::new();

    for (key, value) in raw {
        let Some(code) = parse_code(key) else {
            tracing::debug!(key = %key, "Dropping record with invalid product code");
            continue;
        };
        products.insert(code, normalize_product(value));
    }

    products
}

/// Normalize one record; non-object values become an all-default record.
pub fn normalize_product(value: &Value) -> Product {
    let fields = value.as_object();
    let field = |keys: &[&str]| {
        fields.and_then(|map| keys.iter().find_map(|k| map.get(*k)))
    };

    Product {
        name: field(NAME_KEYS).map(coerce_name).unwrap_or_default(),
        price: field(PRICE_KEYS).and_then(coerce_price).unwrap_or(0.0),
        quantity: field(QUANTITY_KEYS).and_then(coerce_quantity).unwrap_or(0),
    }
}

fn parse_code(key: &str) -> Option<ProductCode> {
    parse_int_strict(key).and_then(|n| ProductCode::try_from(n).ok())
}

fn coerce_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

fn coerce_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_strict(s),
        _ => None,
    }?;
    money::is_valid_price(price).then_some(price)
}

fn coerce_quantity(value: &Value) -> Option<u32> {
    let quantity = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => parse_int_strict(s),
        _ => None,
    }?;
    u32::try_from(quantity).ok()
}
