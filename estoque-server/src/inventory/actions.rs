//! 变更操作 (add / query / sell / restock / reset)
//!
//! 每个操作的流程相同：校验表单 → 计算新的记录集 → 保存 → 替换内存状态。
//! 保存失败时内存状态保持不变，错误返回给调用方。

use serde::Deserialize;
use shared::{Product, ProductCode, ProductMap, models::next_code};

use super::error::{InventoryError, InventoryResult};
use super::summary::ItemView;
use super::Inventory;
use crate::utils::{money, parse_int_strict, parse_number_strict};

// =============================================================================
// Forms
// =============================================================================

/// `POST /adicionar`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddProductForm {
    #[serde(default, rename = "nome")]
    pub name: String,
    #[serde(default, rename = "preco")]
    pub price: String,
    #[serde(default, rename = "quantidade")]
    pub quantity: String,
}

/// `POST /consultar`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryForm {
    #[serde(default, rename = "codigo")]
    pub code: String,
}

/// `POST /vender`
///
/// 未携带 `confirmar` 时只校验并返回确认信息，不修改库存。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellForm {
    #[serde(default, rename = "codigo")]
    pub code: String,
    #[serde(default, rename = "quantidade")]
    pub quantity: String,
    #[serde(default, rename = "confirmar")]
    pub confirm: Option<String>,
}

impl SellForm {
    pub fn is_confirmed(&self) -> bool {
        is_checked(self.confirm.as_deref())
    }
}

/// `POST /repor`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestockForm {
    #[serde(default, rename = "codigo")]
    pub code: String,
    #[serde(default, rename = "quantidade")]
    pub quantity: String,
}

/// `POST /produtos/resetar`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetForm {
    #[serde(default, rename = "confirmar")]
    pub confirm: Option<String>,
}

impl ResetForm {
    pub fn is_confirmed(&self) -> bool {
        is_checked(self.confirm.as_deref())
    }
}

fn is_checked(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("1" | "true" | "sim" | "on"))
}

// =============================================================================
// Results
// =============================================================================

/// A newly created record
#[derive(Debug, Clone, PartialEq)]
pub struct AddedProduct {
    pub code: ProductCode,
    pub product: Product,
}

impl AddedProduct {
    pub fn message(&self) -> String {
        format!(
            "Produto adicionado! Código {} ({}).",
            self.code, self.product.name
        )
    }
}

/// A validated sale waiting for confirmation
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRequest {
    pub code: ProductCode,
    pub name: String,
    pub quantity: u32,
    pub available: u32,
}

/// Quantity change applied by sell or restock
#[derive(Debug, Clone, PartialEq)]
pub struct StockChange {
    pub code: ProductCode,
    pub name: String,
    /// Units sold or added
    pub delta: u32,
    /// Quantity after the change
    pub quantity: u32,
}

impl StockChange {
    pub fn sale_message(&self) -> String {
        format!(
            "Venda realizada! {}x '{}' (estoque agora: {}).",
            self.delta, self.name, self.quantity
        )
    }

    pub fn restock_message(&self) -> String {
        format!(
            "Estoque atualizado! +{} em '{}' (agora: {}).",
            self.delta, self.name, self.quantity
        )
    }
}

pub const QUERY_FOUND_MESSAGE: &str = "Produto encontrado!";
pub const RESET_DONE_MESSAGE: &str = "Dados resetados com sucesso!";
pub const RESET_CONFIRM_MESSAGE: &str =
    "Resetar para os 15 produtos iniciais? Isso apaga as alterações.";

// =============================================================================
// Field validation
// =============================================================================

/// 编码: 严格整数且 > 0
fn parse_code(input: &str) -> InventoryResult<ProductCode> {
    parse_int_strict(input)
        .and_then(|n| ProductCode::try_from(n).ok())
        .ok_or(InventoryError::InvalidCode)
}

/// 新商品数量: 严格整数且 >= 0
fn parse_initial_quantity(input: &str) -> InventoryResult<u32> {
    parse_int_strict(input)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(InventoryError::InvalidQuantity)
}

/// 出入库数量: 严格整数且 > 0
fn parse_moved_quantity(input: &str) -> InventoryResult<u64> {
    parse_int_strict(input)
        .and_then(|n| u64::try_from(n).ok())
        .filter(|n| *n > 0)
        .ok_or(InventoryError::InvalidQuantity)
}

/// 价格: 严格数字, 0 ..= MAX_PRICE
fn parse_price(input: &str) -> InventoryResult<f64> {
    parse_number_strict(input)
        .filter(|p| money::is_valid_price(*p))
        .ok_or(InventoryError::InvalidPrice)
}

// =============================================================================
// Operations
// =============================================================================

impl Inventory {
    /// Create a product at the next free code
    pub fn add_product(&mut self, form: &AddProductForm) -> InventoryResult<AddedProduct> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(InventoryError::EmptyName);
        }
        let price = parse_price(&form.price)?;
        let quantity = parse_initial_quantity(&form.quantity)?;
        let code = next_code(&self.products).ok_or(InventoryError::CodesExhausted)?;

        let product = Product::new(name, price, quantity);
        let mut next = self.products.clone();
        next.insert(code, product.clone());
        self.commit(next)?;

        tracing::info!(code = %code, name = %product.name, price, quantity, "Product added");
        Ok(AddedProduct { code, product })
    }

    /// Look up one product; never mutates
    pub fn query(&self, form: &QueryForm) -> InventoryResult<ItemView> {
        let code = parse_code(&form.code)?;
        self.products
            .get(&code)
            .map(|product| ItemView::new(code, product))
            .ok_or(InventoryError::ProductNotFound(code))
    }

    /// Validate a sale without applying it
    pub fn check_sale(&self, form: &SellForm) -> InventoryResult<SaleRequest> {
        let code = parse_code(&form.code)?;
        let requested = parse_moved_quantity(&form.quantity)?;
        let product = self
            .products
            .get(&code)
            .ok_or(InventoryError::UnknownCode(code))?;

        let available = product.quantity;
        if requested > u64::from(available) {
            return Err(InventoryError::InsufficientStock {
                available,
                requested: u32::try_from(requested).unwrap_or(u32::MAX),
            });
        }

        Ok(SaleRequest {
            code,
            name: product.name.clone(),
            // requested <= available, so it fits
            quantity: requested as u32,
            available,
        })
    }

    /// Apply a confirmed sale; re-validates against the current state
    pub fn sell(&mut self, form: &SellForm) -> InventoryResult<StockChange> {
        let sale = self.check_sale(form)?;
        let remaining = sale.available - sale.quantity;

        let mut next = self.products.clone();
        if let Some(product) = next.get_mut(&sale.code) {
            product.quantity = remaining;
        }
        self.commit(next)?;

        tracing::info!(code = %sale.code, sold = sale.quantity, remaining, "Sale recorded");
        Ok(StockChange {
            code: sale.code,
            name: sale.name,
            delta: sale.quantity,
            quantity: remaining,
        })
    }

    /// Add units to an existing product
    pub fn restock(&mut self, form: &RestockForm) -> InventoryResult<StockChange> {
        let code = parse_code(&form.code)?;
        let added = parse_moved_quantity(&form.quantity)?;
        let product = self
            .products
            .get(&code)
            .ok_or(InventoryError::UnknownCode(code))?;

        let previous = product.quantity;
        let quantity = u64::from(previous)
            .checked_add(added)
            .and_then(|q| u32::try_from(q).ok())
            .ok_or(InventoryError::StockOverflow)?;
        let name = product.name.clone();

        let mut next = self.products.clone();
        if let Some(product) = next.get_mut(&code) {
            product.quantity = quantity;
        }
        self.commit(next)?;

        tracing::info!(code = %code, added, quantity, "Stock replenished");
        Ok(StockChange {
            code,
            name,
            delta: quantity - previous,
            quantity,
        })
    }

    /// Replace the whole record set (reset to seed)
    pub fn replace_all(&mut self, products: ProductMap) -> InventoryResult<()> {
        let count = products.len();
        self.commit(products)?;
        tracing::info!(count, "Inventory reset to seed data");
        Ok(())
    }

    /// Save first, swap on success
    fn commit(&mut self, next: ProductMap) -> InventoryResult<()> {
        if let Err(e) = self.persistence.save(&next) {
            tracing::error!(error = %e, "Failed to persist inventory");
            return Err(e.into());
        }
        self.products = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventorySummary, normalize};
    use crate::storage::{KvStore, Persistence, RedbStore, StorageError, StorageResult};
    use std::sync::Arc;

    fn code(v: u32) -> ProductCode {
        ProductCode::new(v).unwrap()
    }

    fn inventory_with(rows: &[(u32, &str, f64, u32)]) -> Inventory {
        let store = Arc::new(RedbStore::open_in_memory().unwrap());
        let persistence = Persistence::new(store);
        let products: ProductMap = rows
            .iter()
            .map(|(c, name, price, qty)| (code(*c), Product::new(*name, *price, *qty)))
            .collect();
        persistence.save(&products).unwrap();
        Inventory::new(products, persistence)
    }

    fn persisted(inventory: &Inventory) -> ProductMap {
        normalize(&inventory.persistence.load().into_option().unwrap())
    }

    fn add(name: &str, price: &str, quantity: &str) -> AddProductForm {
        AddProductForm {
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    fn sell(code: &str, quantity: &str) -> SellForm {
        SellForm {
            code: code.into(),
            quantity: quantity.into(),
            confirm: Some("1".into()),
        }
    }

    fn restock(code: &str, quantity: &str) -> RestockForm {
        RestockForm {
            code: code.into(),
            quantity: quantity.into(),
        }
    }

    /// KvStore whose writes always fail
    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn read(&self, _key: &str) -> StorageResult<Option<Vec<u8>>> {
            Ok(None)
        }

        fn write(&self, _key: &str, _value: &[u8]) -> StorageResult<()> {
            let err = serde_json::from_str::<serde_json::Value>("x").unwrap_err();
            Err(StorageError::Serialization(err))
        }
    }

    // ========== add ==========

    #[test]
    fn test_add_to_empty_inventory() {
        let mut inv = inventory_with(&[]);
        let added = inv.add_product(&add("Mouse", "199,90", "10")).unwrap();

        assert_eq!(added.code, code(1));
        assert_eq!(added.product, Product::new("Mouse", 199.9, 10));
        assert_eq!(added.message(), "Produto adicionado! Código 1 (Mouse).");
        assert_eq!(persisted(&inv), *inv.products());
    }

    #[test]
    fn test_add_uses_max_code_plus_one() {
        let mut inv = inventory_with(&[(3, "A", 1.0, 1), (9, "B", 1.0, 1)]);
        let added = inv.add_product(&add("  Webcam  ", "150", "0")).unwrap();

        assert_eq!(added.code, code(10));
        assert_eq!(inv.products()[&code(10)].name, "Webcam");
        assert_eq!(inv.products()[&code(10)].quantity, 0);
    }

    #[test]
    fn test_add_validation_order_and_messages() {
        let mut inv = inventory_with(&[]);

        let err = inv.add_product(&add("   ", "abc", "x")).unwrap_err();
        assert!(matches!(err, InventoryError::EmptyName));

        let err = inv.add_product(&add("Mouse", "-1", "x")).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidPrice));
        assert!(matches!(
            inv.add_product(&add("Mouse", "", "1")).unwrap_err(),
            InventoryError::InvalidPrice
        ));

        for quantity in ["2.5", "-1", "", "dez"] {
            let err = inv.add_product(&add("Mouse", "10", quantity)).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidQuantity), "{quantity}");
        }

        assert!(inv.products().is_empty());
    }

    #[test]
    fn test_add_rejects_price_above_max() {
        let mut inv = inventory_with(&[]);

        for price in ["1e29", "1000000,01"] {
            let err = inv.add_product(&add("Servidor", price, "2")).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidPrice), "{price}");
        }
        assert!(inv.products().is_empty());

        inv.add_product(&add("Servidor", "1000000", "2")).unwrap();
        assert_eq!(
            inv.summary().total_invested,
            rust_decimal::Decimal::new(2_000_000, 0)
        );
    }

    // ========== query ==========

    #[test]
    fn test_query() {
        let inv = inventory_with(&[(4, "Headset Gamer", 199.9, 12)]);

        let item = inv.query(&QueryForm { code: " 4 ".into() }).unwrap();
        assert_eq!(item.name, "Headset Gamer");
        assert_eq!(item.total, rust_decimal::Decimal::new(23988, 1));

        assert!(matches!(
            inv.query(&QueryForm { code: "5".into() }),
            Err(InventoryError::ProductNotFound(c)) if c == code(5)
        ));
        for bad in ["0", "-4", "x", ""] {
            assert!(matches!(
                inv.query(&QueryForm { code: bad.into() }),
                Err(InventoryError::InvalidCode)
            ));
        }
    }

    // ========== sell ==========

    #[test]
    fn test_sell_decrements_and_persists() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, 10)]);
        let change = inv.sell(&sell("1", "3")).unwrap();

        assert_eq!(change.quantity, 7);
        assert_eq!(
            change.sale_message(),
            "Venda realizada! 3x 'Mouse' (estoque agora: 7)."
        );
        assert_eq!(inv.products()[&code(1)].quantity, 7);
        assert_eq!(persisted(&inv)[&code(1)].quantity, 7);
    }

    #[test]
    fn test_sell_entire_stock() {
        let mut inv = inventory_with(&[(15, "Cadeira Gamer", 890.0, 2)]);
        inv.sell(&sell("15", "2")).unwrap();
        assert_eq!(inv.products()[&code(15)].quantity, 0);
    }

    #[test]
    fn test_oversell_leaves_state_unchanged() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, 2)]);
        let before = inv.products().clone();

        let err = inv.sell(&sell("1", "5")).unwrap_err();
        assert_eq!(err.to_string(), "Estoque insuficiente. Em estoque: 2.");
        assert_eq!(*inv.products(), before);
        assert_eq!(persisted(&inv), before);

        let err = inv.sell(&sell("1", "99999999999")).unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientStock { available: 2, .. }));
    }

    #[test]
    fn test_sell_validation() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, 2)]);
        assert!(matches!(inv.sell(&sell("0", "1")), Err(InventoryError::InvalidCode)));
        assert!(matches!(inv.sell(&sell("1", "0")), Err(InventoryError::InvalidQuantity)));
        assert!(matches!(inv.sell(&sell("1", "1.5")), Err(InventoryError::InvalidQuantity)));
        assert!(matches!(inv.sell(&sell("2", "1")), Err(InventoryError::UnknownCode(_))));
    }

    #[test]
    fn test_check_sale_does_not_mutate() {
        let inv = inventory_with(&[(1, "Mouse", 100.0, 10)]);
        let sale = inv.check_sale(&sell("1", "4")).unwrap();

        assert_eq!(
            sale,
            SaleRequest {
                code: code(1),
                name: "Mouse".into(),
                quantity: 4,
                available: 10,
            }
        );
        assert_eq!(inv.products()[&code(1)].quantity, 10);
    }

    #[test]
    fn test_confirmation_flag() {
        let mut form = sell("1", "1");
        assert!(form.is_confirmed());
        form.confirm = None;
        assert!(!form.is_confirmed());
        form.confirm = Some("0".into());
        assert!(!form.is_confirmed());
    }

    // ========== restock ==========

    #[test]
    fn test_restock_increments() {
        let mut inv = inventory_with(&[(10, "Placa de Vídeo GTX 1650", 1200.0, 3)]);
        let change = inv.restock(&restock("10", "5")).unwrap();

        assert_eq!(change.delta, 5);
        assert_eq!(change.quantity, 8);
        assert_eq!(
            change.restock_message(),
            "Estoque atualizado! +5 em 'Placa de Vídeo GTX 1650' (agora: 8)."
        );
        assert_eq!(persisted(&inv)[&code(10)].quantity, 8);
    }

    #[test]
    fn test_restock_missing_code_leaves_state_unchanged() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, 2)]);
        let before = inv.products().clone();

        let err = inv.restock(&restock("7", "5")).unwrap_err();
        assert_eq!(err.to_string(), "Código não existe.");
        assert_eq!(*inv.products(), before);
    }

    #[test]
    fn test_restock_overflow() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, u32::MAX - 1)]);
        assert!(matches!(
            inv.restock(&restock("1", "2")),
            Err(InventoryError::StockOverflow)
        ));
        assert_eq!(inv.products()[&code(1)].quantity, u32::MAX - 1);
    }

    // ========== reset ==========

    #[test]
    fn test_replace_all_is_wholesale() {
        let mut inv = inventory_with(&[(1, "Mouse", 100.0, 0), (99, "Extra", 1.0, 1)]);
        let seed: ProductMap = [(code(1), Product::new("Mouse", 100.0, 10))]
            .into_iter()
            .collect();

        inv.replace_all(seed.clone()).unwrap();
        assert_eq!(*inv.products(), seed);
        assert_eq!(persisted(&inv), seed);
        assert_eq!(InventorySummary::from_products(inv.products()).product_count, 1);
    }

    // ========== persistence failure ==========

    #[test]
    fn test_failed_save_keeps_memory_state() {
        let mut products = ProductMap::new();
        products.insert(code(1), Product::new("Mouse", 100.0, 10));
        let mut inv = Inventory::new(products.clone(), Persistence::new(Arc::new(ReadOnlyStore)));

        let err = inv.sell(&sell("1", "1")).unwrap_err();
        assert_eq!(err.to_string(), "Falha ao salvar os dados.");
        assert_eq!(*inv.products(), products);

        assert!(inv.add_product(&add("Teclado", "80", "15")).is_err());
        assert_eq!(inv.products().len(), 1);
    }
}
