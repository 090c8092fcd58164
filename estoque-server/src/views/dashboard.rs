use super::{amount, escape_html, page_header, price};
use crate::inventory::{InventorySummary, LOW_STOCK_THRESHOLD};
use crate::routing::Route;

pub fn render(summary: &InventorySummary) -> String {
    let low_rows = if summary.low_stock.is_empty() {
        r#"<tr><td colspan="4" class="muted">Nenhum produto com estoque baixo no momento ✅</td></tr>"#
            .to_string()
    } else {
        summary
            .low_stock
            .iter()
            .map(|item| {
                format!(
                    r#"<tr class="low-stock"><td>{}</td><td>{}</td><td>{}</td><td><span class="pill pill-danger">{}</span></td></tr>"#,
                    item.code,
                    escape_html(&item.name),
                    price(item.price),
                    item.quantity
                )
            })
            .collect()
    };

    format!(
        r#"{header}
<section class="grid">
  <div class="card"><div class="card-label">Total de itens</div><div class="card-value">{total_items}</div></div>
  <div class="card"><div class="card-label">Total investido</div><div class="card-value">{invested}</div></div>
  <div class="card"><div class="card-label">Produtos cadastrados</div><div class="card-value">{count}</div></div>
</section>
<section class="card mt">
  <div class="card-head">
    <h2>⚠️ Estoque baixo (&lt;= {threshold})</h2>
    <a class="btn btn-secondary" href="{products}">Ver todos</a>
  </div>
  <div class="table-wrap">
    <table class="table">
      <thead><tr><th>Código</th><th>Produto</th><th>Preço</th><th>Quantidade</th></tr></thead>
      <tbody>{low_rows}</tbody>
    </table>
  </div>
  <p class="muted mt-sm small">Dica: use <span class="kbd">Repor</span> para aumentar estoque sem criar produto novo.</p>
</section>"#,
        header = page_header("Dashboard", "Resumo do estoque e alertas de baixa quantidade."),
        total_items = summary.total_items,
        invested = amount(summary.total_invested),
        count = summary.product_count,
        threshold = LOW_STOCK_THRESHOLD,
        products = Route::Products.path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Product, ProductCode, ProductMap};

    #[test]
    fn test_cards_and_low_stock_rows() {
        let mut products = ProductMap::new();
        products.insert(ProductCode::new(1).unwrap(), Product::new("Mouse", 1234.5, 10));
        products.insert(ProductCode::new(2).unwrap(), Product::new("Cabo", 10.0, 1));
        let html = render(&InventorySummary::from_products(&products));

        assert!(html.contains(r#"<div class="card-value">11</div>"#));
        assert!(html.contains("R$\u{a0}12.355,00"));
        assert!(html.contains(r#"<div class="card-value">2</div>"#));
        assert_eq!(html.matches(r#"<tr class="low-stock">"#).count(), 1);
        assert!(html.contains("<td>Cabo</td>"));
    }

    #[test]
    fn test_no_low_stock_message() {
        let mut products = ProductMap::new();
        products.insert(ProductCode::new(1).unwrap(), Product::new("Mouse", 1.0, 10));
        let html = render(&InventorySummary::from_products(&products));
        assert!(html.contains("Nenhum produto com estoque baixo no momento"));
    }
}
