use super::{PageView, amount, escape_html, page_header, price};
use crate::inventory::InventorySummary;
use crate::inventory::actions::RESET_CONFIRM_MESSAGE;
use crate::routing::Route;

/// Reset endpoint (POST only)
pub const RESET_PATH: &str = "/produtos/resetar";

pub fn render(summary: &InventorySummary, view: &PageView) -> String {
    let rows: String = summary
        .items
        .iter()
        .map(|item| {
            let (row_class, pill) = if item.is_low_stock() {
                (r#" class="low-stock""#, "pill-danger")
            } else {
                ("", "pill-ok")
            };
            format!(
                r#"<tr{row_class}><td>{}</td><td>{}</td><td>{}</td><td><span class="pill {pill}">{}</span></td><td><strong>{}</strong></td></tr>"#,
                item.code,
                escape_html(&item.name),
                price(item.price),
                item.quantity,
                amount(item.total)
            )
        })
        .collect();

    let confirm = match view {
        PageView::ResetConfirm => reset_confirmation(),
        _ => String::new(),
    };

    format!(
        r#"{header}
{confirm}<div class="actions">
  <div class="muted small">Os dados ficam salvos no banco local do servidor.</div>
  <div style="display:flex; gap:10px; flex-wrap:wrap;">
    <form method="post" action="{reset}"><button class="btn btn-secondary" id="btnReset" type="submit">Resetar dados</button></form>
    <a class="btn" href="{add}">+ Adicionar produto</a>
  </div>
</div>
<section class="card">
  <div class="table-wrap">
    <table class="table">
      <thead><tr><th>Código</th><th>Produto</th><th>Preço</th><th>Quantidade</th><th>Total</th></tr></thead>
      <tbody>{rows}</tbody>
    </table>
  </div>
</section>"#,
        header = page_header("Produtos", "Tabela completa com total por item."),
        reset = RESET_PATH,
        add = Route::Add.path(),
    )
}

fn reset_confirmation() -> String {
    format!(
        r#"<section class="card confirm">
  <p>{message}</p>
  <form method="post" action="{reset}" class="form-actions">
    <input type="hidden" name="confirmar" value="1" />
    <button class="btn btn-danger" type="submit">Confirmar</button>
    <a class="btn btn-secondary" href="{products}">Cancelar</a>
  </form>
</section>
"#,
        message = escape_html(RESET_CONFIRM_MESSAGE),
        reset = RESET_PATH,
        products = Route::Products.path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Product, ProductCode, ProductMap};

    fn summary() -> InventorySummary {
        let mut products = ProductMap::new();
        products.insert(ProductCode::new(1).unwrap(), Product::new("Mouse", 100.0, 10));
        products.insert(ProductCode::new(2).unwrap(), Product::new("Cabo", 29.9, 3));
        InventorySummary::from_products(&products)
    }

    #[test]
    fn test_rows_with_totals_and_low_highlight() {
        let html = render(&summary(), &PageView::Blank);
        assert!(html.contains("<td><strong>R$\u{a0}1.000,00</strong></td>"));
        assert!(html.contains("<td><strong>R$\u{a0}89,70</strong></td>"));
        assert_eq!(html.matches(r#"<tr class="low-stock">"#).count(), 1);
        assert!(!html.contains(r#"name="confirmar""#));
    }

    #[test]
    fn test_reset_confirmation_panel() {
        let html = render(&summary(), &PageView::ResetConfirm);
        assert!(html.contains(r#"<input type="hidden" name="confirmar" value="1" />"#));
        assert!(html.contains("Resetar para os 15 produtos iniciais?"));
    }
}
