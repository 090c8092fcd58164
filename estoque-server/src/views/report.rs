use super::{amount, page_header};
use crate::inventory::InventorySummary;
use crate::routing::Route;

pub fn render(summary: &InventorySummary) -> String {
    format!(
        r#"{header}
<section class="card">
  <div class="report">
    <div class="report-label">Total investido</div>
    <div class="report-value">{invested}</div>
  </div>
  <div class="actions mt">
    <a class="btn btn-secondary" href="{products}">Ver produtos</a>
    <a class="btn" href="{home}">Voltar ao dashboard</a>
  </div>
</section>"#,
        header = page_header("Relatório", "Total investido no estoque (quantidade × preço)."),
        invested = amount(summary.total_invested),
        products = Route::Products.path(),
        home = Route::Dashboard.path(),
    )
}
