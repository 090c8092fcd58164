//! 表单页面 (添加 / 查询 / 出售 / 补货)
//!
//! 校验失败时页面会带着用户刚输入的草稿重新渲染。

use super::{PageView, QueryOutcome, amount, escape_html, page_header, price};
use crate::inventory::{AddProductForm, InventorySummary, RestockForm, SaleRequest, SellForm};
use crate::routing::Route;

pub fn render_add(view: &PageView) -> String {
    let default = AddProductForm::default();
    let draft = match view {
        PageView::Add { draft } => draft,
        _ => &default,
    };

    format!(
        r#"{header}
<section class="card">
  <form class="form" id="formAdd" method="post" action="{action}">
    <div class="form-row">
      <label for="nome">Produto</label>
      <input id="nome" name="nome" type="text" placeholder="Ex: Mouse Gamer" value="{name}" required />
    </div>
    <div class="form-grid">
      <div class="form-row">
        <label for="preco">Preço (R$)</label>
        <input id="preco" name="preco" type="text" inputmode="decimal" placeholder="Ex: 199.90" value="{price}" required />
      </div>
      <div class="form-row">
        <label for="quantidade">Quantidade</label>
        <input id="quantidade" name="quantidade" type="number" min="0" step="1" placeholder="Ex: 10" value="{quantity}" required />
      </div>
    </div>
    <div class="form-actions">
      <button class="btn" type="submit">Salvar</button>
      <a class="btn btn-secondary" href="{back}">Cancelar</a>
    </div>
  </form>
</section>"#,
        header = page_header("Adicionar produto", "Cadastre um novo item no estoque."),
        action = Route::Add.path(),
        name = escape_html(&draft.name),
        price = escape_html(&draft.price),
        quantity = escape_html(&draft.quantity),
        back = Route::Products.path(),
    )
}

pub fn render_query(view: &PageView) -> String {
    let (code, outcome) = match view {
        PageView::Query { draft, outcome } => (draft.code.as_str(), outcome.as_ref()),
        _ => ("", None),
    };

    let result = match outcome {
        None => r#"<div class="muted">Digite um código e consulte.</div>"#.to_string(),
        Some(QueryOutcome::NotFound) => {
            r#"<div class="muted">Produto não encontrado.</div>"#.to_string()
        }
        Some(QueryOutcome::Found(item)) => format!(
            r#"<div class="result">
  <h2>Resultado</h2>
  <div class="result-grid">
    <div><span class="muted">Código</span><br><strong>{}</strong></div>
    <div><span class="muted">Produto</span><br><strong>{}</strong></div>
    <div><span class="muted">Preço</span><br><strong>{}</strong></div>
    <div><span class="muted">Quantidade</span><br><strong>{}</strong></div>
    <div><span class="muted">Total</span><br><strong>{}</strong></div>
  </div>
</div>"#,
            item.code,
            escape_html(&item.name),
            price(item.price),
            item.quantity,
            amount(item.total)
        ),
    };

    format!(
        r#"{header}
<section class="card">
  <form class="form" id="formConsultar" method="post" action="{action}">
    <div class="form-grid">
      <div class="form-row">
        <label for="codigo">Código</label>
        <input id="codigo" name="codigo" type="number" min="1" step="1" placeholder="Ex: 10" value="{code}" required />
      </div>
      <div class="form-row">
        <label>&nbsp;</label>
        <button class="btn" type="submit">Consultar</button>
      </div>
    </div>
  </form>
  <hr class="sep" />
  <div id="resultadoConsultar">{result}</div>
</section>"#,
        header = page_header("Consultar produto", "Busque um produto pelo código."),
        action = Route::Query.path(),
        code = escape_html(code),
    )
}

pub fn render_sell(view: &PageView) -> String {
    let default = SellForm::default();
    let (draft, pending) = match view {
        PageView::Sell { draft, pending } => (draft, pending.as_ref()),
        _ => (&default, None),
    };

    let confirm = pending.map(sale_confirmation).unwrap_or_default();

    format!(
        r#"{header}
{confirm}<section class="card">
  <form class="form" id="formVender" method="post" action="{action}">
    <div class="form-grid">
      <div class="form-row">
        <label for="codigo">Código</label>
        <input id="codigo" name="codigo" type="number" min="1" step="1" placeholder="Ex: 10" value="{code}" required />
      </div>
      <div class="form-row">
        <label for="quantidade">Quantidade</label>
        <input id="quantidade" name="quantidade" type="number" min="1" step="1" placeholder="Ex: 2" value="{quantity}" required />
      </div>
    </div>
    <div class="form-actions">
      <button class="btn btn-danger" type="submit">Vender</button>
      <a class="btn btn-secondary" href="{back}">Voltar</a>
    </div>
  </form>
  <p class="muted mt-sm small">Confirmação aparece antes de concluir a venda.</p>
</section>"#,
        header = page_header("Vender produto", "Baixa no estoque (não permite negativo)."),
        action = Route::Sell.path(),
        code = escape_html(&draft.code),
        quantity = escape_html(&draft.quantity),
        back = Route::Products.path(),
    )
}

fn sale_confirmation(sale: &SaleRequest) -> String {
    format!(
        r#"<section class="card confirm">
  <h2>Confirmar venda?</h2>
  <p>Produto: <strong>{name}</strong><br>Quantidade: <strong>{quantity}</strong><br><span class="muted">Em estoque: {available}</span></p>
  <form method="post" action="{action}" class="form-actions">
    <input type="hidden" name="codigo" value="{code}" />
    <input type="hidden" name="quantidade" value="{quantity}" />
    <input type="hidden" name="confirmar" value="1" />
    <button class="btn btn-danger" type="submit">Confirmar</button>
    <a class="btn btn-secondary" href="{action}">Cancelar</a>
  </form>
</section>
"#,
        name = escape_html(&sale.name),
        quantity = sale.quantity,
        available = sale.available,
        code = sale.code,
        action = Route::Sell.path(),
    )
}

pub fn render_restock(summary: &InventorySummary, view: &PageView) -> String {
    let default = RestockForm::default();
    let draft = match view {
        PageView::Restock { draft } => draft,
        _ => &default,
    };
    let selected = draft.code.trim();

    let options: String = summary
        .items
        .iter()
        .map(|item| {
            let code = item.code.to_string();
            let attr = if code == selected { " selected" } else { "" };
            let tag = if item.is_low_stock() { " (baixo)" } else { "" };
            format!(
                r#"<option value="{code}"{attr}>{code} - {}{tag}</option>"#,
                escape_html(&item.name)
            )
        })
        .collect();

    let low_hint = if summary.low_stock.is_empty() {
        "Nenhum produto em baixa no momento.".to_string()
    } else {
        let list: Vec<String> = summary
            .low_stock
            .iter()
            .map(|it| format!("{} ({})", it.code, it.quantity))
            .collect();
        format!("Produtos em baixa: {}", list.join(", "))
    };

    format!(
        r#"{header}
<section class="card">
  <form class="form" id="formRepor" method="post" action="{action}">
    <div class="form-row">
      <label for="codigo">Produto</label>
      <select id="codigo" name="codigo">{options}</select>
      <div class="muted small mt-sm">{low_hint}</div>
    </div>
    <div class="form-row">
      <label for="quantidade">Quantidade a adicionar</label>
      <input id="quantidade" name="quantidade" type="number" min="1" step="1" placeholder="Ex: 5" value="{quantity}" required />
    </div>
    <div class="form-actions">
      <button class="btn" type="submit">Repor</button>
      <a class="btn btn-secondary" href="{back}">Voltar</a>
    </div>
  </form>
</section>"#,
        header = page_header("Repor estoque", "Adicionar quantidade a um produto já cadastrado."),
        action = Route::Restock.path(),
        quantity = escape_html(&draft.quantity),
        back = Route::Products.path(),
    )
}
