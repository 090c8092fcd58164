//! 页面渲染
//!
//! 所有页面都是纯函数：输入路由、派生视图模型、待显示消息和页面草稿，
//! 输出完整 HTML。渲染不读取也不修改任何共享状态。
//!
//! - [`layout`] - 外壳 (页头、导航、消息栈、样式)
//! - [`dashboard`] - 概览卡片 + 低库存表
//! - [`products`] - 商品表 + 重置确认
//! - [`forms`] - 添加 / 查询 / 出售 / 补货表单
//! - [`report`] - 投入总额

pub mod dashboard;
pub mod forms;
pub mod layout;
pub mod products;
pub mod report;

use rust_decimal::Decimal;

use crate::flash::Flash;
use crate::inventory::{
    AddProductForm, InventorySummary, ItemView, QueryForm, RestockForm, SaleRequest, SellForm,
};
use crate::routing::Route;
use crate::utils::{format_brl, money};

/// Outcome of a lookup shown inline on the query page
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Found(ItemView),
    NotFound,
}

/// Per-page state carried into one render (drafts, results, confirmations)
#[derive(Debug, Clone, Default)]
pub enum PageView {
    #[default]
    Blank,
    Add {
        draft: AddProductForm,
    },
    Query {
        draft: QueryForm,
        outcome: Option<QueryOutcome>,
    },
    Sell {
        draft: SellForm,
        pending: Option<SaleRequest>,
    },
    Restock {
        draft: RestockForm,
    },
    ResetConfirm,
}

/// Everything a page needs
pub struct RenderContext<'a> {
    pub summary: &'a InventorySummary,
    pub flashes: &'a [Flash],
    pub view: &'a PageView,
}

/// Render a route to a full HTML document
pub fn render(route: &Route, ctx: &RenderContext<'_>) -> String {
    let body = match route {
        Route::Dashboard => dashboard::render(ctx.summary),
        Route::Products => products::render(ctx.summary, ctx.view),
        Route::Add => forms::render_add(ctx.view),
        Route::Query => forms::render_query(ctx.view),
        Route::Sell => forms::render_sell(ctx.view),
        Route::Restock => forms::render_restock(ctx.summary, ctx.view),
        Route::Report => report::render(ctx.summary),
        Route::NotFound(_) => render_not_found(),
    };
    layout::page(route, ctx.flashes, &body)
}

fn render_not_found() -> String {
    format!(
        r#"<div class="card">
  {header}
  <a class="btn btn-secondary" href="{home}">Voltar</a>
</div>"#,
        header = page_header("404", "Página não encontrada."),
        home = Route::Dashboard.path(),
    )
}

/// Title block shared by every page
pub(crate) fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<section class="page-header">
  <h1>{}</h1>
  <p class="muted">{}</p>
</section>"#,
        escape_html(title),
        escape_html(subtitle)
    )
}

pub(crate) fn price(value: f64) -> String {
    format_brl(money::to_decimal(value))
}

pub(crate) fn amount(value: Decimal) -> String {
    format_brl(value)
}

/// Escape text for HTML bodies and double-quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
