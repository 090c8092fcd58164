//! Form submission handlers
//!
//! 库存锁只在单条语句内持有：先取结果，释放锁，再渲染或重定向。

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::Response,
};

use super::pages::{navigate, rejected, render_page};
use crate::core::ServerState;
use crate::flash::Flash;
use crate::inventory::actions::{QUERY_FOUND_MESSAGE, RESET_DONE_MESSAGE};
use crate::inventory::{
    AddProductForm, InventoryError, QueryForm, ResetForm, RestockForm, SellForm,
};
use crate::routing::Route;
use crate::views::{PageView, QueryOutcome};

/// POST /adicionar
pub async fn add(State(state): State<ServerState>, Form(form): Form<AddProductForm>) -> Response {
    let result = state.inventory.lock().add_product(&form);
    match result {
        Ok(added) => navigate(&state, &Route::Products, Flash::success(added.message())),
        Err(e) => rejected(&state, &Route::Add, &PageView::Add { draft: form }, &e),
    }
}

/// POST /consultar - 结果直接显示在页面上，不重定向
pub async fn query(State(state): State<ServerState>, Form(form): Form<QueryForm>) -> Response {
    let result = state.inventory.lock().query(&form);
    match result {
        Ok(item) => render_page(
            &state,
            &Route::Query,
            &PageView::Query {
                draft: form,
                outcome: Some(QueryOutcome::Found(item)),
            },
            Some(Flash::success(QUERY_FOUND_MESSAGE)),
            StatusCode::OK,
        ),
        Err(e) => {
            let outcome = matches!(e, InventoryError::ProductNotFound(_))
                .then_some(QueryOutcome::NotFound);
            let view = PageView::Query {
                draft: form,
                outcome,
            };
            rejected(&state, &Route::Query, &view, &e)
        }
    }
}

/// POST /vender
///
/// 未确认：校验后显示确认面板。已确认：重新校验并扣减库存。
pub async fn sell(State(state): State<ServerState>, Form(form): Form<SellForm>) -> Response {
    if !form.is_confirmed() {
        let result = state.inventory.lock().check_sale(&form);
        return match result {
            Ok(sale) => render_page(
                &state,
                &Route::Sell,
                &PageView::Sell {
                    draft: form,
                    pending: Some(sale),
                },
                None,
                StatusCode::OK,
            ),
            Err(e) => rejected(&state, &Route::Sell, &sell_draft(form), &e),
        };
    }

    let result = state.inventory.lock().sell(&form);
    match result {
        Ok(change) => navigate(&state, &Route::Products, Flash::success(change.sale_message())),
        Err(e) => rejected(&state, &Route::Sell, &sell_draft(form), &e),
    }
}

fn sell_draft(mut form: SellForm) -> PageView {
    form.confirm = None;
    PageView::Sell {
        draft: form,
        pending: None,
    }
}

/// POST /repor
pub async fn restock(State(state): State<ServerState>, Form(form): Form<RestockForm>) -> Response {
    let result = state.inventory.lock().restock(&form);
    match result {
        Ok(change) => navigate(
            &state,
            &Route::Products,
            Flash::success(change.restock_message()),
        ),
        Err(e) => rejected(&state, &Route::Restock, &PageView::Restock { draft: form }, &e),
    }
}

/// POST /produtos/resetar
///
/// 种子数据在锁外加载；加载失败时记录集保持不变。
pub async fn reset(State(state): State<ServerState>, Form(form): Form<ResetForm>) -> Response {
    if !form.is_confirmed() {
        return render_page(
            &state,
            &Route::Products,
            &PageView::ResetConfirm,
            None,
            StatusCode::OK,
        );
    }

    let products = match state.seed.load_products().await {
        Ok(products) => products,
        Err(e) => {
            let err = InventoryError::from(e);
            return rejected(&state, &Route::Products, &PageView::Blank, &err);
        }
    };

    let result = state.inventory.lock().replace_all(products);
    match result {
        Ok(()) => navigate(&state, &Route::Products, Flash::success(RESET_DONE_MESSAGE)),
        Err(e) => rejected(&state, &Route::Products, &PageView::Blank, &e),
    }
}
