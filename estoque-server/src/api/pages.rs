//! Page rendering handlers

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::core::ServerState;
use crate::flash::Flash;
use crate::inventory::InventoryError;
use crate::routing::Route;
use crate::views::{self, PageView, RenderContext};

/// GET any page; unknown paths render the 404 page
pub async fn show(State(state): State<ServerState>, uri: Uri) -> Response {
    let route = Route::parse(uri.path());
    let status = if route.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    render_page(&state, &route, &PageView::Blank, None, status)
}

/// Render a route with pending flashes plus an optional extra one.
///
/// 404 页面不取出队列中的消息 (例如浏览器自动请求的 /favicon.ico)。
/// 不能在持有库存锁时调用 (内部会再次加锁)。
pub(crate) fn render_page(
    state: &ServerState,
    route: &Route,
    view: &PageView,
    extra: Option<Flash>,
    status: StatusCode,
) -> Response {
    let summary = state.summary();
    let mut flashes = if route.is_not_found() {
        Vec::new()
    } else {
        state.flashes.drain()
    };
    flashes.extend(extra);

    let html = views::render(
        route,
        &RenderContext {
            summary: &summary,
            flashes: &flashes,
            view,
        },
    );
    (status, Html(html)).into_response()
}

/// Re-render the submitting page with the failure message
pub(crate) fn rejected(
    state: &ServerState,
    route: &Route,
    view: &PageView,
    err: &InventoryError,
) -> Response {
    let code = err.code();
    match err {
        InventoryError::Storage(_) | InventoryError::Seed(_) => {
            tracing::error!(route = route.path(), error = ?err, "Operation failed");
        }
        _ => tracing::info!(route = route.path(), code = code.code(), "Form rejected: {}", err),
    }
    render_page(
        state,
        route,
        view,
        Some(Flash::error(err.to_string())),
        code.http_status(),
    )
}

/// Navigate: queue the message and redirect (303)
pub(crate) fn navigate(state: &ServerState, route: &Route, flash: Flash) -> Response {
    state.flashes.push(flash);
    Redirect::to(route.path()).into_response()
}
