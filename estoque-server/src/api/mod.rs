//! HTTP 路由模块
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | / , /produtos, /adicionar, /consultar, /vender, /repor, /relatorio | GET | 页面 |
//! | /adicionar, /consultar, /vender, /repor | POST | 表单提交 |
//! | /produtos/resetar | POST | 重置为种子数据 |
//! | /api/produtos | GET | 派生视图模型 (JSON) |
//! | /api/produtos/{code} | GET | 单个商品 (JSON) |
//! | /health | GET | 健康检查 |
//!
//! 未匹配的 GET 由 [`pages::show`] 渲染 404 页面。

pub mod forms;
pub mod health;
pub mod pages;
pub mod products;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;
use crate::routing::Route;
use crate::views::products::RESET_PATH;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Page routes: GET renders, POST submits
fn page_router() -> Router<ServerState> {
    Router::new()
        .route(Route::Dashboard.path(), get(pages::show))
        .route(Route::Products.path(), get(pages::show))
        .route(Route::Add.path(), get(pages::show).post(forms::add))
        .route(Route::Query.path(), get(pages::show).post(forms::query))
        .route(Route::Sell.path(), get(pages::show).post(forms::sell))
        .route(Route::Restock.path(), get(pages::show).post(forms::restock))
        .route(Route::Report.path(), get(pages::show))
        .route(RESET_PATH, post(forms::reset))
}

/// Build the Axum router (without state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(page_router())
        .merge(products::router())
        .merge(health::router())
        .fallback(pages::show)
}

/// Build a fully configured application with all middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        // HTTP 请求日志中间件 - 最外层
        .layer(middleware::from_fn(log_request))
}
