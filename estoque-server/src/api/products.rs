//! Product JSON API
//!
//! 只读接口，返回与页面相同的派生视图模型。

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use shared::{ApiResponse, AppError, AppResult, ErrorCode, ProductCode};

use crate::core::ServerState;
use crate::inventory::{InventoryError, InventorySummary, ItemView};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/produtos", get(list))
        .route("/api/produtos/{code}", get(get_by_code))
}

/// GET /api/produtos - 完整视图模型
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<InventorySummary>> {
    Json(ApiResponse::success(state.summary()))
}

/// GET /api/produtos/{code} - 单个商品
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<ApiResponse<ItemView>>> {
    let code = code
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(ProductCode::new)
        .ok_or_else(|| {
            AppError::from(InventoryError::InvalidCode).with_detail("code", code.clone())
        })?;

    let item = state
        .inventory
        .lock()
        .get(code)
        .map(|product| ItemView::new(code, product))
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, "Produto não encontrado.")
                .with_detail("code", code.get())
        })?;

    Ok(Json(ApiResponse::success(item)))
}
