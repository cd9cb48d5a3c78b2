//! Product API Handlers

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::extract::{JsonBody, ProductId, ValidatedJson};
use crate::core::ServerState;
use crate::services::ProductService;
use crate::utils::validation::validation_message;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductPatch};

/// GET /products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.pool());
    let products = service.find_all().await?;
    Ok(Json(products))
}

/// GET /products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    ProductId(id): ProductId,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.pool());
    let product = service.find_by_id(id).await?;
    Ok(Json(product))
}

/// POST /products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let service = ProductService::new(state.pool());
    let product = service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// POST /products/all - 批量创建商品
///
/// Every item is validated before anything is written.
pub async fn create_all(
    State(state): State<ServerState>,
    JsonBody(payload): JsonBody<Vec<ProductCreate>>,
) -> AppResult<(StatusCode, Json<Vec<Product>>)> {
    for (index, dto) in payload.iter().enumerate() {
        if let Err(e) = dto.validate() {
            return Err(AppError::validation(format!(
                "[{index}] {}",
                validation_message(&e)
            ))
            .with_detail("index", index));
        }
    }

    let service = ProductService::new(state.pool());
    let products = service.create_all(payload).await?;
    Ok((StatusCode::CREATED, Json(products)))
}

/// PUT /products/{id} - 整体替换商品
pub async fn update(
    State(state): State<ServerState>,
    ProductId(id): ProductId,
    ValidatedJson(payload): ValidatedJson<ProductCreate>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.pool());
    let product = service.update_full(id, payload).await?;
    Ok(Json(product))
}

/// PATCH /products/{id} - 部分更新商品
pub async fn patch(
    State(state): State<ServerState>,
    ProductId(id): ProductId,
    ValidatedJson(payload): ValidatedJson<ProductPatch>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.pool());
    let product = service.update_partial(id, payload).await?;
    Ok(Json(product))
}

/// DELETE /products/{id} - 删除商品
///
/// A missing id answers 400, not 404.
pub async fn delete(
    State(state): State<ServerState>,
    ProductId(id): ProductId,
) -> AppResult<StatusCode> {
    let service = ProductService::new(state.pool());
    service.delete_by_id(id).await.map_err(|e| {
        let err = AppError::from(e);
        if err.code == ErrorCode::ProductNotFound {
            err.with_code(ErrorCode::ProductDeleteMissing)
        } else {
            err
        }
    })?;
    Ok(StatusCode::NO_CONTENT)
}
