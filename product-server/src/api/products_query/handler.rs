//! Product query handlers

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::api::extract::QueryParams;
use crate::core::ServerState;
use crate::services::ProductQueryService;
use crate::utils::validation::require_positive_price;
use shared::error::AppResult;
use shared::models::Product;

#[derive(Debug, Deserialize)]
pub struct PriceParams {
    pub price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParams {
    pub sort_by: String,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

/// 200 with the list, or 204 when nothing matched
fn list_or_no_content(products: Vec<Product>) -> Response {
    if products.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(products).into_response()
    }
}

/// GET /products/query/price-greater-than?price=
pub async fn price_greater_than(
    State(state): State<ServerState>,
    QueryParams(params): QueryParams<PriceParams>,
) -> AppResult<Response> {
    require_positive_price(params.price, "price")?;

    let service = ProductQueryService::new(state.pool());
    let products = service.find_by_price_greater_than(params.price).await?;
    Ok(list_or_no_content(products))
}

/// GET /products/query/price-between?minPrice=&maxPrice=
pub async fn price_between(
    State(state): State<ServerState>,
    QueryParams(params): QueryParams<PriceRangeParams>,
) -> AppResult<Response> {
    require_positive_price(params.min_price, "minPrice")?;
    require_positive_price(params.max_price, "maxPrice")?;

    let service = ProductQueryService::new(state.pool());
    let products = service
        .find_by_price_between(params.min_price, params.max_price)
        .await?;
    Ok(list_or_no_content(products))
}

/// GET /products/query/sorted?sortBy=&ascending=
pub async fn sorted(
    State(state): State<ServerState>,
    QueryParams(params): QueryParams<SortParams>,
) -> AppResult<Response> {
    let service = ProductQueryService::new(state.pool());
    let products = service
        .find_all_order_by(&params.sort_by, params.ascending)
        .await?;
    Ok(list_or_no_content(products))
}

/// GET /products/query/name-containing?name=
pub async fn name_containing(
    State(state): State<ServerState>,
    QueryParams(params): QueryParams<NameParams>,
) -> AppResult<Response> {
    let service = ProductQueryService::new(state.pool());
    let products = service.find_by_name_containing(&params.name).await?;
    Ok(list_or_no_content(products))
}
