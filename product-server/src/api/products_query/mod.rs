//! Product query API 模块
//!
//! | 路径 | 参数 | 说明 |
//! |------|------|------|
//! | /products/query/price-greater-than | price | 价格严格大于 |
//! | /products/query/price-between | minPrice, maxPrice | 价格区间 (含边界) |
//! | /products/query/sorted | sortBy, ascending | 按 createdAt / price 排序 |
//! | /products/query/name-containing | name | 名称包含 |
//!
//! 结果为空时返回 204。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products/query", query_routes())
}

fn query_routes() -> Router<ServerState> {
    Router::new()
        .route("/price-greater-than", get(handler::price_greater_than))
        .route("/price-between", get(handler::price_between))
        .route("/sorted", get(handler::sorted))
        .route("/name-containing", get(handler::name_containing))
}
