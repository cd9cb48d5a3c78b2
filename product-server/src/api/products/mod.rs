//! Product API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /products | GET | 全部商品 |
//! | /products | POST | 创建商品 |
//! | /products/all | POST | 批量创建 (全部成功或全部失败) |
//! | /products/{id} | GET | 单个商品 |
//! | /products/{id} | PUT | 整体替换 |
//! | /products/{id} | PATCH | 部分更新 |
//! | /products/{id} | DELETE | 删除 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/all", post(handler::create_all))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .patch(handler::patch)
                .delete(handler::delete),
        )
}
