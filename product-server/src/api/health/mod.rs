//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 (含数据库连通性) |
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "ok", "timestamp": "..." }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// 数据库检查 (ok | error)
    database: &'static str,
    /// RFC 3339 UTC
    timestamp: String,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_ok = state.db.ping().await;
    if !db_ok {
        tracing::warn!("Health check: database unreachable");
    }

    Json(HealthResponse {
        status: if db_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "ok" } else { "error" },
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
