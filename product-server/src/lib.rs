//! Product Server - 商品目录 REST 服务
//!
//! # 架构概述
//!
//! 请求依次经过 API 层、服务层和存储层，请求之间只共享 SQLite 连接池。
//!
//! - **HTTP API** (`api`): axum 路由、提取器、错误到状态码的映射
//! - **服务** (`services`): 名称唯一性校验、更新合并、查询
//! - **数据库** (`db`): SQLite 连接池、迁移、仓储
//!
//! # 模块结构
//!
//! ```text
//! product-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务逻辑
//! ├── db/            # 数据库层
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 按配置初始化日志
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )
}
