use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 请求之间唯一共享的是连接池
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
///
/// Clone 只复制引用计数。
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// 打开数据库并应用迁移
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = if config.is_in_memory() {
            DbService::in_memory().await?
        } else {
            DbService::new(&config.database_url, config.db_max_connections).await?
        };
        Ok(Self::new(config.clone(), db))
    }

    /// 测试用: 内存数据库
    pub async fn for_test() -> Result<Self> {
        Self::initialize(&Config::for_test()).await
    }

    pub fn pool(&self) -> SqlitePool {
        self.db.pool.clone()
    }
}
