/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (`.env` 文件同样生效)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DATABASE_URL | sqlite://products.db | SQLite 数据库 |
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false (生产环境 true) | JSON 格式日志 |
/// | LOG_DIR | - | 滚动日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=sqlite://data/products.db HTTP_PORT=9000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 连接串, `sqlite::memory:` 表示内存数据库
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    /// 连接池最大连接数
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_json: bool,
    /// 设置后日志同时按天写入该目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://products.db".into()),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_or("HTTP_PORT", 8080),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", is_production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment,
        }
    }

    /// 测试配置: 内存数据库, 随机端口
    pub fn for_test() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            http_host: "127.0.0.1".into(),
            http_port: 0,
            db_max_connections: 1,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            environment: "test".into(),
        }
    }

    /// `host:port` 监听地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否内存数据库
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
