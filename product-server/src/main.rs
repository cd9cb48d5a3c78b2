use product_server::{Config, Server, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (文件不存在时忽略)
    let _ = dotenvy::dotenv();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    setup_environment(&config)?;

    tracing::info!(
        environment = %config.environment,
        database = %config.database_url,
        "Product server starting..."
    );

    // 3. 启动 HTTP 服务器
    let server = Server::new(config);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
