//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::Future;

use crate::api;
use crate::core::{Config, Result, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        self.run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let state = ServerState::initialize(&self.config).await?;

        let app = api::router(state.clone());
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr()).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            environment = %self.config.environment,
            "Product server listening"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        state.db.pool.close().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}
