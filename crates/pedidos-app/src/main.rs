use pedidos_hex::application::auth_service::AuthService;
use pedidos_hex::application::order_service::OrderService;
use pedidos_hex::config::Config;
use pedidos_hex::inbound::http::{HttpServer, HttpServerConfig};
use pedidos_repo::{build_repo, Repo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for DATABASE_URL / SERVER_PORT when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    let repo: Repo = build_repo(config.database_url.as_deref()).await?;
    let orders = OrderService::new(repo.clone());
    let auth = AuthService::new(repo);

    let server_cfg = HttpServerConfig {
        port: config.server_port.clone(),
    };

    let http = HttpServer::new(orders, auth, server_cfg).await?;
    http.run().await
}
