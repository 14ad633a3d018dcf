///  To run :
///  cargo r --example client_example
use pedidos_client::{CreateOrderRequest, PedidosClient, UpdateOrderRequest};
use pedidos_hex::application::auth_service::AuthService;
use pedidos_hex::application::order_service::OrderService;
use pedidos_hex::inbound::http::{HttpServer, HttpServerConfig};
use pedidos_repo::build_repo;
use pedidos_types::domain::order::OrderStatus;
use tempfile::tempdir;

fn find_free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Start server on an ephemeral port.
    let port = find_free_port();
    let addr = format!("http://127.0.0.1:{port}/");

    // Use a temp file-backed SQLite DB so multiple connections see the same data.
    let tmp = tempdir()?;
    let db_path = tmp.path().join("pedidos.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let repo = build_repo(Some(&db_url)).await?;
    let orders = OrderService::new(repo.clone());
    let auth = AuthService::new(repo);
    let server = HttpServer::new(
        orders,
        auth,
        HttpServerConfig {
            port: port.to_string(),
        },
    )
    .await?;

    let handle = tokio::spawn(async move {
        server.run().await.expect("server run");
    });
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    // Use client against the running server.
    let client = PedidosClient::new(&addr)?;

    let registered = client.register("exemplo@example.com", "s3nha").await?;
    println!("Register: {}", registered.message);
    let logged_in = client.login("exemplo@example.com", "s3nha").await?;
    println!("Login: {}", logged_in.message);

    let created = client
        .create_order(CreateOrderRequest {
            cliente: "Exemplo".into(),
            endereco: "Rua das Flores, 10".into(),
            produto: "Caneca".into(),
            status: "A caminho".into(),
        })
        .await?;
    println!("Created order id={}", created.id);
    assert_eq!(created.status, OrderStatus::InTransit);

    let listed = client.list_orders().await?;
    println!("Listed {} order(s)", listed.len());

    let updated = client
        .update_order(
            created.id,
            UpdateOrderRequest {
                status: Some("Entregue".into()),
                ..Default::default()
            },
        )
        .await?;
    println!("Updated status={} for id {}", updated.status, updated.id);
    assert_eq!(updated.status, OrderStatus::Delivered);

    let deleted = client.delete_order(created.id).await?;
    println!("Delete: {}", deleted.message);

    handle.abort();
    Ok(())
}
