use pedidos_hex::application::auth_service::AuthService;
use pedidos_hex::application::order_service::{OrderService, OrderUpdate};
use pedidos_repo::memory::InMemoryRepo;
use pedidos_types::domain::order::OrderStatus;

// End-to-end service flow against the in-memory adapter.
#[tokio::test]
async fn create_list_update_delete_flow() {
    let repo = InMemoryRepo::new();
    let svc = OrderService::new(repo.clone());

    let order = svc
        .create_order(
            "Eva".into(),
            "Av. Central, 100".into(),
            "Caneca".into(),
            "A caminho",
        )
        .await
        .unwrap();

    let list = svc.list_orders().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, order.id);

    // Idempotent read: a second list with no writes in between matches.
    let again = svc.list_orders().await.unwrap();
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].id, order.id);

    let updated = svc
        .update_order(
            order.id,
            OrderUpdate {
                status: Some("Entregue".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);

    svc.delete_order(order.id).await.unwrap();
    let after_delete = svc.list_orders().await.unwrap();
    assert!(after_delete.is_empty());
}

// Orders and users live side by side in the same store.
#[tokio::test]
async fn orders_and_auth_share_a_store() {
    let repo = InMemoryRepo::new();
    let orders = OrderService::new(repo.clone());
    let auth = AuthService::new(repo);

    auth.register("eva@example.com".into(), "s3nha".into())
        .await
        .unwrap();
    orders
        .create_order(
            "Eva".into(),
            "Av. Central, 100".into(),
            "Caneca".into(),
            "A caminho",
        )
        .await
        .unwrap();

    auth.login("eva@example.com".into(), "s3nha".into())
        .await
        .unwrap();
    assert_eq!(orders.list_orders().await.unwrap().len(), 1);
}
