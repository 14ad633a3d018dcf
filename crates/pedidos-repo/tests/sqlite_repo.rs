#![cfg(feature = "sqlite")]

use std::path::PathBuf;

use pedidos_repo::sqlite::SqliteRepo;
use pedidos_types::domain::order::{NewOrder, OrderChanges, OrderStatus};
use pedidos_types::domain::user::NewUser;
use pedidos_types::ports::order_repository::{OrderRepository, RepoError};
use pedidos_types::ports::user_repository::UserRepository;

fn temp_db_url(dir: &tempfile::TempDir, name: &str) -> String {
    let mut path = PathBuf::from(dir.path());
    path.push(format!("{name}.db"));
    format!("sqlite://{}", path.display())
}

fn new_order(client: &str) -> NewOrder {
    NewOrder::new(
        client.into(),
        "Rua A, 1".into(),
        "Livro".into(),
        OrderStatus::InTransit,
    )
    .unwrap()
}

#[tokio::test]
async fn sqlite_repo_crud_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = SqliteRepo::new(&temp_db_url(&dir, "crud")).await.unwrap();

    let created = OrderRepository::insert(&repo, new_order("Ana")).await.unwrap();
    assert!(created.id >= 1);

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.client, "Ana");
    assert_eq!(fetched.status, OrderStatus::InTransit);

    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);

    let updated = repo
        .update(
            created.id,
            OrderChanges {
                address: Some("Rua B, 2".into()),
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Delivered);
    assert_eq!(updated.address, "Rua B, 2");
    assert_eq!(updated.product, "Livro");

    let deleted = repo.delete(created.id).await.unwrap();
    assert!(deleted);
    assert!(repo.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_repo_assigns_increasing_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = SqliteRepo::new(&temp_db_url(&dir, "ids")).await.unwrap();

    let first = OrderRepository::insert(&repo, new_order("Ana")).await.unwrap();
    let second = OrderRepository::insert(&repo, new_order("Bia")).await.unwrap();
    assert!(second.id > first.id);

    let listed = repo.list().await.unwrap();
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
}

#[tokio::test]
async fn sqlite_repo_handles_missing_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = SqliteRepo::new(&temp_db_url(&dir, "missing")).await.unwrap();

    let missing = repo.get(99).await.unwrap();
    assert!(missing.is_none());

    let updated = repo
        .update(
            99,
            OrderChanges {
                status: Some(OrderStatus::Delivered),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_none());

    let deleted = repo.delete(99).await.unwrap();
    assert!(!deleted);
}

#[tokio::test]
async fn sqlite_repo_rejects_duplicate_emails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = SqliteRepo::new(&temp_db_url(&dir, "users")).await.unwrap();

    let user = NewUser::new("ana@example.com".into(), "$argon2id$hash".into()).unwrap();
    let created = UserRepository::insert(&repo, user.clone()).await.unwrap();
    assert!(created.id >= 1);

    let dup = UserRepository::insert(&repo, user).await;
    assert!(matches!(dup, Err(RepoError::Conflict(_))));

    let found = repo.find_by_email("ana@example.com").await.unwrap().unwrap();
    assert_eq!(found.password_hash, "$argon2id$hash");
}
