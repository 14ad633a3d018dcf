use async_trait::async_trait;

use crate::domain::order::{NewOrder, Order, OrderChanges};

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("db error: {0}")]
    DbError(String),
    #[error("conflict: {0}")]
    Conflict(String),
}

#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    async fn insert(&self, order: NewOrder) -> Result<Order, RepoError>;
    async fn get(&self, id: i64) -> Result<Option<Order>, RepoError>;
    /// All orders in ascending id order.
    async fn list(&self) -> Result<Vec<Order>, RepoError>;
    async fn update(&self, id: i64, changes: OrderChanges) -> Result<Option<Order>, RepoError>;
    async fn delete(&self, id: i64) -> Result<bool, RepoError>;
}
