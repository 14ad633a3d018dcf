use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use pedidos_types::domain::order::{NewOrder, Order, OrderChanges};
use pedidos_types::domain::user::{NewUser, User};
use pedidos_types::ports::order_repository::{OrderRepository, RepoError};
use pedidos_types::ports::user_repository::UserRepository;

/// In-memory adapter for both stores. Ids are handed out by atomic counters
/// starting at 1, mirroring the autoincrement columns of the SQLite adapter.
#[derive(Clone)]
pub struct InMemoryRepo {
    orders: Arc<DashMap<i64, Order>>,
    users: Arc<DashMap<i64, User>>,
    next_order_id: Arc<AtomicI64>,
    next_user_id: Arc<AtomicI64>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(DashMap::new()),
            users: Arc::new(DashMap::new()),
            next_order_id: Arc::new(AtomicI64::new(1)),
            next_user_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn insert(&self, order: NewOrder) -> Result<Order, RepoError> {
        let id = self.next_order_id.fetch_add(1, Ordering::SeqCst);
        let order = order.into_order(id);
        self.orders.insert(id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: i64) -> Result<Option<Order>, RepoError> {
        Ok(self.orders.get(&id).map(|r| r.clone()))
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let mut all: Vec<Order> = self.orders.iter().map(|kv| kv.value().clone()).collect();
        // DashMap iteration order is arbitrary; the contract is ascending id.
        all.sort_by_key(|o| o.id);
        Ok(all)
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> Result<Option<Order>, RepoError> {
        if let Some(mut v) = self.orders.get_mut(&id) {
            v.apply(changes);
            return Ok(Some(v.clone()));
        }
        Ok(None)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        Ok(self.orders.remove(&id).is_some())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepo {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        if self.users.iter().any(|kv| kv.value().email == user.email) {
            return Err(RepoError::Conflict(format!(
                "email já cadastrado: {}",
                user.email
            )));
        }
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        let user = user.into_user(id);
        self.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .iter()
            .find(|kv| kv.value().email == email)
            .map(|kv| kv.value().clone()))
    }
}
