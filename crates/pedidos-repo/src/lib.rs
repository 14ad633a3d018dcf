#[cfg(not(any(feature = "memory", feature = "sqlite")))]
compile_error!("Enable a repo feature: `memory` or `sqlite`.");

use pedidos_types::domain::order::{NewOrder, Order, OrderChanges};
use pedidos_types::domain::user::{NewUser, User};
use pedidos_types::ports::order_repository::{OrderRepository, RepoError};
use pedidos_types::ports::user_repository::UserRepository;

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Feature-selected adapter behind both repository ports. When both features
/// are enabled the SQLite adapter wins, since it is the one that persists.
#[derive(Clone)]
pub struct Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    memory: memory::InMemoryRepo,
    #[cfg(feature = "sqlite")]
    sqlite: sqlite::SqliteRepo,
}

pub async fn build_repo(url: Option<&str>) -> anyhow::Result<Repo> {
    Repo::build_repo(url).await
}

impl Repo {
    #[cfg(all(feature = "memory", not(feature = "sqlite")))]
    pub async fn build_repo(_: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            memory: memory::InMemoryRepo::new(),
        })
    }

    #[cfg(feature = "sqlite")]
    pub async fn build_repo(database_url: Option<&str>) -> anyhow::Result<Self> {
        let url = database_url.unwrap_or("sqlite://pedidos.db");
        let sqlite = sqlite::SqliteRepo::new(url).await?;
        Ok(Self { sqlite })
    }
}

#[cfg(all(feature = "memory", not(feature = "sqlite")))]
#[async_trait::async_trait]
impl OrderRepository for Repo {
    async fn insert(&self, order: NewOrder) -> Result<Order, RepoError> {
        OrderRepository::insert(&self.memory, order).await
    }

    async fn get(&self, id: i64) -> Result<Option<Order>, RepoError> {
        OrderRepository::get(&self.memory, id).await
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        self.memory.list().await
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> Result<Option<Order>, RepoError> {
        self.memory.update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        self.memory.delete(id).await
    }
}

#[cfg(all(feature = "memory", not(feature = "sqlite")))]
#[async_trait::async_trait]
impl UserRepository for Repo {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        UserRepository::insert(&self.memory, user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.memory.find_by_email(email).await
    }
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl OrderRepository for Repo {
    async fn insert(&self, order: NewOrder) -> Result<Order, RepoError> {
        OrderRepository::insert(&self.sqlite, order).await
    }

    async fn get(&self, id: i64) -> Result<Option<Order>, RepoError> {
        OrderRepository::get(&self.sqlite, id).await
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        self.sqlite.list().await
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> Result<Option<Order>, RepoError> {
        self.sqlite.update(id, changes).await
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        self.sqlite.delete(id).await
    }
}

#[cfg(feature = "sqlite")]
#[async_trait::async_trait]
impl UserRepository for Repo {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        UserRepository::insert(&self.sqlite, user).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.sqlite.find_by_email(email).await
    }
}
