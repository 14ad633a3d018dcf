use std::str::FromStr;

use async_trait::async_trait;
use pedidos_types::domain::order::{NewOrder, Order, OrderChanges, OrderStatus};
use pedidos_types::domain::user::{NewUser, User};
use pedidos_types::ports::order_repository::{OrderRepository, RepoError};
use pedidos_types::ports::user_repository::UserRepository;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteRepo {
    pool: SqlitePool,
}

#[derive(FromRow)]
struct DbOrder {
    id: i64,
    client: String,
    address: String,
    product: String,
    status: String,
}

impl DbOrder {
    fn into_order(self) -> Result<Order, RepoError> {
        let status = OrderStatus::from_str(&self.status)
            .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(Order {
            id: self.id,
            client: self.client,
            address: self.address,
            product: self.product,
            status,
        })
    }
}

#[derive(FromRow)]
struct DbUser {
    id: i64,
    email: String,
    password_hash: String,
}

impl From<DbUser> for User {
    fn from(u: DbUser) -> Self {
        User {
            id: u.id,
            email: u.email,
            password_hash: u.password_hash,
        }
    }
}

fn map_insert_err(e: sqlx::Error) -> RepoError {
    match &e {
        sqlx::Error::Database(db) if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) => {
            RepoError::Conflict(e.to_string())
        }
        _ => RepoError::DbError(e.to_string()),
    }
}

impl SqliteRepo {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        // Run migrations from the migration files, one statement each.
        for ddl in [
            include_str!("../migrations/0001_create_orders.sql"),
            include_str!("../migrations/0002_create_users.sql"),
        ] {
            sqlx::query(ddl).execute(&pool).await?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl OrderRepository for SqliteRepo {
    async fn insert(&self, order: NewOrder) -> Result<Order, RepoError> {
        let res = sqlx::query(
            "INSERT INTO orders (client, address, product, status) VALUES (?, ?, ?, ?)",
        )
        .bind(&order.client)
        .bind(&order.address)
        .bind(&order.product)
        .bind(order.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(order.into_order(res.last_insert_rowid()))
    }

    async fn get(&self, id: i64) -> Result<Option<Order>, RepoError> {
        let row: Option<DbOrder> =
            sqlx::query_as("SELECT id, client, address, product, status FROM orders WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::DbError(e.to_string()))?;
        row.map(|r| r.into_order()).transpose()
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let rows: Vec<DbOrder> =
            sqlx::query_as("SELECT id, client, address, product, status FROM orders ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepoError::DbError(e.to_string()))?;

        rows.into_iter()
            .map(|r| r.into_order())
            .collect::<Result<Vec<_>, _>>()
    }

    async fn update(&self, id: i64, changes: OrderChanges) -> Result<Option<Order>, RepoError> {
        // Read-modify-write; a lost update between the two statements is
        // acceptable under the last-write-wins contract.
        let current = match self.get(id).await? {
            Some(o) => o,
            None => return Ok(None),
        };
        let mut updated = current;
        updated.apply(changes);

        sqlx::query("UPDATE orders SET client = ?, address = ?, product = ?, status = ? WHERE id = ?")
            .bind(&updated.client)
            .bind(&updated.address)
            .bind(&updated.product)
            .bind(updated.status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepoError> {
        let res = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(res.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for SqliteRepo {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let res = sqlx::query("INSERT INTO users (email, password_hash) VALUES (?, ?)")
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_insert_err)?;
        Ok(user.into_user(res.last_insert_rowid()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let row: Option<DbUser> =
            sqlx::query_as("SELECT id, email, password_hash FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::DbError(e.to_string()))?;
        Ok(row.map(User::from))
    }
}
