use async_trait::async_trait;

use crate::domain::user::{NewUser, User};
use crate::ports::order_repository::RepoError;

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Fails with `RepoError::Conflict` when the email is already taken.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;
    /// Exact string match on the email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
