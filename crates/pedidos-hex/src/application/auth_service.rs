use crate::application::password::{hash_password, verify_password};
use crate::errors::AppError;
use pedidos_types::domain::user::NewUser;
use pedidos_types::ports::user_repository::UserRepository;

const CONFLICT: &str = "Email já cadastrado";
const UNAUTHORIZED: &str = "Credenciais inválidas";

pub struct AuthService<U: UserRepository> {
    users: U,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// One row inserted on success; duplicate emails surface as `Conflict`.
    pub async fn register(&self, email: String, password: String) -> Result<(), AppError> {
        let existing = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
        if existing.is_some() {
            return Err(AppError::Conflict(CONFLICT.into()));
        }

        if password.is_empty() {
            return Err(AppError::BadRequest("senha vazia".into()));
        }
        let password_hash = hash_password(&password)?;
        let user =
            NewUser::new(email, password_hash).map_err(|e| AppError::BadRequest(e.to_string()))?;

        // The store's unique constraint still backs the lookup above.
        self.users.insert(user).await.map_err(|e| match e {
            pedidos_types::ports::order_repository::RepoError::Conflict(_) => {
                AppError::Conflict(CONFLICT.into())
            }
            other => AppError::Internal(anyhow::anyhow!(other.to_string())),
        })?;
        Ok(())
    }

    /// One-shot credential check; no session or token is issued. An unknown
    /// email and a wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: String, password: String) -> Result<(), AppError> {
        let user = self
            .users
            .find_by_email(&email)
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
        match user {
            Some(u) if verify_password(&password, &u.password_hash) => Ok(()),
            _ => Err(AppError::Unauthorized(UNAUTHORIZED.into())),
        }
    }
}
