/// A registered user. The hash is an argon2 PHC string and must never leave
/// the service layer; the struct deliberately does not implement `Serialize`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// A user pending insertion; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(email: String, password_hash: String) -> anyhow::Result<Self> {
        if email.trim().is_empty() {
            anyhow::bail!("email vazio");
        }
        if password_hash.is_empty() {
            anyhow::bail!("hash de senha vazio");
        }
        Ok(Self {
            email,
            password_hash,
        })
    }

    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
