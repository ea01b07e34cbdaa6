/// In-memory user directory
///
/// The service has no user store; it knows one demo account.
use std::collections::HashMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::password::{hash_password, verify_password};
use crate::error::Result;

pub const DEMO_USERNAME: &str = "johndoe";
pub const DEMO_PASSWORD: &str = "secret";

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub disabled: Option<bool>,
}

impl User {
    pub fn is_active(&self) -> bool {
        !self.disabled.unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding only the demo account
    pub fn demo() -> Result<Self> {
        let mut directory = Self::new();
        directory.insert(
            User {
                username: DEMO_USERNAME.to_string(),
                email: Some("johndoe@example.com".to_string()),
                full_name: Some("John Doe".to_string()),
                disabled: Some(false),
            },
            DEMO_PASSWORD,
        )?;
        Ok(directory)
    }

    pub fn insert(&mut self, user: User, password: &str) -> Result<()> {
        let password_hash = hash_password(password)?;
        self.users.insert(
            user.username.clone(),
            UserRecord {
                user,
                password_hash,
            },
        );
        Ok(())
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username).map(|record| &record.user)
    }

    /// Look up `username` and check its password.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        let record = self.users.get(username)?;
        verify_password(password, &record.password_hash).then_some(&record.user)
    }
}
