//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::user_name::UserName;

/// A registered user
///
/// The blogs a user owns are not stored here; they are derived by
/// querying blogs by owner.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique login handle, immutable once set
    pub user_name: UserName,
    /// Display name
    pub name: String,
    /// Opaque credential hash (PHC string)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, name: impl Into<String>, password_hash: String) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            name: name.into().trim().to_string(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}
