use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::ParseIntError;
use std::str::FromStr;

/// Type-safe identifier for Users.
///
/// Signed, because path parameters such as `-1` are valid integers that simply
/// never match a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A record in the user directory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// The `id` is assigned by the actor on create and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub full_name: String,
    pub address: String,
    pub age: i64,
    pub coin: i64,
}

impl User {
    /// Creates a new User instance with an explicit ID (seed data, fixtures).
    pub fn new(
        id: i64,
        full_name: impl Into<String>,
        address: impl Into<String>,
        age: i64,
        coin: i64,
    ) -> Self {
        Self {
            id: UserId(id),
            full_name: full_name.into(),
            address: address.into(),
            age,
            coin,
        }
    }
}

/// Request body for both create and update.
///
/// Absent fields decode to their zero value. `id` is ignored on create; on
/// update it must be positive but is otherwise unrelated to the path ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub age: i64,
    pub coin: i64,
}

/// The two records every fresh directory starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "John Nguyen", "80 Paster", 40, 1000),
        User::new(2, "Ana Tran", "80 Lusic", 21, 3000),
    ]
}
