use serde::{Deserialize, Serialize};

/// Stored account record. Created through registration and read-only from
/// the login flow's perspective: the authorizer never mutates or deletes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub created_ts: i64,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}
