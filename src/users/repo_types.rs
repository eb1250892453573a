use serde::Serialize;
use sqlx::FromRow;

/// User as returned to clients and as read back from the `users` table.
/// The password column is never selected into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    /// Assigned by the store on insert.
    pub id: i64,
    pub name: String,
    pub email: String,
}
