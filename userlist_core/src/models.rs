use serde::{Deserialize, Serialize};

pub type Id = i64;

/// A single user as returned by the upstream `/users` endpoint.
///
/// All display fields are taken verbatim, `updated_at` included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Id,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub updated_at: String,
}
