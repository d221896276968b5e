use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::identifiable::Identifiable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Rep,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Rep => write!(f, "rep"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "rep" => Ok(UserRole::Rep),
            _ => Err(()),
        }
    }
}

/// # Documentation
/// An account of the sales team. The customer store does not check representative names
/// against this directory; it is used to list representatives and for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: i64,
    pub username: HeaplessString<64>,
    pub display_name: HeaplessString<256>,
    pub role: UserRole,
}

impl Identifiable for UserModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}
