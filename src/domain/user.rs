use serde::{Deserialize, Serialize};

/// Access level of a shop account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    SubAdmin,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        let json = serde_json::to_string(&UserRole::SubAdmin).unwrap();
        assert_eq!(json, "\"SUB_ADMIN\"");

        let role: UserRole = serde_json::from_str("\"STAFF\"").unwrap();
        assert_eq!(role, UserRole::Staff);
    }
}
