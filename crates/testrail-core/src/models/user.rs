use serde::{Deserialize, Serialize};

use crate::ids::{RoleId, UserId};

/// User account
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub role_id: Option<RoleId>,
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_a_user() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Joe Adams",
            "email": "jadams@example.com",
            "is_active": true,
            "role_id": 3,
            "role": "Tester",
        }))
        .unwrap();
        assert_eq!(user.email, "jadams@example.com");
        assert_eq!(user.role_id, Some(3));
    }

    #[test]
    fn role_fields_may_be_missing() {
        let user: User = serde_json::from_value(json!({
            "id": 2,
            "name": "API Bot",
            "email": "bot@example.com",
            "is_active": true,
        }))
        .unwrap();
        assert_eq!(user.role, None);
    }
}
