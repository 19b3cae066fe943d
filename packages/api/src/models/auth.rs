use serde::{Deserialize, Serialize};
use session::{Role, UserProfile};

/// Successful login response: the bearer token plus the profile that the
/// session store persists alongside it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Registration payload. Accounts start unapproved; the backend rejects
/// logins until an admin approves them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_parses_token_and_member_profile() {
        let token: Token = serde_json::from_str(
            r#"{
                "access_token": "T",
                "token_type": "bearer",
                "user": {
                    "id": "1",
                    "email": "a@b.com",
                    "full_name": "A",
                    "role": "member",
                    "date_joined": "2025-01-01T00:00:00+00:00",
                    "is_active": true,
                    "is_approved": true
                }
            }"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "T");
        assert_eq!(token.user.role, Role::Member);
        assert_eq!(token.user.full_name, "A");
    }

    #[test]
    fn register_payload_omits_a_missing_phone() {
        let new_user = NewUser {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            full_name: "A".to_string(),
            role: Role::Trainer,
            phone: None,
        };
        let json = serde_json::to_value(&new_user).unwrap();
        assert_eq!(json["role"], "trainer");
        assert!(json.get("phone").is_none());
    }
}
