use serde::{Deserialize, Serialize};

/// Account role attached to every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Member,
    Trainer,
    Admin,
    /// Role string this client does not recognize. Parsing it instead of
    /// failing keeps a stored session loadable after a server-side role
    /// vocabulary change.
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Trainer => "trainer",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

/// Profile of the signed-in user, as returned by login and persisted
/// client-side between reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_the_three_known_values() {
        assert_eq!(serde_json::from_str::<Role>("\"member\"").unwrap(), Role::Member);
        assert_eq!(serde_json::from_str::<Role>("\"trainer\"").unwrap(), Role::Trainer);
        assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    }

    #[test]
    fn unrecognized_role_falls_back_instead_of_failing() {
        assert_eq!(serde_json::from_str::<Role>("\"owner\"").unwrap(), Role::Unknown);
    }

    #[test]
    fn profile_parses_without_phone() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":"u1","email":"a@b.com","full_name":"A","role":"member"}"#,
        )
        .unwrap();
        assert_eq!(profile.role, Role::Member);
        assert_eq!(profile.phone, None);
    }
}
