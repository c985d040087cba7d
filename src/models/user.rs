//! User account, profile (role) and session record types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::member::Member;

/// Role name granting full administration rights
pub const ADMIN_ROLE: &str = "ADMIN";

/// User profile (role) as returned by the API.
///
/// The server calls the role name `nom_p`; the stored session uses `roleName`.
/// Both spellings are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_profil: Option<i64>,
    #[serde(rename = "roleName", alias = "nom_p")]
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_p: Option<String>,
}

/// User account as returned by the API, and the session record kept on disk
/// once logged in.
///
/// Fields this client does not know about are kept in `extra` so that a stored
/// session reads back exactly as it was written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_user: Option<i64>,
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profil_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mbre_id: Option<i64>,
    #[serde(
        default,
        rename = "profile",
        alias = "profil",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membre: Option<Member>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Role name of the user's profile, if any
    pub fn role_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.role_name.as_str())
    }

    /// Short label used in headers: `login • ROLE`
    pub fn badge(&self) -> String {
        format!("{} • {}", self.login, self.role_name().unwrap_or("-"))
    }
}

/// Whether `user` holds the given role. An absent user holds no role.
pub fn has_role(user: Option<&User>, role_name: &str) -> bool {
    user.and_then(User::role_name) == Some(role_name)
}

/// Whether `user` is an administrator
pub fn is_admin(user: Option<&User>) -> bool {
    has_role(user, ADMIN_ROLE)
}

/// Login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
}

/// Create profile request
#[derive(Debug, Clone, Serialize)]
pub struct CreateProfile {
    pub nom_p: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_p: Option<String>,
}

/// Update profile request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom_p: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_p: Option<String>,
}

/// Create account request
#[derive(Debug, Clone, Serialize)]
pub struct CreateAccount {
    pub login: String,
    pub password: String,
    pub profil_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbre_id: Option<i64>,
}

/// Update account request (only present fields are changed)
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profil_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mbre_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_with_role(role: &str) -> User {
        serde_json::from_value(json!({
            "login": "admin",
            "profile": { "roleName": role }
        }))
        .unwrap()
    }

    #[test]
    fn test_has_role() {
        let admin = user_with_role("ADMIN");
        let reader = user_with_role("LECTEUR");

        assert!(has_role(Some(&admin), "ADMIN"));
        assert!(is_admin(Some(&admin)));
        assert!(!has_role(Some(&reader), "ADMIN"));
        assert!(has_role(Some(&reader), "LECTEUR"));
        assert!(!has_role(None, "ADMIN"));
    }

    #[test]
    fn test_user_without_profile_has_no_role() {
        let user: User = serde_json::from_value(json!({ "login": "guest" })).unwrap();
        assert!(!has_role(Some(&user), "ADMIN"));
        assert_eq!(user.badge(), "guest • -");
    }

    #[test]
    fn test_server_field_names_are_accepted() {
        let user: User = serde_json::from_value(json!({
            "id_user": 1,
            "login": "admin",
            "profil_id": 1,
            "mbre_id": null,
            "profil": { "id_profil": 1, "nom_p": "ADMIN", "description_p": null },
            "membre": null
        }))
        .unwrap();

        assert_eq!(user.role_name(), Some("ADMIN"));
        assert_eq!(user.id_user, Some(1));
        assert!(user.extra.is_empty());
    }

    #[test]
    fn test_unknown_fields_survive_a_round_trip() {
        let user: User = serde_json::from_value(json!({
            "login": "admin",
            "profile": { "roleName": "ADMIN" },
            "theme": "dark"
        }))
        .unwrap();

        let stored = serde_json::to_value(&user).unwrap();
        assert_eq!(stored["theme"], "dark");
        assert_eq!(stored["profile"]["roleName"], "ADMIN");

        let reloaded: User = serde_json::from_value(stored).unwrap();
        assert_eq!(reloaded, user);
    }
}
