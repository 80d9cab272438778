use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A flag the server has not computed yet (`null`) counts as unset
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Login form payload. Built per submit, never persisted.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub phone_number: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("phone_number", &self.phone_number)
            .field("password", &"***")
            .finish()
    }
}

/// Profile as reported by the server.
///
/// Only the completion flags are interpreted; every other field is kept in
/// `extra` so the persisted record matches what the server sent.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_false")]
    pub profile_set: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub organization_set: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub provider_rate_set: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub availability_set: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    fn extra_str(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn first_name(&self) -> Option<&str> {
        self.extra_str("first_name")
    }

    pub fn email(&self) -> Option<&str> {
        self.extra_str("email")
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.extra_str("phone_number")
    }

    /// "First Last", falling back to whichever part is present
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name(), self.extra_str("last_name")) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => None,
        }
    }
}

/// Successful login/registration response, persisted verbatim as the session
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResult {
    /// Bearer token
    pub access: String,
    pub user: User,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AuthResult {
    /// `Authorization` header value for authenticated calls
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access)
    }

    /// Refresh token, if the server issued one. Kept in `extra` so an explicit
    /// `null` is stored back exactly as received.
    pub fn refresh(&self) -> Option<&str> {
        self.extra.get("refresh").and_then(Value::as_str)
    }
}
