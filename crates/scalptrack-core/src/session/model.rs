//! Session and identity domain models.

use serde::{Deserialize, Serialize};

/// Identity record for the logged-in user, as returned by the server.
///
/// The shape is owned by the server; the client only relies on a unique
/// identifier plus a display name or email. Unknown fields are ignored so
/// that server-side additions do not break the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Unique identifier.
    #[serde(alias = "_id")]
    pub id: String,
    /// Email address, when the server includes one.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name, when the server includes one.
    #[serde(default)]
    pub name: Option<String>,
}

impl UserIdentity {
    /// Returns the best available display label for this user.
    pub fn display_label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// The client-held record of current authentication status.
///
/// `loading` is true only while the initial bootstrap probe is in flight;
/// it is cleared exactly once and never re-entered for the rest of the
/// process lifetime. There is deliberately no stored `is_authenticated`
/// flag: it is always derived from `user`, so the two cannot fall out of
/// sync.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Current identity, `None` when unauthenticated.
    pub user: Option<UserIdentity>,
    /// True only during the initial bootstrap probe.
    pub loading: bool,
}

impl Session {
    /// True iff an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Extracts a user identity from a JSON response body.
///
/// Servers have shipped the identity in more than one envelope, so this
/// tries an ordered fallback chain: the `data` field, then the `user`
/// field, then the raw body itself. The first candidate that parses as an
/// identity wins.
pub fn extract_identity(body: &serde_json::Value) -> Option<UserIdentity> {
    let candidates = [body.get("data"), body.get("user"), Some(body)];
    candidates
        .into_iter()
        .flatten()
        .find_map(|value| serde_json::from_value(value.clone()).ok())
}
