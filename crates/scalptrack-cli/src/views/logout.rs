//! Logout view.

use crate::app::AppState;

/// Ends the session.
///
/// Local cleanup is unconditional: the identity is dropped whether or not
/// the server-side logout call succeeded.
pub async fn run(state: &AppState) -> bool {
    if let Err(e) = state.auth.logout().await {
        tracing::debug!("[Logout] Server logout failed, clearing local state anyway: {}", e);
    }
    state.session.set_user(None);
    println!("Logged out.");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::bootstrap::build_state;
    use scalptrack_core::config::ClientConfig;
    use scalptrack_core::session::UserIdentity;
    use scalptrack_infrastructure::TokenStorage;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_logout_clears_identity_even_when_server_unreachable() {
        let temp_dir = TempDir::new().unwrap();
        let tokens = Arc::new(TokenStorage::with_path(
            temp_dir.path().join("credentials.json"),
        ));
        let config = ClientConfig {
            // Nothing listens here, so the server-side logout call fails.
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
        };
        let state = build_state(&config, tokens).unwrap();
        state.session.set_user(Some(UserIdentity {
            id: "1".to_string(),
            email: None,
            name: None,
        }));
        state.session.set_loading(false);

        assert!(run(&state).await);
        assert!(state.session.snapshot().user.is_none());
    }
}
