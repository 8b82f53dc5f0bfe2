//! Navigation with guard enforcement.

use scalptrack_core::session::{GuardDecision, Route, SessionStore, evaluate};

/// Applies the route guard to a navigation attempt.
///
/// Returns true when the requested view may run. The guard is evaluated
/// against a fresh snapshot on every call, never cached.
pub fn navigate(session: &SessionStore, route: Route) -> bool {
    match evaluate(route, &session.snapshot()) {
        GuardDecision::Allowed => true,
        GuardDecision::Pending => {
            // Status unknown: show a neutral waiting state, don't redirect.
            println!("Checking session...");
            false
        }
        GuardDecision::Denied { redirect } => {
            eprintln!(
                "Please log in to continue (scalptrack login --email <you@example.com>)."
            );
            tracing::info!(
                "[Router] {} denied, redirecting to {}",
                route.path(),
                redirect.path()
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalptrack_core::session::UserIdentity;

    #[test]
    fn test_protected_route_denied_when_logged_out() {
        let session = SessionStore::new();
        session.set_loading(false);
        assert!(!navigate(&session, Route::Dashboard));
    }

    #[test]
    fn test_protected_route_allowed_when_logged_in() {
        let session = SessionStore::new();
        session.set_user(Some(UserIdentity {
            id: "1".to_string(),
            email: Some("a@b.com".to_string()),
            name: None,
        }));
        session.set_loading(false);
        assert!(navigate(&session, Route::Dashboard));
    }

    #[test]
    fn test_public_route_allowed_before_bootstrap_settles() {
        let session = SessionStore::new();
        assert!(navigate(&session, Route::Login));
    }

    #[test]
    fn test_protected_route_waits_while_loading() {
        let session = SessionStore::new();
        assert!(!navigate(&session, Route::Dashboard));
    }
}
