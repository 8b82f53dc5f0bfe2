//! Route guard: access control for protected views.

use super::model::Session;

/// The navigable views of the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
    AddLog,
    SetReminder,
    GenerateReport,
}

impl Route {
    /// Whether this route requires an authenticated session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }

    /// Path string for display and redirect messages.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
            Route::AddLog => "/add-log",
            Route::SetReminder => "/setreminder",
            Route::GenerateReport => "/generate-report",
        }
    }
}

/// Outcome of a guard evaluation for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Authentication status is still unknown; show a neutral waiting
    /// state. Neither render the view nor redirect yet.
    Pending,
    /// Render the requested view.
    Allowed,
    /// Redirect to `redirect`, replacing the attempted route in history so
    /// back-navigation cannot loop into the guarded page.
    Denied { redirect: Route },
}

/// Decides whether `route` may render given the current session.
///
/// This is a pure function of the session and is evaluated fresh on every
/// navigation, not once: a logout while a protected view is active flips
/// the next evaluation to `Denied`.
pub fn evaluate(route: Route, session: &Session) -> GuardDecision {
    if !route.requires_auth() {
        return GuardDecision::Allowed;
    }
    if session.loading {
        return GuardDecision::Pending;
    }
    if session.is_authenticated() {
        GuardDecision::Allowed
    } else {
        GuardDecision::Denied {
            redirect: Route::Login,
        }
    }
}
