//! Login view.

use scalptrack_core::error::Result;
use scalptrack_core::session::UserIdentity;

use crate::app::AppState;

pub async fn run(state: &AppState, email: &str) -> bool {
    let password = match rpassword::prompt_password("Password: ") {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Could not read password: {e}");
            return false;
        }
    };

    match login(state, email, &password).await {
        Ok(identity) => {
            println!("Login successful! Welcome, {}.", identity.display_label());
            true
        }
        Err(e) => {
            eprintln!("{}", e.user_message("Login failed. Please try again."));
            false
        }
    }
}

/// Establishes the session, then fetches the identity and stores it as a
/// total replace.
async fn login(state: &AppState, email: &str, password: &str) -> Result<UserIdentity> {
    state.auth.login(email, password).await?;
    let identity = state.auth.me().await?;
    state.session.set_user(Some(identity.clone()));
    Ok(identity)
}
