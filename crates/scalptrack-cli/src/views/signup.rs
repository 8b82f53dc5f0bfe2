//! Signup view.

use std::sync::LazyLock;

use regex::Regex;
use scalptrack_core::error::Result;
use scalptrack_core::session::UserIdentity;

use crate::app::AppState;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern"));

pub async fn run(state: &AppState, name: &str, email: &str) -> bool {
    let password = match rpassword::prompt_password("Password: ") {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Could not read password: {e}");
            return false;
        }
    };
    let confirm = match rpassword::prompt_password("Confirm password: ") {
        Ok(confirm) => confirm,
        Err(e) => {
            eprintln!("Could not read password: {e}");
            return false;
        }
    };

    if let Err(message) = validate(name, email, &password, &confirm) {
        eprintln!("{message}");
        return false;
    }

    match signup(state, name, email, &password).await {
        Ok(identity) => {
            println!(
                "Registration successful! Welcome, {}.",
                identity.display_label()
            );
            true
        }
        Err(e) => {
            eprintln!("{}", e.user_message("Registration failed. Please try again."));
            false
        }
    }
}

/// Local validation, applied before anything is sent to the server.
fn validate(name: &str, email: &str, password: &str, confirm: &str) -> std::result::Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err("Please enter a valid email address".to_string());
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

async fn signup(state: &AppState, name: &str, email: &str, password: &str) -> Result<UserIdentity> {
    state.auth.register(name, email, password).await?;
    let identity = state.auth.me().await?;
    state.session.set_user(Some(identity.clone()));
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_missing_name() {
        assert_eq!(
            validate("  ", "a@b.com", "secret1", "secret1"),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_rejects_malformed_email() {
        assert_eq!(
            validate("Dana", "not-an-email", "secret1", "secret1"),
            Err("Please enter a valid email address".to_string())
        );
    }

    #[test]
    fn test_rejects_short_password() {
        assert_eq!(
            validate("Dana", "a@b.com", "abc", "abc"),
            Err("Password must be at least 6 characters long".to_string())
        );
    }

    #[test]
    fn test_rejects_mismatched_confirmation() {
        assert_eq!(
            validate("Dana", "a@b.com", "secret1", "secret2"),
            Err("Passwords do not match".to_string())
        );
    }

    #[test]
    fn test_accepts_valid_input() {
        assert!(validate("Dana", "a@b.com", "secret1", "secret1").is_ok());
    }
}
