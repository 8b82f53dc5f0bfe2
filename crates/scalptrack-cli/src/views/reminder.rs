//! Set-reminder view.

use scalptrack_core::reminder::{ReminderRequest, to_am_pm};

use crate::app::AppState;

pub async fn run(state: &AppState, time: &str, email_reminder: bool) -> bool {
    if time.trim().is_empty() {
        eprintln!("Please select a reminder time");
        return false;
    }

    let request = ReminderRequest {
        reminder_time: time.to_string(),
        email_reminder,
    };

    match state.users.set_reminder(&request).await {
        Ok(confirmation) => {
            let confirmed = confirmation
                .reminder_time
                .as_deref()
                .unwrap_or(time);
            println!("Reminder set for: {}", to_am_pm(confirmed));
            println!(
                "Email reminder: {}",
                if confirmation.email_reminder { "On" } else { "Off" }
            );
            if let Some(next) = &confirmation.next_reminder {
                println!("Next reminder: {next}");
            }
            true
        }
        Err(e) => {
            eprintln!(
                "{}",
                e.user_message("Something went wrong. Please try again.")
            );
            false
        }
    }
}
