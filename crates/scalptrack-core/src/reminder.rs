//! Reminder models and time formatting.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Reminder settings sent to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    /// Time of day in 24-hour `HH:MM` form.
    pub reminder_time: String,
    /// Whether to also send an email at the reminder time.
    pub email_reminder: bool,
}

/// Server confirmation of a persisted reminder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderConfirmation {
    #[serde(default)]
    pub reminder_time: Option<String>,
    #[serde(default)]
    pub email_reminder: bool,
    /// Next instant the reminder will fire, computed server-side.
    #[serde(default)]
    pub next_reminder: Option<String>,
}

/// Formats a 24-hour `HH:MM` string as 12-hour with AM/PM for display.
///
/// Returns the input unchanged when it does not parse as a time of day.
pub fn to_am_pm(time24: &str) -> String {
    match NaiveTime::parse_from_str(time24, "%H:%M") {
        Ok(time) => time.format("%I:%M %p").to_string(),
        Err(_) => time24.to_string(),
    }
}
