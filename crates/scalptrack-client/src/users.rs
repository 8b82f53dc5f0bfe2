//! User settings endpoints.

use std::sync::Arc;

use reqwest::Method;
use scalptrack_core::error::{Result, ScalptrackError};
use scalptrack_core::reminder::{ReminderConfirmation, ReminderRequest};

use crate::gateway::{ApiGateway, Envelope};

/// Typed wrapper for the `/user/*` path family.
#[derive(Clone)]
pub struct UserApi {
    gateway: Arc<ApiGateway>,
}

impl UserApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Persists the daily reminder time and email opt-in.
    ///
    /// The server can answer 200 with `success: false` and a message; that
    /// is surfaced as a validation error like any other rejected input.
    pub async fn set_reminder(&self, reminder: &ReminderRequest) -> Result<ReminderConfirmation> {
        let request = self
            .gateway
            .request(Method::PUT, "/user/setreminder")
            .json(reminder);
        let envelope: Envelope<ReminderConfirmation> = self.gateway.execute_json(request).await?;

        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "Failed to set reminder".to_string());
            return Err(ScalptrackError::validation(message));
        }

        Ok(envelope.data.unwrap_or_default())
    }
}
