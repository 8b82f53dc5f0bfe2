//! Daily log endpoints.

use std::sync::Arc;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use scalptrack_core::dashboard::{LastLogInfo, MonthlyCount, TrendPoint};
use scalptrack_core::error::{Result, ScalptrackError};
use scalptrack_core::log::LogDraft;

use crate::gateway::{ApiGateway, Envelope};

/// Typed wrapper for the `/logs/*` path family.
#[derive(Clone)]
pub struct LogApi {
    gateway: Arc<ApiGateway>,
}

impl LogApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Submits a daily log as multipart form data.
    ///
    /// Nested objects travel as JSON-stringified text parts; the photo, if
    /// any, is the single file part.
    pub async fn add(&self, draft: &LogDraft) -> Result<()> {
        let mut form = Form::new();
        for (name, value) in text_parts(draft)? {
            form = form.text(name, value);
        }

        if let Some(photo) = &draft.scalp_photo {
            let bytes = tokio::fs::read(photo).await?;
            let file_name = photo
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scalp-photo".to_string());
            form = form.part("scalpPhotos", Part::bytes(bytes).file_name(file_name));
        }

        let request = self
            .gateway
            .request(Method::POST, "/logs/add")
            .multipart(form);
        self.gateway.execute(request).await?;
        Ok(())
    }

    /// Number of entries logged in the current month.
    pub async fn monthly_count(&self) -> Result<MonthlyCount> {
        let request = self.gateway.request(Method::GET, "/logs/monthlycount");
        let envelope: Envelope<MonthlyCount> = self.gateway.execute_json(request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Average-score trend over the last 30 days.
    pub async fn symptom_trend(&self) -> Result<Vec<TrendPoint>> {
        let request = self.gateway.request(Method::GET, "/logs/symptomtrend");
        let envelope: Envelope<Vec<TrendPoint>> = self.gateway.execute_json(request).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    /// Date of the most recent entry, if any exist.
    pub async fn last_log_info(&self) -> Result<Option<LastLogInfo>> {
        let request = self.gateway.request(Method::GET, "/logs/lastloginfo");
        let envelope: Envelope<LastLogInfo> = self.gateway.execute_json(request).await?;
        Ok(envelope.data)
    }
}

/// The text parts of the multipart submission, in wire order.
fn text_parts(draft: &LogDraft) -> Result<Vec<(&'static str, String)>> {
    let to_json = |value: serde_json::Result<String>| value.map_err(ScalptrackError::from);
    Ok(vec![
        ("symptoms", to_json(serde_json::to_string(&draft.symptoms))?),
        (
            "symptomTiming",
            to_json(serde_json::to_string(&draft.timing))?,
        ),
        (
            "productsUsed",
            to_json(serde_json::to_string(&draft.products))?,
        ),
        (
            "haircareRoutine",
            to_json(serde_json::to_string(&draft.routine))?,
        ),
        ("stressLevel", draft.effective_stress_level().to_string()),
        (
            "dietLifestyle",
            to_json(serde_json::to_string(&draft.diet))?,
        ),
        ("personalNotes", draft.personal_notes.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_parts_order_and_names() {
        let parts = text_parts(&LogDraft::default()).unwrap();
        let names: Vec<&str> = parts.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "symptoms",
                "symptomTiming",
                "productsUsed",
                "haircareRoutine",
                "stressLevel",
                "dietLifestyle",
                "personalNotes",
            ]
        );
    }

    #[test]
    fn test_nested_parts_are_json_strings() {
        let mut draft = LogDraft::default();
        draft.symptoms.itching = 6;
        draft.routine.was_wash_day = true;

        let parts = text_parts(&draft).unwrap();
        let symptoms: serde_json::Value =
            serde_json::from_str(&parts[0].1).expect("symptoms part must be JSON");
        assert_eq!(symptoms["itching"], 6);

        let routine: serde_json::Value = serde_json::from_str(&parts[3].1).unwrap();
        assert_eq!(routine["wasWashDay"], true);
    }

    #[test]
    fn test_stress_level_is_plain_text() {
        let mut draft = LogDraft::default();
        draft.stress_level = 0;
        let parts = text_parts(&draft).unwrap();
        // Unset stress submits as the mild default, not zero.
        assert_eq!(parts[4], ("stressLevel", "1".to_string()));
    }
}
