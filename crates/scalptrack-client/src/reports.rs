//! Report generation endpoint.

use std::sync::Arc;

use reqwest::Method;
use scalptrack_core::error::Result;
use scalptrack_core::report::{ReportPayload, classify_report_payload};

use crate::gateway::ApiGateway;

/// Typed wrapper for the `/reports/*` path family.
#[derive(Clone)]
pub struct ReportApi {
    gateway: Arc<ApiGateway>,
}

impl ReportApi {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches the 30-day report document.
    ///
    /// The server answers with an octet stream either way, so the bytes are
    /// sniffed for an embedded JSON error before being treated as a
    /// document. A non-2xx status with a JSON body is already mapped to a
    /// validation error by the gateway.
    pub async fn generate(&self) -> Result<ReportPayload> {
        let request = self.gateway.request(Method::GET, "/reports/generate");
        let response = self.gateway.execute(request).await?;
        let bytes = response.bytes().await.map_err(scalptrack_core::ScalptrackError::from)?;
        Ok(classify_report_payload(bytes.to_vec()))
    }
}
