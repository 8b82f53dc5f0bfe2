//! Composition root and the one-time session bootstrap probe.

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use scalptrack_client::{ApiGateway, AuthApi, LogApi, ReportApi, UserApi};
use scalptrack_core::config::ClientConfig;
use scalptrack_core::session::SessionStore;
use scalptrack_infrastructure::{ConfigStorage, TokenStorage};

use crate::app::AppState;

/// Builds the application state and resolves the initial session.
///
/// Runs exactly once, before any routing decision; the route guard waits on
/// the session's `loading` flag, so no guard can settle before the probe
/// does.
pub async fn bootstrap() -> Result<AppState> {
    let config_storage = ConfigStorage::new();
    let mut config = config_storage.get();
    if let Ok(base_url) = env::var("SCALPTRACK_BASE_URL") {
        config.base_url = base_url;
    }
    tracing::debug!("[Bootstrap] Using server {}", config.base_url);

    let tokens =
        Arc::new(TokenStorage::new().context("Failed to resolve the credential file path")?);

    let state = build_state(&config, tokens)?;
    run_probe(&state).await;
    Ok(state)
}

pub(crate) fn build_state(config: &ClientConfig, tokens: Arc<TokenStorage>) -> Result<AppState> {
    let gateway = Arc::new(ApiGateway::new(config, tokens)?);
    Ok(AppState {
        session: SessionStore::new(),
        auth: AuthApi::new(gateway.clone()),
        logs: LogApi::new(gateway.clone()),
        users: UserApi::new(gateway.clone()),
        reports: ReportApi::new(gateway),
    })
}

/// The one-time "who am I" probe.
///
/// Any failure means "not authenticated", the normal resting state for a
/// logged-out visitor, and is never surfaced as an error. The `loading`
/// flag is cleared exactly once, on both outcome paths.
async fn run_probe(state: &AppState) {
    state.session.set_loading(true);

    match state.auth.me().await {
        Ok(identity) => {
            tracing::info!("[Bootstrap] Resumed session for {}", identity.display_label());
            state.session.set_user(Some(identity));
        }
        Err(e) => {
            tracing::debug!("[Bootstrap] Identity probe failed, starting unauthenticated: {}", e);
            state.session.set_user(None);
        }
    }

    state.session.set_loading(false);
}
