use scalptrack_client::{AuthApi, LogApi, ReportApi, UserApi};
use scalptrack_core::session::SessionStore;

/// Application state shared across the feature views.
pub struct AppState {
    pub session: SessionStore,
    pub auth: AuthApi,
    pub logs: LogApi,
    pub users: UserApi,
    pub reports: ReportApi,
}
