#![allow(dead_code)]

use axum_test::TestServer;
use smartlinks::application::services::HubSettings;
use smartlinks::domain::entities::DeviceClass;
use smartlinks::infrastructure::seed::{sample_analytics, sample_links};
use smartlinks::routes::app_router;
use smartlinks::state::AppState;

/// State over the three sample links and their click counters.
pub fn create_test_state() -> AppState {
    create_test_state_with(HubSettings::default())
}

pub fn create_test_state_with(settings: HubSettings) -> AppState {
    AppState::new(sample_links(), sample_analytics(), settings, false)
}

/// Full application router without rate limiting.
pub fn make_server(state: AppState) -> TestServer {
    TestServer::new(app_router(state, false)).unwrap()
}

/// Hub settings with User-Agent detection turned on.
pub fn detecting_settings() -> HubSettings {
    HubSettings {
        default_device: DeviceClass::Desktop,
        detect_device: true,
        ..HubSettings::default()
    }
}

/// Opens a session directly and returns the `Cookie` header value for it.
pub async fn session_cookie(state: &AppState) -> String {
    let token = state.session_service.login().await.unwrap();
    format!("session={token}")
}
