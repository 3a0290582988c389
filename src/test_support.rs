use std::sync::{Arc, OnceLock};

use axum::Router;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api;
use crate::core::{config::Settings, state::AppState};
use crate::routing::RouteTable;

pub(crate) struct TestContext {
    pub(crate) state: AppState,
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

/// Serializes tests that touch process environment variables.
pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("IELTS_ENV", "test");
    std::env::set_var("IELTS_STRICT_CONFIG", "0");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
    std::env::remove_var("BACKEND_CORS_ORIGINS");
    std::env::remove_var("PROJECT_NAME");
}

pub(crate) async fn setup_test_context() -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");
    let routes = RouteTable::site().expect("route table");
    let state = AppState::new(settings, routes);
    let app = api::router::router(state.clone());

    TestContext { state, app, _guard: guard }
}
