use std::sync::Arc;

use crate::core::config::Settings;
use crate::routing::RouteTable;

/// Shared application state: settings and the route table, both immutable
/// after startup. Cloning is an `Arc` bump.
#[derive(Clone)]
pub(crate) struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    settings: Settings,
    routes: RouteTable,
}

impl AppState {
    pub(crate) fn new(settings: Settings, routes: RouteTable) -> Self {
        Self { inner: Arc::new(InnerState { settings, routes }) }
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.inner.settings
    }

    pub(crate) fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }
}
