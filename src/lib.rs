pub(crate) mod api;
pub(crate) mod core;
pub(crate) mod routing;
pub(crate) mod schemas;

#[cfg(test)]
mod test_support;

use crate::core::{config::Settings, state::AppState, telemetry};
use crate::routing::RouteTable;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    telemetry::init_tracing(&settings)?;
    core::metrics::init(&settings)?;

    let routes = RouteTable::site()?;
    let state = AppState::new(settings, routes);

    for entry in state.routes().entries() {
        tracing::debug!(pattern = entry.pattern(), name = entry.name(), "registered route");
    }

    let app = api::router::router(state.clone());
    let listener = tokio::net::TcpListener::bind(state.settings().server_addr()).await?;

    tracing::info!(
        host = %state.settings().server_host(),
        port = state.settings().server_port(),
        environment = %state.settings().runtime().environment.as_str(),
        routes = state.routes().entries().len(),
        "Determined IELTS web service listening"
    );

    axum::serve(listener, app).with_graceful_shutdown(core::shutdown::shutdown_signal()).await?;

    Ok(())
}
