use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Installs the Prometheus recorder when enabled in settings. A no-op
/// otherwise; `render` then returns `None`.
pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROMETHEUS.set(handle);
    Ok(())
}

pub(crate) fn render() -> Option<String> {
    PROMETHEUS.get().map(|handle| handle.render())
}

/// Counts one page view, labeled by the page handler that served it. Both
/// routes backed by the blogs handler count toward the same label.
pub(crate) fn record_page_view(page: &'static str) {
    metrics::counter!("page_views_total", "page" => page).increment(1);
}
