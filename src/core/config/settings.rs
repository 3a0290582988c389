use super::parsing::{
    env_optional, env_or_default, parse_bool, parse_cors_origins, parse_environment,
};
use super::types::{
    ApiSettings, ConfigError, CorsSettings, RuntimeSettings, ServerHost, ServerPort,
    ServerSettings, Settings, TelemetrySettings,
};

impl Settings {
    pub(crate) fn load() -> Result<Self, ConfigError> {
        let host = env_or_default("IELTS_HOST", "0.0.0.0");
        let port = env_or_default("IELTS_PORT", "8000");

        let environment =
            parse_environment(env_optional("IELTS_ENV").or_else(|| env_optional("ENVIRONMENT")));
        let strict_config =
            env_optional("IELTS_STRICT_CONFIG").map(|value| parse_bool(&value)).unwrap_or(false)
                || environment.is_production();

        let project_name = env_or_default("PROJECT_NAME", "Determined IELTS");
        let version = env_or_default("VERSION", env!("CARGO_PKG_VERSION"));

        let cors_env = env_optional("BACKEND_CORS_ORIGINS");
        // Dev defaults must never leak into a strict deployment.
        if strict_config && cors_env.is_none() {
            return Err(ConfigError::MissingRequired("BACKEND_CORS_ORIGINS"));
        }
        let cors_origins = parse_cors_origins(cors_env)?;

        let log_level = env_or_default("IELTS_LOG_LEVEL", "info");
        let json = env_optional("IELTS_LOG_JSON").map(|value| parse_bool(&value)).unwrap_or(false);
        let prometheus_enabled =
            env_optional("PROMETHEUS_ENABLED").map(|value| parse_bool(&value)).unwrap_or(false);

        Ok(Self {
            server: ServerSettings {
                host: ServerHost::parse(host)?,
                port: ServerPort::parse(port)?,
            },
            runtime: RuntimeSettings { environment, strict_config },
            api: ApiSettings { project_name, version },
            cors: CorsSettings { origins: cors_origins },
            telemetry: TelemetrySettings { log_level, json, prometheus_enabled },
        })
    }

    pub(crate) fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host.0, self.server.port.0)
    }

    pub(crate) fn server_host(&self) -> &str {
        &self.server.host.0
    }

    pub(crate) fn server_port(&self) -> u16 {
        self.server.port.0
    }

    pub(crate) fn api(&self) -> &ApiSettings {
        &self.api
    }

    pub(crate) fn cors(&self) -> &CorsSettings {
        &self.cors
    }

    pub(crate) fn telemetry(&self) -> &TelemetrySettings {
        &self.telemetry
    }

    pub(crate) fn runtime(&self) -> &RuntimeSettings {
        &self.runtime
    }
}
