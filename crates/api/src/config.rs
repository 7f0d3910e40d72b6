use anyhow::Context;
use config::{Config, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Start-up settings, read from `COURSEPLAN__<SECTION>__<KEY>` environment variables.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    pub jobs: JobSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CatalogSettings {
    /// JSON array of courses served by `/v1/courses` and used by `/v1/plan`.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct JobSettings {
    /// How long a finished job stays pollable.
    pub ttl_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".into(),
                port: 8080,
                timeout_secs: 10,
            },
            catalog: CatalogSettings::default(),
            jobs: JobSettings { ttl_secs: 600 },
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(Environment::with_prefix("COURSEPLAN"))
    }

    fn load(env: Environment) -> anyhow::Result<Self> {
        let d = Settings::default();
        Config::builder()
            .set_default("server.host", d.server.host)?
            .set_default("server.port", u64::from(d.server.port))?
            .set_default("server.timeout_secs", d.server.timeout_secs)?
            .set_default("jobs.ttl_secs", d.jobs.ttl_secs)?
            .add_source(env.separator("__").ignore_empty(true))
            .build()
            .context("reading COURSEPLAN__* settings")?
            .try_deserialize()
            .context("invalid COURSEPLAN__* settings")
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        let ServerSettings { host, port, .. } = &self.server;
        format!("{host}:{port}")
            .parse()
            .with_context(|| format!("invalid listen addr {host}:{port}"))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    pub fn job_ttl(&self) -> Duration {
        Duration::from_secs(self.jobs.ttl_secs)
    }
}
