// @file: src/utils/config.rs
// @description: Runtime configuration for the proxy client and the probe binary.
// @author: LAS.

use serde::Deserialize;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, Environment};
use std::time::Duration;
use crate::connectors::kaivest::ClientSettings;

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,

    // Proxy
    pub proxy_base_url: String,

    // Transport Timeouts (seconds)
    pub request_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub connect_timeout_secs: u64,

    // Probe
    pub probe_symbol_limit: usize,
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    /// Defaults, then an optional `config.*` file, then `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Self::defaults()?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        builder.build()?.try_deserialize()
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            idle_timeout: Duration::from_secs(self.idle_timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }

    //
    // INTERNAL HELPERS
    //

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("proxy_base_url", "http://localhost:8027")?
            .set_default("request_timeout_secs", 30)?
            .set_default("idle_timeout_secs", 120)?
            .set_default("connect_timeout_secs", 10)?
            .set_default("probe_symbol_limit", 100)
    }
}
