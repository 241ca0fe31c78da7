// Application configuration.
//
// Layers, last one wins:
// - built-in defaults
// - optional `case_information.toml` (or any format the `config` crate reads) in the working
//   directory
// - environment variables prefixed `CASE_INFORMATION__`, nested keys separated by `__`
//   (e.g. `CASE_INFORMATION__HTTP__PORT=9000`)

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "CASE_INFORMATION";
pub const CONFIG_FILE: &str = "case_information";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    pub default_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub listing: ListingConfig,
    pub export: ExportConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder().add_source(File::with_name(CONFIG_FILE).required(false)),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .set_default("http.host", "0.0.0.0")?
            .set_default("http.port", 8080)?
            .set_default("listing.default_limit", 10)?
            .set_default("export.directory", ".")?
            .set_default("log.filter", "info")?
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.http.host, self.http.port).parse()
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[rstest]
    fn it_should_fall_back_to_the_defaults() {
        let config = AppConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(config.http.port, 8080);
        assert_eq!(config.listing.default_limit, 10);
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.log.filter, "info");
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[rstest]
    fn it_should_let_a_file_override_the_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[http]\nport = 9090\n[listing]\ndefault_limit = 25").unwrap();

        let builder = Config::builder().add_source(File::from(file.path()));
        let config = AppConfig::from_builder(builder).unwrap();
        assert_eq!(config.http.port, 9090);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.listing.default_limit, 25);
    }
}
