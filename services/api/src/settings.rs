//! Service configuration
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional `directory.toml` in the working directory
//! 3. environment variables prefixed with `DIRECTORY_`, using `__` between
//!    nested keys (`DIRECTORY_JWT__SECRET`, `DIRECTORY_SERVER__PORT`)
//!
//! The JWT secret has no default and must be provided.

use auth::JwtConfig;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address to bind, as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `DIRECTORY_*` variables, with `__` between nested keys
fn environment() -> Environment {
    Environment::with_prefix("DIRECTORY")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

impl Settings {
    /// Load settings from `directory.toml` and the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name("directory").required(false))
                .add_source(environment()),
        )
    }

    /// Apply defaults on top of the given sources and deserialize
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("jwt.algorithm", "HS256")?
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{FileFormat, Map};

    fn from_toml(toml: &str) -> Result<Settings, ConfigError> {
        Settings::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn from_toml_and_env(toml: &str, vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Settings::from_builder(
            Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .add_source(environment().source(Some(vars))),
        )
    }

    #[test]
    fn defaults_fill_everything_but_the_secret() {
        let settings = from_toml(
            r#"
            [jwt]
            secret = "from-file"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.addr(), "0.0.0.0:3001");
        assert_eq!(settings.jwt.secret, "from-file");
        assert_eq!(settings.jwt.algorithm, "HS256");
    }

    #[test]
    fn file_values_override_defaults() {
        let settings = from_toml(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [jwt]
            secret = "s"
            algorithm = "HS512"
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.addr(), "127.0.0.1:8080");
        assert_eq!(settings.jwt.algorithm, "HS512");
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert!(from_toml("").is_err());
    }

    #[test]
    fn environment_supplies_nested_keys() {
        let settings = from_toml_and_env(
            "",
            &[
                ("DIRECTORY_JWT__SECRET", "from-env"),
                ("DIRECTORY_JWT__ALGORITHM", "HS384"),
                ("DIRECTORY_SERVER__PORT", "9090"),
            ],
        )
        .unwrap();

        assert_eq!(settings.jwt.secret, "from-env");
        assert_eq!(settings.jwt.algorithm, "HS384");
        assert_eq!(settings.server.port, 9090);
        assert_eq!(settings.server.host, "0.0.0.0");
    }

    #[test]
    fn environment_overrides_file() {
        let settings = from_toml_and_env(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [jwt]
            secret = "from-file"
            "#,
            &[
                ("DIRECTORY_JWT__SECRET", "from-env"),
                ("DIRECTORY_SERVER__PORT", "9090"),
            ],
        )
        .unwrap();

        assert_eq!(settings.jwt.secret, "from-env");
        assert_eq!(settings.server.addr(), "127.0.0.1:9090");
    }

    #[test]
    fn unprefixed_variables_are_ignored() {
        let result = from_toml_and_env("", &[("JWT__SECRET", "nope")]);
        assert!(result.is_err());
    }
}
