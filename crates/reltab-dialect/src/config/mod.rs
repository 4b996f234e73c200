//! Configuration loading and validation.

mod types;
mod validation;

pub use types::*;

use crate::drivers::DialectImpl;
use crate::error::Result;
use crate::render::RenderEnv;
use std::path::Path;

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Resolve the configured dialect.
    pub fn dialect(&self) -> Result<DialectImpl> {
        DialectImpl::from_name(&self.dialect)
    }

    /// Render environment selected by `runtime`.
    pub fn render_env(&self) -> RenderEnv {
        match self.runtime {
            RuntimeMode::Auto => RenderEnv::detect(),
            RuntimeMode::Server => RenderEnv::SERVER,
            RuntimeMode::Browser => RenderEnv::BROWSER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SqlDialect;
    use std::io::Write;

    #[test]
    fn test_from_yaml_full() {
        let config = Config::from_yaml("dialect: sqlite\nruntime: browser\n").unwrap();
        assert_eq!(config.dialect().unwrap().dialect_name(), "sqlite");
        assert_eq!(config.render_env(), RenderEnv::BROWSER);
    }

    #[test]
    fn test_from_yaml_defaults() {
        let config = Config::from_yaml("runtime: server\n").unwrap();
        assert_eq!(config.dialect, "duckdb");
        assert_eq!(config.render_env(), RenderEnv::SERVER);
    }

    #[test]
    fn test_from_yaml_rejects_unknown_dialect() {
        assert!(Config::from_yaml("dialect: oracle\n").is_err());
    }

    #[test]
    fn test_from_yaml_rejects_bad_runtime() {
        assert!(Config::from_yaml("runtime: mainframe\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dialect: duck").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.dialect().unwrap().dialect_name(), "duckdb");
        assert_eq!(config.runtime, RuntimeMode::Auto);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load("definitely/not/here.yaml").unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
