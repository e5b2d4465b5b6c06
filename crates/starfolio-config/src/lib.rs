//! Configuration for the starfolio page.
//!
//! Settings live in `config.toml` under the platform configuration
//! directory. Every field has a default, so a missing file or a partial
//! file both work; values are validated after parsing.

mod error;
mod paths;
mod schema;

pub use error::ConfigError;
pub use paths::{default_config_path, log_file_path};
pub use schema::Config;

use std::path::Path;

/// Load the config from `path`, or from the default location when `None`.
///
/// A file that does not exist yields the defaults.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                tracing::warn!("no config directory on this platform, using defaults");
                return Ok(Config::default());
            }
        },
    };

    if !path.exists() {
        tracing::info!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config = Config::from_toml(&content)?;
    tracing::info!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn file_is_read_and_parsed() {
        let file = config_file("star_count = 42\n");
        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.star_count, 42);
        assert_eq!(config.typewriter_speed_ms, 80);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let file = config_file("star_count = 0\n");
        assert!(matches!(load(Some(file.path())), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = config_file("star_count = [\n");
        assert!(matches!(load(Some(file.path())), Err(ConfigError::Parse(_))));
    }
}
