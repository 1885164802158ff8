//! Solver settings read from a TOML file.
//!
//! ```toml
//! epsilon = 1e-8
//! max_iters = 50
//! ```

use std::{fs, path::Path};

use tangent_solvers::equation::Config;
use tracing::debug;

use crate::Error;

/// Reads and validates a solver config from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, has
/// unknown keys, or holds values that [`Config::new`] rejects.
pub fn load(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;

    let config = parse(&text).map_err(|source| Error::Config {
        path: path.to_owned(),
        source,
    })?;

    debug!(
        path = %path.display(),
        epsilon = config.epsilon(),
        max_iters = config.max_iters(),
        "loaded config"
    );
    Ok(config)
}

/// Parses a solver config from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not a valid config.
pub fn parse(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse("").expect("empty config is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_both_keys() {
        let config = parse("epsilon = 1e-9\nmax_iters = 7\n").expect("valid config");
        assert_relative_eq!(config.epsilon(), 1e-9);
        assert_eq!(config.max_iters(), 7);
    }

    #[test]
    fn missing_key_keeps_default() {
        let config = parse("max_iters = 3").expect("valid config");
        assert_relative_eq!(config.epsilon(), Config::default().epsilon());
        assert_eq!(config.max_iters(), 3);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(parse("epsilon = -1.0").is_err());
        assert!(parse("max_iters = 0").is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse("tolerance = 1e-6").is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load(Path::new("/nonexistent/tangent.toml")).expect_err("no such file");
        assert!(matches!(error, Error::Io { .. }));
    }
}
