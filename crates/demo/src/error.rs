use std::path::PathBuf;

use tangent_solvers::equation;
use thiserror::Error;

/// Errors that can occur while running the demo.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown task `{0}`, expected one of: all, log, sine")]
    UnknownTask(String),

    #[error("usage: tangent-demo [all|log|sine] [config.toml]")]
    Usage,

    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{method} method failed on {task}")]
    Solve {
        task: &'static str,
        method: &'static str,
        #[source]
        source: equation::Error,
    },
}
