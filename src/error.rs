//! Error types for icon generation

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the configuration, surfaced before any output is written
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required configuration field `{0}`")]
    MissingField(&'static str),

    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid attribute pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Failure of the optimizer engine on a single document
#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("invalid SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("<text> elements are not supported, convert text to paths first")]
    Text,
}

/// Why a single icon file was skipped. Never fatal for the run.
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("not an .svg file")]
    NotSvg,

    #[error("file name sanitizes to an empty identifier")]
    EmptyName,

    #[error("optimized icon has no drawable content")]
    EmptyContent,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Optimize(#[from] OptimizeError),
}

/// Conditions that abort a generation run
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no SVG files found in {}", dir.display())]
    DiscoveryEmpty { dir: PathBuf },

    #[error("all {attempted} SVG files failed to process")]
    AllFilesFailed { attempted: usize },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
