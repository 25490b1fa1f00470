//! Configuration-subsystem error type.

use thiserror::Error;

/// Errors produced by `rn-config`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A caller asked for a record type that does not exist in the
    /// configuration model.  Aborts the specific listing, not the build.
    #[error("unknown record type name {0:?}")]
    UnknownTypeName(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
