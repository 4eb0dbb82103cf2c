//! Errors raised inside the plugin. None of them is allowed to reach the host.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("{stage} shader build failed:\n{log}")]
    ShaderBuild { stage: &'static str, log: String },

    #[error("GL resource allocation failed: {0}")]
    GlResource(String),

    #[error("settings not readable at {}: {source}", path.display())]
    PersistenceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("settings not writable at {}: {source}", path.display())]
    PersistenceWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed value {value:?} for key `{key}`")]
    MalformedLine { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, FxError>;
