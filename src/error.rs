//! Error types

use thiserror::Error;

/// Errors raised while loading a texture or model
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Asset not found: {path}")]
    NotFound { path: String },
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode {path}: {message}")]
    Decode { path: String, message: String },
    #[error("Unsupported asset format: {path}")]
    UnsupportedFormat { path: String },
}

impl LoadError {
    pub fn path(&self) -> &str {
        match self {
            LoadError::NotFound { path }
            | LoadError::Io { path, .. }
            | LoadError::Decode { path, .. }
            | LoadError::UnsupportedFormat { path } => path,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised by the demo runtime
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Unknown demo '{0}'")]
    UnknownDemo(String),
    #[error("Event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
}
