//! Error types for funcplot.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors surfaced by the plotting API.
#[derive(Error, Debug)]
pub enum PlotError {
    /// A required function or style was not supplied.
    #[error("Missing required argument: {0}")]
    NullArgument(&'static str),

    /// An argument was supplied but is unusable.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The function failed at the sample just before the interval start.
    #[error("Function evaluation failed at x = {x}: {source}")]
    SampleEvaluation {
        x: f64,
        #[source]
        source: EvalError,
    },

    /// The native window could not be created.
    #[error("Failed to initialize chart window: {0}")]
    RenderSurfaceInit(String),

    /// `attach` was called on a model that already has a renderer.
    #[error("A renderer is already attached")]
    AlreadyAttached,

    #[error("Failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl PlotError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<eframe::Error> for PlotError {
    fn from(err: eframe::Error) -> Self {
        Self::RenderSurfaceInit(err.to_string())
    }
}

/// Failure reported by a [`Function`](crate::Function) for a single x value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EvalError {
    message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
