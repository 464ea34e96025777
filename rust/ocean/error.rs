//! Error types for ocean evaluation and mesh deformation

#[cfg(feature = "python")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python")]
use pyo3::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OceanError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Vertex count mismatch: expected {expected}, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },

    #[error("Positions must have shape ({rows}, 3), got ({actual_rows}, {actual_cols})")]
    ShapeMismatch {
        rows: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Position cache error: {0}")]
    Cache(#[from] serde_json::Error),
}

#[cfg(feature = "python")]
impl From<OceanError> for PyErr {
    fn from(err: OceanError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OceanError>;
