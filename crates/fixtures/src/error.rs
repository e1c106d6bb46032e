//! Error types for fixture generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// Caller-supplied parameters cannot produce a valid document.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Event generation needs a pool (nodes or edges) the graph does not have.
    #[error("Graph has no {0}, cannot generate events that reference them")]
    EmptyGraph(&'static str),

    /// The edge rejection-sampling loop hit its attempt budget.
    ///
    /// Unreachable for parameters that pass validation; reported instead of
    /// looping if an inconsistency slips through.
    #[error("Edge sampling exhausted after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
}
