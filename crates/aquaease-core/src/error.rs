//! Error Types

use thiserror::Error;

/// Result type alias for plan parsing
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised while parsing plan selections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Term is not one of `semester` / `full-year`
    #[error("Unknown subscription term: {0}")]
    UnknownTerm(String),
    
    /// Jug count is not 2, 3 or 4
    #[error("Invalid jug count: {0}")]
    InvalidJugCount(String),
    
    /// Step index outside the builder
    #[error("Invalid step index: {0}")]
    InvalidStep(usize),
}
