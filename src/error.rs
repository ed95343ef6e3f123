use ndarray_linalg::error::LinalgError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DgError>;

/// Errors raised while setting up or advancing the discretisation.
#[derive(Error, Debug)]
pub enum DgError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two interpolation nodes of one element coincide.
    #[error("element {ielem} has coincident nodes {inode} and {jnode}")]
    DuplicateNodes {
        ielem: usize,
        inode: usize,
        jnode: usize,
    },

    #[error("element {ielem} nodes are not strictly increasing")]
    NonIncreasingNodes { ielem: usize },

    #[error("element {ielem} has zero length")]
    ZeroLengthElement { ielem: usize },

    #[error("singular matrix: {0}")]
    SingularMatrix(#[from] LinalgError),

    /// The Roe linearisation has no real, distinct characteristic speeds.
    #[error("non-physical state at interface {interface}: average height {h_avg}")]
    NonPhysicalState { interface: usize, h_avg: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

impl DgError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
