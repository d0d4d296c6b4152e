//! Error type shared by all gradient operations

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CmapError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CmapError {
    /// No gradient with this name is registered
    #[error("unknown gradient: {name}")]
    UnknownGradient { name: String },

    #[error("gradient '{name}' is already registered")]
    AlreadyRegistered { name: String },

    #[error("unrecognized value for 'loc': {0}")]
    InvalidLocation(f64),

    /// The transition would leave no samples of the original gradient
    #[error("nblend ({nblend}) must be smaller than ncolor ({ncolor})")]
    BlendTooWide { nblend: usize, ncolor: usize },

    /// A mid blend would split the gradient into an empty half
    #[error("blend split at {nmid} leaves an empty half of {norig} samples")]
    EmptySplit { nmid: usize, norig: usize },

    #[error("sample count must be at least 1")]
    InvalidSampleCount,

    #[error("gradient '{name}' has no samples")]
    EmptyGradient { name: String },

    #[error("invalid segment data: {0}")]
    InvalidSegments(String),
}
