//! Error types for the editor

use thiserror::Error;
use webshape_model::{BlockId, ModelError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Commit dispatched by a handle that does not own the open session
    #[error("Pointer up without an active drag session")]
    NoActiveDrag,

    /// Commit target no longer in the document
    #[error("Drag target {0} is missing from the document")]
    TargetMissing(BlockId),
}
