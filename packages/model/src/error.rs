//! Error types for the block model

use crate::BlockId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The id generator handed out an id that is already in the tree.
    #[error("Id collision: {0} is already present in the document")]
    IdCollision(BlockId),

    /// A document was assembled from blocks sharing an id.
    #[error("Duplicate block id: {0}")]
    DuplicateId(BlockId),
}

pub type ModelResult<T> = Result<T, ModelError>;
