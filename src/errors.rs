use std::result;
use thiserror::Error;

#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Index {index} out of range for collection of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("Collection is empty")]
    EmptyContainer,
}

pub type CollectionResult<T> = result::Result<T, CollectionError>;
