//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid arguments and configuration, catalog lookups, and layout strategies
//! that return the wrong number of cells.
use thiserror::Error;

use crate::exhibit::ExhibitId;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("duplicate exhibit '{id}'")]
    DuplicateExhibit { id: ExhibitId },

    #[error("unknown exhibit '{id}'")]
    UnknownExhibit { id: ExhibitId },

    #[error("layout produced {actual} positions, expected {expected}")]
    LayoutMismatch { expected: usize, actual: usize },
}
