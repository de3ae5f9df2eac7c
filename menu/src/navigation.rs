//! Circular prev/next navigation over the dish id sequence.
//!
//! The id sequence defines adjacency: the first dish's previous neighbor is
//! the last dish and the last dish's next neighbor is the first. Resolution
//! over an empty sequence or an unknown id is an error rather than an
//! out-of-range index.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Identifier sequence is empty")]
    EmptySequence,

    #[error("Identifier not found: {0}")]
    IdentifierNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Neighbors {
    pub prev: String,
    pub next: String,
}

pub fn resolve(sequence: &[String], current: &str) -> Result<Neighbors, NavigationError> {
    if sequence.is_empty() {
        return Err(NavigationError::EmptySequence);
    }

    let index = sequence
        .iter()
        .position(|id| id == current)
        .ok_or_else(|| NavigationError::IdentifierNotFound(current.to_string()))?;

    let len = sequence.len();

    Ok(Neighbors {
        prev: sequence[(len + index - 1) % len].clone(),
        next: sequence[(len + index + 1) % len].clone(),
    })
}
