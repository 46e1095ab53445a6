//! Error types for repository operations.

use thiserror::Error;

use crate::spec::Id;

/// Errors that can occur when mutating a repository.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// `update` found no stored item with the given id, or the item had none.
    #[error("entity not found for update (id: {})", display_id(.id))]
    NotFound { id: Option<Id> },
}

fn display_id(id: &Option<Id>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => "unset".to_string(),
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
