//! Error types for the shape model
//!
//! [`AlbumError`] covers every way a color, shape, scene or archive operation
//! can refuse its input. All of them are non-destructive: the operation that
//! returns an error has not changed any state.

use std::fmt;

/// Errors raised by the color, shape, scene and archive operations
#[derive(Debug, Clone, PartialEq)]
pub enum AlbumError {
    /// Out-of-range numeric input or a blank name
    Validation { message: String },

    /// A shape with this name already exists in the scene
    DuplicateName { name: String },

    /// Operation requested against the wrong shape variant
    UnsupportedOperation { message: String },

    /// A snapshot with this id is already in the archive
    DuplicateId { id: String },

    /// Direct lookup of a shape name or snapshot id that does not exist
    NotFound { what: &'static str, key: String },
}

impl AlbumError {
    pub fn validation(message: impl Into<String>) -> Self {
        AlbumError::Validation {
            message: message.into(),
        }
    }

    pub fn unsupported(message: impl Into<String>) -> Self {
        AlbumError::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Short category name, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            AlbumError::Validation { .. } => "validation error",
            AlbumError::DuplicateName { .. } => "duplicate name",
            AlbumError::DuplicateId { .. } => "duplicate id",
            AlbumError::UnsupportedOperation { .. } => "unsupported operation",
            AlbumError::NotFound { .. } => "not found",
        }
    }
}

impl fmt::Display for AlbumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlbumError::Validation { message } => write!(f, "Invalid value: {}", message),
            AlbumError::DuplicateName { name } => {
                write!(f, "Shape with name '{}' already exists", name)
            }
            AlbumError::DuplicateId { id } => {
                write!(f, "Snapshot with id '{}' already exists", id)
            }
            AlbumError::UnsupportedOperation { message } => {
                write!(f, "Unsupported operation: {}", message)
            }
            AlbumError::NotFound { what, key } => write!(f, "No {} named '{}'", what, key),
        }
    }
}

impl std::error::Error for AlbumError {}
