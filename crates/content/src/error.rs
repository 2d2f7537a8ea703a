// ABOUTME: Error types for content loading and validation.
// ABOUTME: Provides ContentError enum with Io, Parse, Invalid, and DuplicateSlug variants.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading content records.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading a content file or directory failed.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The front matter of a record could not be parsed.
    #[error("failed to parse {id}: {message}")]
    Parse { id: String, message: String },

    /// The record parsed but is missing required fields.
    #[error("invalid record {id}: {message}")]
    Invalid { id: String, message: String },

    /// Two records in one collection resolved to the same slug.
    #[error("duplicate slug {slug:?} in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: String,
        second: String,
    },
}

impl ContentError {
    /// Creates an Io error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ContentError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a Parse error from an underlying YAML or format error.
    pub fn parse(id: impl Into<String>, err: impl fmt::Display) -> Self {
        ContentError::Parse {
            id: id.into(),
            message: err.to_string(),
        }
    }

    /// Creates an Invalid error with a custom message.
    pub fn invalid(id: impl Into<String>, msg: impl Into<String>) -> Self {
        ContentError::Invalid {
            id: id.into(),
            message: msg.into(),
        }
    }
}
