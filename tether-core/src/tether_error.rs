// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the tether workspace.
//!
//! [`TetherError`] is the default failure type carried by
//! [`StreamItem`](crate::StreamItem). Operators never inspect it: a failure
//! produced upstream reaches downstream unchanged.
//!
//! # Examples
//!
//! ```
//! use tether_core::{TetherError, Result};
//!
//! fn process_data() -> Result<()> {
//!     Err(TetherError::stream_error("Stream not ready"))
//! }
//!
//! assert!(process_data().is_err());
//! ```

/// Root error type for tether streams.
#[derive(Debug, thiserror::Error)]
pub enum TetherError {
    /// Stream processing encountered an error
    ///
    /// This is a general error for stream operations that don't fit
    /// other specific categories.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong during stream processing
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps errors produced by user code so they can travel through a
    /// tether stream.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TetherError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Returns the context string of a `StreamProcessingError`, if any.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::StreamProcessingError { context } => Some(context),
            Self::UserError(_) => None,
        }
    }
}

/// Specialized Result type for tether operations
pub type Result<T> = std::result::Result<T, TetherError>;

/// Extension trait for converting errors into `TetherError`
///
/// Implemented for every `std::error::Error + Send + Sync + 'static`.
pub trait IntoTetherError {
    /// Convert this error into a `TetherError`
    fn into_tether(self) -> TetherError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoTetherError for E {
    fn into_tether(self) -> TetherError {
        TetherError::user_error(self)
    }
}

impl Clone for TetherError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source can't be cloned, keep its rendering
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {}", e),
            },
        }
    }
}
