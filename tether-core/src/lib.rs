// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by the tether crates.
//!
//! - [`StreamItem`]: the value/error envelope every tether stream yields
//! - [`TetherError`] and [`SubjectError`]: the error types
//! - [`TetherSubject`]: hot broadcast subject, the push end of a pipeline
//! - [`TetherProperty`]: observable value that is always present

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod stream_item;
pub mod subject_error;
pub mod tether_error;
pub mod tether_property;
pub mod tether_subject;

pub use self::stream_item::StreamItem;
pub use self::subject_error::SubjectError;
pub use self::tether_error::{IntoTetherError, Result, TetherError};
pub use self::tether_property::TetherProperty;
pub use self::tether_subject::{SubjectStream, TetherSubject};
