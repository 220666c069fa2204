// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the commonly used traits and types.
//!
//! ```rust
//! use tether_stream::prelude::*;
//! use futures::stream;
//!
//! let source = stream::iter(vec![StreamItem::<i32, TetherError>::Value(1)]);
//! let _sampled = source.with1(Value::owned("ctx"));
//! ```

pub use crate::value::Value;
pub use crate::with1::{Sample, With1, With1Ext};
pub use tether_core::{StreamItem, TetherError, TetherProperty, TetherSubject};
