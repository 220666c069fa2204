// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Tether
//!
//! Pair every element of an async stream with the *current* value of one or
//! more auxiliary references, without turning those references into streams.
//!
//! ## Overview
//!
//! - [`Value`] is a snapshot holder. Ask it for its current value at any time;
//!   the answer may be "nothing". It comes in five flavours:
//!   [`empty`](Value::empty), [`weak`](Value::weak), [`owned`](Value::owned),
//!   [`from_property`](Value::from_property) and
//!   [`from_latest`](Value::from_latest).
//! - [`with1`](With1Ext::with1) samples one or several holders for each
//!   element of a `StreamItem` stream and emits `(element, v1, ..., vN)` when
//!   all of them are present.
//! - [`TetherSubject`] and [`TetherProperty`] are the push ends used to feed
//!   pipelines and holders.
//!
//! ## Quick Start
//!
//! ```rust
//! use tether::prelude::*;
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Session {
//!     user: String,
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let requests = TetherSubject::<u32>::new();
//! let session = Arc::new(Session { user: "alice".to_string() });
//! let retries = TetherProperty::new(3u8);
//!
//! let mut enriched = requests
//!     .subscribe()
//!     .unwrap()
//!     .with1((Value::weak(&session), Value::from_property(retries.clone())));
//!
//! requests.next(1).unwrap();
//! let (id, session_now, retries_now) = enriched.next().await.unwrap().unwrap();
//! assert_eq!((id, session_now.user.as_str(), retries_now), (1, "alice", 3));
//! # }
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `tracing`: emit `tracing` events from the operator and holders

pub use tether_core::{
    IntoTetherError, Result, StreamItem, SubjectError, SubjectStream, TetherError,
    TetherProperty, TetherSubject,
};

pub use tether_stream::{Sample, Value, With1, With1Ext};

/// Prelude module for convenient imports
pub mod prelude {
    pub use tether_core::{StreamItem, TetherError, TetherProperty, TetherSubject};
    pub use tether_stream::{Value, With1Ext};
}
