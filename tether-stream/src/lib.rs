// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sampling auxiliary values onto a primary stream.
//!
//! Many pipelines need "the current X" next to every event: the logged-in
//! user next to each click, the active configuration next to each request.
//! Turning X into a full co-stream (`combine_latest`, `with_latest_from`)
//! couples the pipeline to X's emissions and forces X to be a stream at all.
//! This crate takes the lighter route:
//!
//! - **[`Value`]**: a snapshot holder that can be asked for the current value
//!   of an auxiliary reference, which may be empty, a weak reference, an
//!   owned value, a [`TetherProperty`](tether_core::TetherProperty) or the
//!   latest element of another stream.
//! - **[`with1`](With1Ext::with1)**: a stream operator that, for each element
//!   of the primary stream, queries one or more holders and emits
//!   `(element, v1, ..., vN)`, or silently skips the element when a holder
//!   has nothing to offer.
//!
//! # Operator semantics at a glance
//!
//! | Upstream event | Holders all present | Some holder absent |
//! |----------------|---------------------|--------------------|
//! | value `e` | emit `(e, v1, ..., vN)` | skip `e` |
//! | error `x` | emit `x`, end | emit `x`, end |
//! | end | end | end |
//!
//! # Example
//!
//! ```rust
//! use tether_core::{StreamItem, TetherProperty, TetherSubject};
//! use tether_stream::{Value, With1Ext};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let clicks = TetherSubject::<&'static str>::new();
//! let user = TetherProperty::new("guest");
//!
//! let mut enriched = clicks
//!     .subscribe()
//!     .unwrap()
//!     .with1(Value::from_property(user.clone()));
//!
//! clicks.next("home").unwrap();
//! assert_eq!(enriched.next().await, Some(StreamItem::Value(("home", "guest"))));
//!
//! user.set("alice");
//! clicks.next("settings").unwrap();
//! assert_eq!(enriched.next().await, Some(StreamItem::Value(("settings", "alice"))));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod prelude;
pub mod value;
pub mod with1;

pub use value::Value;
pub use with1::{Sample, With1, With1Ext};
