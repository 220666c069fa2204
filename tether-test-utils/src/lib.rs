// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the tether workspace.
//!
//! This crate is meant for tests only:
//!
//! - [`test_channel`] / [`test_channel_with_errors`]: a sender paired with the
//!   `StreamItem` stream it feeds
//! - [`helpers`]: timeout-based stream assertions
//! - [`person`]: a small fixture type, handy as the target of weak references
//! - [`TestError`]: a comparable failure type
//!
//! # Example
//!
//! ```rust
//! use tether_test_utils::{assert_no_element_emitted, test_channel, unwrap_stream};
//! use tether_core::StreamItem;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel::<i32>();
//! assert_no_element_emitted(&mut stream, 10).await;
//!
//! tx.send(1).unwrap();
//! assert_eq!(unwrap_stream(&mut stream, 100).await, StreamItem::Value(1));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod person;
pub mod test_error;

use futures::{Stream, StreamExt};
use tether_core::{StreamItem, TetherError};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value};
pub use person::Person;
pub use test_error::TestError;

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
///
/// Dropping the sender completes the stream.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T, TetherError>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T, E>` for testing error propagation.
///
/// ```rust
/// use tether_test_utils::{test_channel_with_errors, unwrap_stream, TestError};
/// use tether_core::StreamItem;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, mut stream) = test_channel_with_errors::<i32, TestError>();
///
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(TestError::Error)).unwrap();
///
/// assert_eq!(unwrap_stream(&mut stream, 100).await, StreamItem::Value(42));
/// assert!(unwrap_stream(&mut stream, 100).await.is_error());
/// # }
/// ```
pub fn test_channel_with_errors<T: Send + 'static, E: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T, E>>,
    impl Stream<Item = StreamItem<T, E>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx);
    (tx, stream)
}
