// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The `with1` operator: pairs each element with the current value of one or
//! more [`Value`](crate::Value) holders.
//!
//! # Behavior
//!
//! - **Element**: every holder is queried, in order, at the moment the element
//!   is polled. If all are present the tuple `(element, v1, ..., vN)` is
//!   emitted; otherwise the element is dropped. Nothing is buffered or
//!   retried.
//! - **Error**: forwarded immediately, then the stream ends. Holders are not
//!   queried.
//! - **Completion**: the stream ends.
//!
//! After an error or completion the stream stays terminated and never polls
//! the source again.
//!
//! Holders are shared handles: `with1` keeps a clone of each for as long as
//! the resulting stream lives, but never tears them down.
//!
//! # Examples
//!
//! ```rust
//! use tether_core::{StreamItem, TetherError};
//! use tether_stream::{Value, With1Ext};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let clicks = stream::iter(vec![StreamItem::<_, TetherError>::Value("save")]);
//!
//! let enriched: Vec<_> = clicks
//!     .with1((Value::owned("alice"), Value::owned(7)))
//!     .collect()
//!     .await;
//!
//! assert_eq!(enriched, vec![StreamItem::Value(("save", "alice", 7))]);
//! # }
//! ```

mod implementation;

pub use self::implementation::Sample;

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::stream::FusedStream;
use futures::Stream;
use pin_project::pin_project;
use tether_core::StreamItem;

/// Extension trait providing the `with1` operator.
pub trait With1Ext<T, E>: Stream<Item = StreamItem<T, E>> + Sized {
    /// Samples `values` for every element of this stream.
    ///
    /// `values` is either a single [`Value<U>`](crate::Value), producing
    /// `(T, U)`, or a tuple of up to four values, producing
    /// `(T, U1, ..., UN)`.
    ///
    /// # Errors
    ///
    /// The operator adds no error of its own. An error of this stream is
    /// forwarded unchanged and ends the resulting stream. A holder without a
    /// value is not an error: the element is silently skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tether_core::{StreamItem, TetherError};
    /// use tether_stream::{Value, With1Ext};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let source = stream::iter(vec![
    ///     StreamItem::<i32, TetherError>::Value(1),
    ///     StreamItem::Value(2),
    /// ]);
    ///
    /// let pairs: Vec<_> = source.with1(Value::owned('x')).collect().await;
    /// assert_eq!(pairs, vec![StreamItem::Value((1, 'x')), StreamItem::Value((2, 'x'))]);
    ///
    /// let source = stream::iter(vec![StreamItem::<i32, TetherError>::Value(1)]);
    /// let none: Vec<_> = source.with1(Value::<char>::empty()).collect().await;
    /// assert!(none.is_empty());
    /// # }
    /// ```
    fn with1<V>(self, values: V) -> With1<Self, V>
    where
        V: Sample<T>;
}

impl<S, T, E> With1Ext<T, E> for S
where
    S: Stream<Item = StreamItem<T, E>> + Sized,
{
    fn with1<V>(self, values: V) -> With1<Self, V>
    where
        V: Sample<T>,
    {
        With1::new(self, values)
    }
}

/// Stream returned by [`With1Ext::with1`].
#[pin_project]
#[must_use = "streams do nothing unless polled"]
#[derive(Debug)]
pub struct With1<S, V> {
    #[pin]
    stream: S,
    values: V,
    terminated: bool,
}

impl<S, V> With1<S, V> {
    pub(crate) fn new(stream: S, values: V) -> Self {
        Self {
            stream,
            values,
            terminated: false,
        }
    }
}

impl<S, V, T, E> Stream for With1<S, V>
where
    S: Stream<Item = StreamItem<T, E>>,
    V: Sample<T>,
{
    type Item = StreamItem<V::Output, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.terminated {
            return Poll::Ready(None);
        }

        loop {
            match ready!(this.stream.as_mut().poll_next(cx)) {
                Some(StreamItem::Value(element)) => {
                    if let Some(sampled) = this.values.sample(element) {
                        return Poll::Ready(Some(StreamItem::Value(sampled)));
                    }
                    trace!("with1: auxiliary value absent, element dropped");
                }
                Some(StreamItem::Error(error)) => {
                    *this.terminated = true;
                    return Poll::Ready(Some(StreamItem::Error(error)));
                }
                None => {
                    *this.terminated = true;
                    return Poll::Ready(None);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.terminated {
            (0, Some(0))
        } else {
            (0, self.stream.size_hint().1)
        }
    }
}

impl<S, V, T, E> FusedStream for With1<S, V>
where
    S: Stream<Item = StreamItem<T, E>>,
    V: Sample<T>,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}
