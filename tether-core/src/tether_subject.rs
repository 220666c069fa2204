// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Push end of a tether pipeline.
//!
//! Every item handed to a [`TetherSubject`] is copied to each stream returned
//! by [`subscribe`](TetherSubject::subscribe) so far. Streams subscribed later
//! start from the next item. Channels are unbounded, clones share subscribers,
//! and an error is the last item a subscriber sees.
//!
//! ```
//! use tether_core::{StreamItem, TetherError, TetherSubject};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sensor = TetherSubject::<f32>::new();
//! let mut display = sensor.subscribe().unwrap();
//!
//! sensor.next(21.5).unwrap();
//! sensor.error(TetherError::stream_error("sensor unplugged")).unwrap();
//!
//! assert_eq!(display.next().await, Some(StreamItem::Value(21.5)));
//! assert!(display.next().await.unwrap().is_error());
//! assert!(display.next().await.is_none());
//! assert!(sensor.is_closed());
//! # }
//! ```

use crate::{StreamItem, SubjectError, TetherError};
use async_channel::Sender;
use core::pin::Pin;
use futures::Stream;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Boxed stream handed out by [`TetherSubject::subscribe`].
pub type SubjectStream<T, E = TetherError> =
    Pin<Box<dyn Stream<Item = StreamItem<T, E>> + Send + Sync + 'static>>;

struct SubjectState<T, E> {
    closed: bool,
    senders: Vec<Sender<StreamItem<T, E>>>,
}

/// Hot broadcast subject. Values and errors are delivered in send order to
/// every current subscriber.
pub struct TetherSubject<T, E = TetherError>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    state: Arc<Mutex<SubjectState<T, E>>>,
}

impl<T, E> TetherSubject<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Open subject, no subscribers yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    fn open_state(&self) -> Result<MutexGuard<'_, SubjectState<T, E>>, SubjectError> {
        let state = self.state.lock();
        if state.closed {
            Err(SubjectError::Closed)
        } else {
            Ok(state)
        }
    }

    /// New stream of every item sent from now on.
    ///
    /// # Errors
    ///
    /// `SubjectError::Closed` once the subject is closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T, E>, SubjectError> {
        let (tx, rx) = async_channel::unbounded();
        self.open_state()?.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Broadcasts `item`, pruning subscribers whose stream was dropped.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, item: StreamItem<T, E>) -> Result<(), SubjectError> {
        self.open_state()?
            .senders
            .retain(|tx| tx.try_send(item.clone()).is_ok());
        Ok(())
    }

    /// Shorthand for `send(StreamItem::Value(value))`.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(StreamItem::Value(value))
    }

    /// Send an error to all subscribers and terminate the subject.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject was already closed.
    pub fn error(&self, err: E) -> Result<(), SubjectError> {
        let result = self.send(StreamItem::Error(err));
        self.close();
        result
    }

    /// Ends every subscriber stream once its pending items are consumed.
    ///
    /// After closing, `send()`, `error()` and `subscribe()` return
    /// `SubjectError::Closed`. Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Registered subscribers. A dropped stream still counts until the next send.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T, E> Default for TetherSubject<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Clone for TetherSubject<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}
