// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observable property: a mutable value paired with a stream of its updates.
//!
//! A [`TetherProperty`] always holds a value. Reading it never waits, and every
//! stream obtained from [`subscribe`](TetherProperty::subscribe) starts with the
//! current value followed by each later change.
//!
//! ```
//! use tether_core::{StreamItem, TetherProperty};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let theme = TetherProperty::new("light".to_string());
//! let mut changes = theme.subscribe().unwrap();
//!
//! theme.set("dark".to_string());
//!
//! assert_eq!(theme.get(), "dark");
//! assert_eq!(changes.next().await, Some(StreamItem::Value("light".to_string())));
//! assert_eq!(changes.next().await, Some(StreamItem::Value("dark".to_string())));
//! # }
//! ```

use crate::tether_subject::{SubjectStream, TetherSubject};
use crate::{StreamItem, SubjectError};
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;

struct PropertyState<T>
where
    T: Clone + Send + Sync + 'static,
{
    value: T,
    subject: TetherSubject<T>,
}

/// A thread-safe observable value.
///
/// Clones share the same underlying value and subscribers.
pub struct TetherProperty<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Arc<Mutex<PropertyState<T>>>,
}

impl<T> TetherProperty<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a property holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(PropertyState {
                value: initial,
                subject: TetherSubject::new(),
            })),
        }
    }

    /// Returns a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.state.lock().value.clone()
    }

    /// Replaces the current value and notifies subscribers.
    ///
    /// A closed property still stores the value; only notifications stop.
    pub fn set(&self, value: T) {
        let mut state = self.state.lock();
        state.value = value.clone();
        if state.subject.next(value).is_err() {
            warn!("property closed, update stored without notification");
        }
    }

    /// Applies `f` to a copy of the current value, then stores and notifies the result.
    ///
    /// The lock is not held while `f` runs, so `f` may read this property.
    /// Two concurrent updates are not serialized: the last store wins.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut value = self.get();
        f(&mut value);
        self.set(value);
    }

    /// Subscribe to the property.
    ///
    /// The returned stream yields the current value first, then every change.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the property has been closed.
    pub fn subscribe(&self) -> Result<SubjectStream<T>, SubjectError> {
        let state = self.state.lock();
        let changes = state.subject.subscribe()?;
        let current = stream::once(futures::future::ready(StreamItem::Value(
            state.value.clone(),
        )));
        Ok(Box::pin(current.chain(changes)))
    }

    /// Completes every subscriber stream. The value remains readable.
    pub fn close(&self) {
        self.state.lock().subject.close();
    }

    /// Returns `true` once [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().subject.is_closed()
    }

    /// Returns the number of change subscribers currently registered.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().subject.subscriber_count()
    }
}

impl<T> Clone for TetherProperty<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for TetherProperty<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> core::fmt::Debug for TetherProperty<T>
where
    T: Clone + core::fmt::Debug + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TetherProperty")
            .field("value", &self.state.lock().value)
            .finish()
    }
}
