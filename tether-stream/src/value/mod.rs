// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Snapshot holders queried by [`with1`](crate::With1Ext::with1).
//!
//! A [`Value<T>`] answers one question, synchronously and without side effects
//! visible to the caller: *what is the current `T`, if any?* Where the answer
//! comes from depends on how the holder was built:
//!
//! | Constructor | Present when |
//! |-------------|--------------|
//! | [`Value::empty`] | never |
//! | [`Value::weak`] | the referenced `Arc` is still alive elsewhere |
//! | [`Value::owned`] | always |
//! | [`Value::from_property`] | always (reads the property's current value) |
//! | [`Value::from_latest`] | the source stream has emitted at least once |
//!
//! `Value` is a handle: cloning it shares the holder. Resources owned by the
//! holder (the source stream of [`Value::from_latest`]) are released when the
//! last handle is dropped.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use tether_stream::Value;
//!
//! let owned = Value::owned(3);
//! assert_eq!(owned.current_value(), Some(3));
//!
//! let session = Arc::new("session-42".to_string());
//! let weak = Value::weak(&session);
//! assert!(weak.is_present());
//!
//! drop(session);
//! assert_eq!(weak.current_value(), None);
//! ```

mod latest;
mod weak;

use self::latest::LatestSlot;
use self::weak::Upgrade;
use core::fmt;
use futures::Stream;
use std::sync::Arc;
use tether_core::{StreamItem, TetherProperty};

enum Source<T>
where
    T: Clone + Send + Sync + 'static,
{
    Empty,
    Weak(Box<dyn Upgrade<T>>),
    Owned(T),
    Property(TetherProperty<T>),
        Latest(LatestSlot<T>),
}

/// A snapshot holder producing the current value of an auxiliary reference.
///
/// See the [module documentation](self) for the available variants.
pub struct Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    source: Arc<Source<T>>,
}

impl<T> Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from_source(source: Source<T>) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// A holder that never has a value.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_source(Source::Empty)
    }

    /// A holder that owns `value` and always returns a clone of it.
    #[must_use]
    pub fn owned(value: T) -> Self {
        Self::from_source(Source::Owned(value))
    }

    /// A holder reading `property` on every query.
    ///
    /// No subscription is made: the property is itself the authority on its
    /// current value, so updates made after construction are observed.
    #[must_use]
    pub fn from_property(property: TetherProperty<T>) -> Self {
        Self::from_source(Source::Property(property))
    }

    /// A holder tracking the most recent element of `stream`.
    ///
    /// The holder owns `stream` and pulls from it whenever it is queried:
    /// every element the stream has ready is consumed and the last one is
    /// kept, so a query made right after the stream emits sees that element.
    /// A failure or the completion of `stream` ends the subscription but keeps
    /// the last value. Nothing is held until the first element arrives.
    ///
    /// No task is spawned and no runtime is required. The stream is dropped
    /// together with the last clone of the returned `Value`.
    #[must_use]
    pub fn from_latest<S, E>(stream: S) -> Self
    where
        S: Stream<Item = StreamItem<T, E>> + Send + 'static,
        E: Send + 'static,
    {
        Self::from_source(Source::Latest(LatestSlot::subscribe(stream)))
    }

    /// Returns the current snapshot, or `None` when the holder has no value.
    ///
    /// Never fails and never changes what later queries return.
    #[must_use]
    pub fn current_value(&self) -> Option<T> {
        match self.source.as_ref() {
            Source::Empty => None,
            Source::Weak(reference) => reference.upgrade(),
            Source::Owned(value) => Some(value.clone()),
            Source::Property(property) => Some(property.get()),
                        Source::Latest(slot) => slot.get(),
        }
    }

    /// Returns `true` if [`current_value`](Self::current_value) would return `Some`.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self.source.as_ref() {
            Source::Empty => false,
            Source::Weak(reference) => reference.is_alive(),
            Source::Owned(_) | Source::Property(_) => true,
                        Source::Latest(slot) => slot.is_set(),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self.source.as_ref() {
            Source::Empty => "Empty",
            Source::Weak(_) => "Weak",
            Source::Owned(_) => "Owned",
            Source::Property(_) => "Property",
                        Source::Latest(_) => "Latest",
        }
    }
}

impl<U> Value<Arc<U>>
where
    U: ?Sized + Send + Sync + 'static,
{
    /// A holder with a non-owning reference to `target`.
    ///
    /// The value is present exactly while some other `Arc` keeps `target`
    /// alive; the holder never extends its lifetime.
    #[must_use]
    pub fn weak(target: &Arc<U>) -> Self {
        Self::from_source(Source::Weak(Box::new(Arc::downgrade(target))))
    }
}

impl<T> Clone for Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T> Default for Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<TetherProperty<T>> for Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(property: TetherProperty<T>) -> Self {
        Self::from_property(property)
    }
}

impl<T> fmt::Debug for Value<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("variant", &self.variant_name())
            .field("present", &self.is_present())
            .finish()
    }
}
