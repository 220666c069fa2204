// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::tether_error::TetherError;
use core::fmt::Debug;

/// Element or failure of a tether stream.
///
/// This enum carries both channels of a tether stream through a single
/// `futures::Stream`: elements travel as `Value`, the failure of the
/// producing stream travels as `Error`. The end of the stream (`None`)
/// is the completion event.
///
/// The failure type `E` is opaque to the operators of this workspace and is
/// passed through unchanged. It defaults to [`TetherError`].
#[derive(Debug, Clone)]
pub enum StreamItem<T, E = TetherError> {
    /// An element
    Value(T),
    /// The failure of the producing stream; nothing follows it
    Error(E),
}

impl<T: PartialEq, E> PartialEq for StreamItem<T, E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StreamItem::Value(a), StreamItem::Value(b)) => a == b,
            _ => false, // Errors are never equal
        }
    }
}

impl<T: Eq, E> Eq for StreamItem<T, E> {}

impl<T, E> StreamItem<T, E> {
    /// `true` for an element.
    pub const fn is_value(&self) -> bool {
        matches!(self, StreamItem::Value(_))
    }

    /// `true` for a failure.
    pub const fn is_error(&self) -> bool {
        matches!(self, StreamItem::Error(_))
    }

    /// Converts from `StreamItem<T, E>` to `Option<T>`, discarding errors.
    pub fn ok(self) -> Option<T> {
        match self {
            StreamItem::Value(v) => Some(v),
            StreamItem::Error(_) => None,
        }
    }

    /// Converts from `StreamItem<T, E>` to `Option<E>`, discarding values.
    pub fn err(self) -> Option<E> {
        match self {
            StreamItem::Value(_) => None,
            StreamItem::Error(e) => Some(e),
        }
    }

    /// Transforms the element, leaving a failure as is.
    pub fn map<U, F>(self, f: F) -> StreamItem<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(f(v)),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// Maps the error of a `StreamItem<T, E>`, leaving values untouched.
    pub fn map_err<F2, F>(self, f: F) -> StreamItem<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            StreamItem::Value(v) => StreamItem::Value(v),
            StreamItem::Error(e) => StreamItem::Error(f(e)),
        }
    }

    /// Chains a step that may itself fail. A failure short-circuits.
    pub fn and_then<U, F>(self, f: F) -> StreamItem<U, E>
    where
        F: FnOnce(T) -> StreamItem<U, E>,
    {
        match self {
            StreamItem::Value(v) => f(v),
            StreamItem::Error(e) => StreamItem::Error(e),
        }
    }

    /// The element.
    ///
    /// # Panics
    ///
    /// On a failure, with its `Debug` rendering.
    pub fn unwrap(self) -> T
    where
        E: Debug,
    {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => {
                panic!("called `StreamItem::unwrap()` on an `Error` value: {:?}", e)
            }
        }
    }

    /// The element.
    ///
    /// # Panics
    ///
    /// On a failure, with `msg` followed by the failure.
    pub fn expect(self, msg: &str) -> T
    where
        E: Debug,
    {
        match self {
            StreamItem::Value(v) => v,
            StreamItem::Error(e) => panic!("{}: {:?}", msg, e),
        }
    }
}

impl<T, E> From<Result<T, E>> for StreamItem<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => StreamItem::Value(v),
            Err(e) => StreamItem::Error(e),
        }
    }
}

impl<T, E> From<StreamItem<T, E>> for Result<T, E> {
    fn from(item: StreamItem<T, E>) -> Self {
        match item {
            StreamItem::Value(v) => Ok(v),
            StreamItem::Error(e) => Err(e),
        }
    }
}
