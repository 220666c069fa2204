// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::Debug;
use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tether_core::StreamItem;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` yields nothing, neither an item nor its end, within `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream produces an item or ends before the timeout.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!("Unexpected emission, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Waits up to `timeout_ms` for the next item of `stream` and returns it.
///
/// # Panics
///
/// Panics if the stream ends or the timeout expires.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Stream ended, expected an item"),
        Err(_) => panic!("Timed out after {timeout_ms}ms waiting for an item"),
    }
}

/// Extracts the value of a polled `StreamItem`.
///
/// # Panics
///
/// Panics on `None` or on a `StreamItem::Error`.
pub fn unwrap_value<T, E: Debug>(item: Option<StreamItem<T, E>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(error)) => panic!("Expected a value, got error: {error:?}"),
        None => panic!("Expected a value, stream ended"),
    }
}

/// Asserts that `stream` ends within `timeout_ms`.
///
/// # Panics
///
/// Panics if the stream yields an item or is still open after the timeout.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end, got an item"),
        Err(_) => panic!("Stream still open after {timeout_ms}ms"),
    }
}
