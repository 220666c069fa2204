// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use futures::{FutureExt, Stream, StreamExt};
use parking_lot::Mutex;
use tether_core::StreamItem;

type LatestSource<T> = Pin<Box<dyn Stream<Item = StreamItem<T, ()>> + Send>>;

struct LatestState<T> {
    /// `None` once the source has failed or completed.
    source: Option<LatestSource<T>>,
    latest: Option<T>,
}

/// Latest element of a stream, pulled on demand.
///
/// Every read first drains the elements the source has ready, so a read made
/// right after the source emits observes that emission. The source is owned by
/// the slot: dropping the slot drops the stream and releases its subscription.
pub(crate) struct LatestSlot<T> {
    state: Mutex<LatestState<T>>,
}

impl<T> LatestSlot<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn subscribe<S, E>(source: S) -> Self
    where
        S: Stream<Item = StreamItem<T, E>> + Send + 'static,
        E: Send + 'static,
    {
        debug!("latest value: subscribed");
        let source = source.map(|item| item.map_err(|_| ())).boxed();

        let slot = Self {
            state: Mutex::new(LatestState {
                source: Some(source),
                latest: None,
            }),
        };
        // Capture what a cold source already has ready.
        slot.state.lock().drain();
        slot
    }

    pub(crate) fn get(&self) -> Option<T> {
        let mut state = self.state.lock();
        state.drain();
        state.latest.clone()
    }

    pub(crate) fn is_set(&self) -> bool {
        let mut state = self.state.lock();
        state.drain();
        state.latest.is_some()
    }
}

impl<T> LatestState<T> {
    /// Polls the source until it is pending, keeping the last element seen.
    ///
    /// A source that is always ready never lets this return.
    fn drain(&mut self) {
        while let Some(source) = self.source.as_mut() {
            match source.next().now_or_never() {
                None => break,
                Some(Some(StreamItem::Value(value))) => self.latest = Some(value),
                Some(Some(StreamItem::Error(()))) => {
                    debug!("latest value: source failed, keeping last value");
                    self.source = None;
                }
                Some(None) => {
                    debug!("latest value: source completed, keeping last value");
                    self.source = None;
                }
            }
        }
    }
}
