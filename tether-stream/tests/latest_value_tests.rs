// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Tests for `Value::from_latest`, the holder that pulls the latest element of a stream.

use futures::stream;
use tether_core::{StreamItem, TetherError, TetherProperty, TetherSubject};
use tether_stream::Value;
use tether_test_utils::{test_channel, test_channel_with_errors, TestError};

#[tokio::test]
async fn test_latest_value_absent_before_first_emission() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<String>::new();

    // Act
    let latest = Value::from_latest(subject.subscribe()?);

    // Assert
    assert_eq!(latest.current_value(), None, "there's no value yet");
    assert!(!latest.is_present());

    Ok(())
}

#[tokio::test]
async fn test_latest_value_tracks_most_recent_emission() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<String>::new();
    let latest = Value::from_latest(subject.subscribe()?);

    // Act & Assert
    subject.next("Old Value".to_string())?;
    assert_eq!(latest.current_value(), Some("Old Value".to_string()));

    subject.next("New Value".to_string())?;
    assert_eq!(latest.current_value(), Some("New Value".to_string()));

    Ok(())
}

#[tokio::test]
async fn test_latest_value_available_outside_scope() -> anyhow::Result<()> {
    // Arrange
    let latest = {
        let subject = TetherSubject::<String>::new();
        let latest = Value::from_latest(subject.subscribe()?);
        subject.next("Old Value".to_string())?;
        assert_eq!(latest.current_value(), Some("Old Value".to_string()));
        subject.next("New Value".to_string())?;
        latest
    };

    // Assert
    assert_eq!(
        latest.current_value(),
        Some("New Value".to_string()),
        "new value is available outside the scope"
    );

    Ok(())
}

#[tokio::test]
async fn test_latest_value_keeps_value_after_completion() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<i32>();
    let latest = Value::from_latest(stream);

    // Act
    tx.send(7)?;
    drop(tx);

    // Assert
    assert_eq!(latest.current_value(), Some(7));

    Ok(())
}

#[tokio::test]
async fn test_latest_value_keeps_value_after_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<i32, TestError>();
    let latest = Value::from_latest(stream);

    // Act
    tx.send(StreamItem::Value(1))?;
    tx.send(StreamItem::Error(TestError::Error))?;

    // Assert
    assert_eq!(latest.current_value(), Some(1), "a failure does not clear the value");

    // A failed source is no longer observed
    let _ = tx.send(StreamItem::Value(2));
    assert_eq!(latest.current_value(), Some(1));

    Ok(())
}

#[tokio::test]
async fn test_latest_value_does_not_replay_history() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<i32>::new();
    let early = subject.subscribe()?;
    subject.next(1)?;

    // Act: the holder subscribes to a fresh stream, history is not replayed
    let latest = Value::from_latest(subject.subscribe()?);

    // Assert
    assert_eq!(latest.current_value(), None);
    drop(early);

    Ok(())
}

#[tokio::test]
async fn test_latest_value_captures_ready_elements_of_cold_stream() {
    // Arrange
    let source = stream::iter(vec![
        StreamItem::<i32, TetherError>::Value(1),
        StreamItem::Value(2),
        StreamItem::Value(3),
    ]);

    // Act
    let latest = Value::from_latest(source);

    // Assert
    assert_eq!(latest.current_value(), Some(3));
}

#[tokio::test]
async fn test_latest_value_releases_subscription_on_drop() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<i32>::new();
    let latest = Value::from_latest(subject.subscribe()?);
    assert_eq!(subject.subscriber_count(), 1);

    // Act
    drop(latest);

    // Assert: dropped subscribers are pruned on the next send
    subject.next(1)?;
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_latest_value_clone_keeps_subscription_alive() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<i32>::new();
    let latest = Value::from_latest(subject.subscribe()?);
    let clone = latest.clone();

    // Act
    drop(latest);
    subject.next(5)?;

    // Assert
    assert_eq!(clone.current_value(), Some(5));
    assert_eq!(subject.subscriber_count(), 1);

    Ok(())
}

#[tokio::test]
async fn test_latest_value_from_property_stream_starts_with_current() -> anyhow::Result<()> {
    // Arrange
    let property = TetherProperty::new(10);

    // Act
    let latest = Value::from_latest(property.subscribe()?);
    assert_eq!(latest.current_value(), Some(10));

    property.set(11);

    // Assert
    assert_eq!(latest.current_value(), Some(11));

    Ok(())
}

#[test]
fn test_latest_value_visible_right_after_emission() -> anyhow::Result<()> {
    // Arrange: no async runtime is involved
    let subject = TetherSubject::<String>::new();
    let latest = Value::from_latest(subject.subscribe()?);

    // Act
    subject.next("Old Value".to_string())?;

    // Assert
    assert_eq!(latest.current_value(), Some("Old Value".to_string()));
    assert!(latest.is_present());

    Ok(())
}

#[test]
fn test_latest_value_drains_burst_to_last_element() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<i32>::new();
    let latest = Value::from_latest(subject.subscribe()?);

    // Act
    for n in 1..=100 {
        subject.next(n)?;
    }

    // Assert
    assert_eq!(latest.current_value(), Some(100));

    Ok(())
}

#[test]
fn test_latest_value_keeps_value_after_subject_closes() -> anyhow::Result<()> {
    // Arrange
    let subject = TetherSubject::<i32>::new();
    let latest = Value::from_latest(subject.subscribe()?);
    subject.next(3)?;

    // Act
    subject.close();

    // Assert
    assert_eq!(latest.current_value(), Some(3));
    assert_eq!(latest.current_value(), Some(3));

    Ok(())
}
