// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tether_core::{StreamItem, TetherError, TetherSubject};
use tether_stream::{Value, With1Ext};
use tether_test_utils::{assert_stream_ended, unwrap_stream, unwrap_value};

#[tokio::test]
async fn test_subject_error_reaches_with1_subscriber() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<i32>::new();
    let mut stream = source.subscribe()?.with1(Value::owned("ctx"));

    // Act
    source.next(1)?;
    source.error(TetherError::stream_error("source broke"))?;

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        (1, "ctx")
    );
    match unwrap_stream(&mut stream, 500).await {
        StreamItem::Error(error) => assert_eq!(error.context(), Some("source broke")),
        StreamItem::Value(value) => panic!("Expected an error, got {value:?}"),
    }
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_holder_source_error_does_not_fail_with1() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<i32>::new();
    let labels = TetherSubject::<&str>::new();
    let latest_label = Value::from_latest(labels.subscribe()?);
    let mut stream = source.subscribe()?.with1(latest_label);

    labels.next("before failure")?;
    labels.error(TetherError::stream_error("labels broke"))?;

    // Act
    source.next(1)?;

    // Assert: the holder keeps its last value, the primary stream is unaffected
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        (1, "before failure")
    );

    Ok(())
}

#[tokio::test]
async fn test_error_from_one_subscriber_chain_leaves_others_running() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<i32>::new();
    let failing = TetherSubject::<i32>::new();
    let mut healthy = source.subscribe()?.with1(Value::owned('h'));
    let mut broken = failing.subscribe()?.with1(Value::owned('b'));

    // Act
    failing.error(TetherError::stream_error("only this one"))?;
    source.next(7)?;

    // Assert
    assert!(unwrap_stream(&mut broken, 500).await.is_error());
    assert_stream_ended(&mut broken, 500).await;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut healthy, 500).await)),
        (7, 'h')
    );

    Ok(())
}
