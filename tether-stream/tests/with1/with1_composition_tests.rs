// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use std::sync::Arc;
use tether_core::{StreamItem, TetherProperty, TetherSubject};
use tether_stream::{Value, With1Ext};
use tether_test_utils::person::{person_alice, person_bob};
use tether_test_utils::{
    assert_no_element_emitted, assert_stream_ended, unwrap_stream, unwrap_value, Person,
};

#[tokio::test]
async fn test_subject_with1_latest_value() -> anyhow::Result<()> {
    // Arrange
    let clicks = TetherSubject::<&str>::new();
    let users = TetherSubject::<Person>::new();
    let current_user = Value::from_latest(users.subscribe()?);

    let mut stream = clicks.subscribe()?.with1(current_user);

    // Act & Assert: no user yet
    clicks.next("save")?;
    assert_no_element_emitted(&mut stream, 100).await;

    users.next(person_alice())?;
    clicks.next("open")?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        ("open", person_alice())
    );

    users.next(person_bob())?;
    clicks.next("close")?;
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        ("close", person_bob())
    );

    Ok(())
}

#[tokio::test]
async fn test_with1_then_map_and_filter() -> anyhow::Result<()> {
    // Arrange
    let ages = TetherSubject::<u32>::new();
    let threshold = TetherProperty::new(26u32);

    let mut stream = ages
        .subscribe()?
        .with1(Value::from_property(threshold.clone()))
        .filter_map(|item| async move {
            match item {
                StreamItem::Value((age, limit)) if age >= limit => Some(StreamItem::Value(age)),
                StreamItem::Value(_) => None,
                StreamItem::Error(error) => Some(StreamItem::Error(error)),
            }
        })
        .boxed();

    // Act & Assert
    ages.next(25)?;
    ages.next(30)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut stream, 500).await)), 30);

    threshold.set(20);
    ages.next(25)?;
    assert_eq!(unwrap_value(Some(unwrap_stream(&mut stream, 500).await)), 25);

    Ok(())
}

#[tokio::test]
async fn test_chained_with1_calls() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<i32>::new();
    let alice = Arc::new(person_alice());

    let mut stream = source
        .subscribe()?
        .with1(Value::owned("tag"))
        .with1(Value::weak(&alice));

    // Act
    source.next(1)?;

    // Assert
    let ((element, tag), person) = unwrap_value(Some(unwrap_stream(&mut stream, 500).await));
    assert_eq!((element, tag), (1, "tag"));
    assert_eq!(person.name, "Alice");

    // The outer holder alone drops the element once released
    drop(person);
    drop(alice);
    source.next(2)?;
    assert_no_element_emitted(&mut stream, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_subject_close_completes_with1() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<i32>::new();
    let mut stream = source.subscribe()?.with1(Value::owned(0));

    // Act
    source.next(1)?;
    source.close();

    // Assert
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        (1, 0)
    );
    assert_stream_ended(&mut stream, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_property_subscription_with1_property_value() -> anyhow::Result<()> {
    // Arrange
    let name = TetherProperty::new("Alice".to_string());
    let age = TetherProperty::new(25u32);

    let mut stream = name.subscribe()?.with1(Value::from(age.clone()));

    // Act & Assert: the subscription starts with the current value
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        ("Alice".to_string(), 25)
    );

    age.set(26);
    name.set("Alicia".to_string());
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut stream, 500).await)),
        ("Alicia".to_string(), 26)
    );

    Ok(())
}

#[tokio::test]
async fn test_many_elements_through_with1() -> anyhow::Result<()> {
    // Arrange
    let source = TetherSubject::<usize>::new();
    let mut stream = source
        .subscribe()?
        .with1((Value::owned(person_alice()), Value::owned(1usize)));

    // Act
    for i in 0..1000 {
        source.next(i)?;
    }

    // Assert
    for i in 0..1000 {
        let (element, person, step) = unwrap_value(Some(unwrap_stream(&mut stream, 500).await));
        assert_eq!(element, i);
        assert_eq!(person, person_alice());
        assert_eq!(step, 1);
    }

    Ok(())
}
