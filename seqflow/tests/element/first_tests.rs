// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_core::SequenceError;
use seqflow_test_utils::guarded_sequence;
use seqflow_test_utils::test_data::{animal_dog, people, person_alice, person_charlie, TestData};

#[test]
fn test_first_returns_first_value() -> anyhow::Result<()> {
    // Arrange
    let sequence = as_sequence(people());

    // Act
    let first = sequence.first()?;

    // Assert
    assert_eq!(first, person_alice());
    Ok(())
}

#[test]
fn test_first_on_empty_sequence_fails() {
    let result = Sequence::<i32>::empty().first();

    assert_eq!(result, Err(SequenceError::empty_sequence("first")));
}

#[test]
fn test_first_or_none() {
    assert_eq!(as_sequence(vec![9, 8]).first_or_none(), Some(9));
    assert_eq!(Sequence::<i32>::empty().first_or_none(), None);
}

#[test]
fn test_first_where_stops_at_match() -> anyhow::Result<()> {
    // Arrange: visiting index 4 would panic
    let sequence = guarded_sequence(vec![1, 2, 3, 4, 5], 3);

    // Act
    let found = sequence.first_where(|n| *n > 3)?;

    // Assert
    assert_eq!(found, 4);
    Ok(())
}

#[test]
fn test_first_where_no_match_fails() {
    let result = as_sequence(vec![1, 2, 3]).first_where(|n| *n > 10);

    assert!(matches!(
        result,
        Err(SequenceError::EmptySequence { operation: "first" })
    ));
}

#[test]
fn test_first_where_or_none() {
    let sequence = as_sequence(vec![animal_dog(), person_charlie()]);

    let person = sequence.first_where_or_none(TestData::is_person);
    let nobody = sequence.first_where_or_none(|data| data.name() == "Zed");

    assert_eq!(person, Some(person_charlie()));
    assert_eq!(nobody, None);
}

#[test]
fn test_first_returns_falsy_values() {
    assert_eq!(as_sequence(vec![0, 1]).first(), Ok(0));
    assert_eq!(as_sequence(vec![""]).first_or_none(), Some(""));
}

#[test]
fn test_first_or_none_reads_only_first_value() {
    // Only index 0 may be visited
    let sequence = guarded_sequence(vec!["only", "never"], 0);

    assert_eq!(sequence.first_or_none(), Some("only"));
}

#[test]
fn test_first_where_keeps_first_match_when_source_ignores_token() {
    // Arrange: this source pushes everything regardless of cancellation
    let sequence = Sequence::from_fn(|observer, _cancel| {
        for (index, value) in [1, 5, 2, 7, 3].into_iter().enumerate() {
            observer(value, index);
        }
        5
    });

    // Act
    let first_large = sequence.first_where(|v| *v > 4);
    let first = sequence.first_or_none();

    // Assert
    assert_eq!(first_large, Ok(5));
    assert_eq!(first, Some(1));
}
