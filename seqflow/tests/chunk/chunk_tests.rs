// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_core::SequenceError;
use seqflow_test_utils::{assert_emits, assert_emits_nothing, collect_indexed};

#[test]
fn test_chunk_groups_values() -> anyhow::Result<()> {
    // Arrange
    let sequence = as_sequence(vec![1, 2, 3, 4, 5, 6]);

    // Act
    let chunks = sequence.chunk(2)?;

    // Assert
    assert_emits(&chunks, &[vec![1, 2], vec![3, 4], vec![5, 6]]);
    Ok(())
}

#[test]
fn test_chunk_emits_partial_tail() -> anyhow::Result<()> {
    let chunks = as_sequence(vec![1, 2, 3, 4, 5]).chunk(2)?;

    let (pairs, count) = collect_indexed(&chunks);

    assert_eq!(pairs, vec![(vec![1, 2], 0), (vec![3, 4], 1), (vec![5], 2)]);
    assert_eq!(count, 3);
    Ok(())
}

#[test]
fn test_chunk_size_zero_is_rejected() {
    let result = as_sequence(vec![1, 2, 3]).chunk(0);

    assert!(matches!(
        result,
        Err(SequenceError::InvalidArgument { name: "size", .. })
    ));
}

#[test]
fn test_chunk_larger_than_sequence() -> anyhow::Result<()> {
    let chunks = as_sequence(vec!['a', 'b']).chunk(10)?;

    assert_emits(&chunks, &[vec!['a', 'b']]);
    Ok(())
}

#[test]
fn test_chunk_on_empty() -> anyhow::Result<()> {
    assert_emits_nothing(&Sequence::<i32>::empty().chunk(3)?);
    Ok(())
}

#[test]
fn test_chunk_then_take_drops_tail() -> anyhow::Result<()> {
    // Arrange: take cancels after the first chunk, so no partial chunk follows
    let chunks = as_sequence(vec![1, 2, 3]).chunk(2)?.take(1);

    // Act & Assert
    assert_emits(&chunks, &[vec![1, 2]]);
    Ok(())
}
