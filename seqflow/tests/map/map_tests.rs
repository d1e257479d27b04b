// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_test_utils::test_data::{people, TestData};
use seqflow_test_utils::{assert_emits, assert_emits_nothing, collect_indexed};

#[test]
fn test_map_transforms_each_value() {
    let sequence = as_sequence(vec![1, 2, 3]).map(|n| n * n);

    assert_emits(&sequence, &[1, 4, 9]);
}

#[test]
fn test_map_changes_type() {
    // Arrange
    let sequence = as_sequence(people());

    // Act
    let names = sequence.map(|data| data.name().to_string());

    // Assert
    assert_eq!(names.to_vec(), vec!["Alice", "Bob", "Charlie", "Diane"]);
}

#[test]
fn test_map_preserves_indexes() {
    let sequence = as_sequence(vec!["a", "bb", "ccc"]).map(str::len);

    let (pairs, count) = collect_indexed(&sequence);

    assert_eq!(pairs, vec![(1, 0), (2, 1), (3, 2)]);
    assert_eq!(count, 3);
}

#[test]
fn test_map_on_empty_sequence() {
    let sequence = Sequence::<TestData>::empty().map(|data| data.name().len());

    assert_emits_nothing(&sequence);
}

#[test]
fn test_map_selector_runs_per_evaluation() {
    use std::cell::Cell;

    // Arrange
    let calls = Cell::new(0);
    let sequence = as_sequence(vec![1, 2]).map(|n| {
        calls.set(calls.get() + 1);
        n + 1
    });

    // Act
    sequence.to_vec();
    sequence.to_vec();

    // Assert: lazy, nothing is cached between evaluations
    assert_eq!(calls.get(), 4);
}
