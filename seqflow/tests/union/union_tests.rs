// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_test_utils::test_data::{animal_dog, person_alice, person_bob, person_charlie};
use seqflow_test_utils::{assert_emits, collect_indexed, guarded_sequence};

#[test]
fn test_union_emits_distinct_values_of_both() {
    // Arrange
    let sequence = as_sequence(vec![1, 2, 2, 3]);
    let other = as_sequence(vec![3, 4, 1, 5]);

    // Act
    let result = sequence.union(other);

    // Assert
    assert_emits(&result, &[1, 2, 3, 4, 5]);
}

#[test]
fn test_union_indexes_run_across_operands() {
    let sequence = as_sequence(vec!["a", "b"]).union(as_sequence(vec!["b", "c"]));

    let (pairs, count) = collect_indexed(&sequence);

    assert_eq!(pairs, vec![("a", 0), ("b", 1), ("c", 2)]);
    assert_eq!(count, 3);
}

#[test]
fn test_union_with_empty_is_distinct() {
    let left = as_sequence(vec![4, 4, 1]).union(Sequence::empty());
    let right = Sequence::empty().union(as_sequence(vec![4, 4, 1]));

    assert_emits(&left, &[4, 1]);
    assert_emits(&right, &[4, 1]);
}

#[test]
fn test_union_by_key() {
    let first = as_sequence(vec![person_alice(), person_bob()]);
    let second = as_sequence(vec![person_charlie(), animal_dog()]);

    // Keyed on whether the name is longer than three characters
    let result = first.union_by(second, |data| data.name().len() > 3);

    assert_emits(&result, &[person_alice(), person_bob()]);
}

#[test]
fn test_union_then_take_stops_second_operand() {
    // Arrange
    let first = as_sequence(vec![1, 2]);
    let second = guarded_sequence(vec![2, 3, 4], 1);

    // Act
    let result = first.union(second).take(3);

    // Assert
    assert_emits(&result, &[1, 2, 3]);
}
