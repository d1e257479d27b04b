// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_test_utils::test_data::{animal_cat, animal_dog, person_alice, person_bob};
use seqflow_test_utils::{assert_emits, collect_indexed};

#[test]
fn test_concat_emits_first_then_second() {
    // Arrange
    let people = as_sequence(vec![person_alice(), person_bob()]);
    let animals = as_sequence(vec![animal_dog(), animal_cat()]);

    // Act
    let result = people.concat(animals);

    // Assert
    assert_emits(
        &result,
        &[person_alice(), person_bob(), animal_dog(), animal_cat()],
    );
}

#[test]
fn test_concat_offsets_second_indexes() {
    let sequence = as_sequence(vec![10, 20]).concat(as_sequence(vec![30]));

    let (pairs, count) = collect_indexed(&sequence);

    assert_eq!(pairs, vec![(10, 0), (20, 1), (30, 2)]);
    assert_eq!(count, 3);
}

#[test]
fn test_concat_with_empty_operands() {
    let left = Sequence::empty().concat(as_sequence(vec![1, 2]));
    let right = as_sequence(vec![1, 2]).concat(Sequence::empty());
    let both = Sequence::<i32>::empty().concat(Sequence::empty());

    assert_emits(&left, &[1, 2]);
    assert_emits(&right, &[1, 2]);
    assert_eq!(both.count(), 0);
}

#[test]
fn test_concat_is_associative() {
    let a = || as_sequence(vec![1, 2]);
    let b = || as_sequence(vec![3]);
    let c = || as_sequence(vec![4, 5]);

    let left = a().concat(b()).concat(c());
    let right = a().concat(b().concat(c()));

    assert_eq!(collect_indexed(&left), collect_indexed(&right));
}

#[test]
fn test_concat_of_filtered_operands() {
    let odds = as_sequence(vec![1, 2, 3]).filter(|n| n % 2 == 1);
    let evens = as_sequence(vec![4, 5, 6]).filter(|n| n % 2 == 0);

    let (pairs, _) = collect_indexed(&odds.concat(evens));

    assert_eq!(pairs, vec![(1, 0), (3, 1), (4, 2), (6, 3)]);
}
