// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::as_sequence;
use seqflow_test_utils::assert_emits;
use seqflow_test_utils::test_data::{animal_bird, animal_cat, animal_dog, animal_spider, TestData};

#[test]
fn test_distinct_by_key() {
    // Arrange
    let sequence = as_sequence(vec![animal_dog(), animal_bird(), animal_cat(), animal_spider()]);

    // Act: one animal per leg count
    let result = sequence.distinct_by(|data| match data {
        TestData::Animal(animal) => animal.legs,
        TestData::Person(_) => 0,
    });

    // Assert
    assert_emits(&result, &[animal_dog(), animal_bird(), animal_spider()]);
}

#[test]
fn test_distinct_by_case_insensitive_key() {
    let sequence = as_sequence(vec!["Apple", "apple", "BANANA", "Cherry", "banana"])
        .distinct_by(|s| s.to_lowercase());

    assert_emits(&sequence, &["Apple", "BANANA", "Cherry"]);
}

#[test]
fn test_distinct_by_then_take() {
    let sequence = as_sequence(vec![1, 3, 5, 2, 4, 7])
        .distinct_by(|n| n % 2)
        .take(1);

    assert_emits(&sequence, &[1]);
}
