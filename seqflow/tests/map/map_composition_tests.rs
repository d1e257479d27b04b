// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::as_sequence;

#[test]
fn test_map_composition_law() {
    // Arrange
    let values = vec![3, -1, 4, -1, 5];
    let f = |n: i32| n * 2;
    let g = |n: i32| n - 7;

    // Act
    let chained = as_sequence(values.clone()).map(f).map(g);
    let composed = as_sequence(values).map(move |n| g(f(n)));

    // Assert
    assert_eq!(chained.to_vec(), composed.to_vec());
}

#[test]
fn test_map_then_filter_then_count() {
    let count = as_sequence(vec!["apple", "fig", "banana", "kiwi"])
        .map(str::len)
        .filter(|len| *len > 3)
        .count();

    assert_eq!(count, 3);
}
