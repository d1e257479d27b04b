// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, IntoSequence, Sequence};
use seqflow_core::ArraySource;
use seqflow_test_utils::test_data::{people, TestData};
use seqflow_test_utils::{assert_emits, assert_emits_nothing, collect_indexed};
use std::sync::Arc;

#[test]
fn test_from_vec_and_from_trait() {
    let from_vec = Sequence::from_vec(vec![1, 2, 3]);
    let from_trait: Sequence<i32> = vec![1, 2, 3].into();

    assert_emits(&from_vec, &[1, 2, 3]);
    assert_emits(&from_trait, &[1, 2, 3]);
}

#[test]
fn test_from_slice_borrows() {
    let values = vec![people()[0].clone(), people()[1].clone()];

    let sequence = Sequence::from_slice(&values);

    assert_eq!(sequence.known_len(), Some(2));
    assert_eq!(sequence.to_vec(), values);
}

#[test]
fn test_from_arc_shares_storage() {
    let shared: Arc<[u8]> = Arc::from(vec![4, 5]);

    let first = Sequence::from_arc(Arc::clone(&shared));
    let second = Sequence::from_arc(shared);

    assert_eq!(first.to_vec(), second.to_vec());
}

#[test]
fn test_into_sequence_conversions() {
    let values = vec![1, 2];

    let from_array = [1, 2].into_sequence();
    let from_slice = values.as_slice().into_sequence();
    let from_ref = (&values).into_sequence();
    let from_owned = values.clone().into_sequence();

    for sequence in [from_array, from_slice, from_ref, from_owned] {
        assert_emits(&sequence, &[1, 2]);
    }
}

#[test]
fn test_collect_into_sequence() {
    let sequence: Sequence<i32> = (1..=4).filter(|n| n % 2 == 0).collect();

    assert_emits(&sequence, &[2, 4]);
    assert_emits(&sequence, &[2, 4]);
}

#[test]
fn test_empty_and_default() {
    assert_emits_nothing(&Sequence::<TestData>::empty());
    assert_emits_nothing(&Sequence::<TestData>::default());
}

#[test]
fn test_from_source() {
    let sequence = Sequence::from_source(ArraySource::<_, &str>::new(vec!["a", "b"]));

    let (pairs, count) = collect_indexed(&sequence);

    assert_eq!(pairs, vec![("a", 0), ("b", 1)]);
    assert_eq!(count, 2);
}

#[test]
fn test_from_fn() {
    // Arrange: squares of 0..4, honoring the token
    let sequence = Sequence::from_fn(|observer, cancel| {
        let mut count = 0;
        for n in 0..4_u64 {
            if cancel.is_signaled() {
                break;
            }
            observer(n * n, count);
            count += 1;
        }
        count
    });

    // Act & Assert
    assert_emits(&sequence, &[0, 1, 4, 9]);
    assert_eq!(sequence.first_where(|n| *n > 1), Ok(4));
}

#[test]
fn test_from_iterator_is_single_traversal() {
    // Arrange
    let sequence = Sequence::from_iterator(vec![1, 2, 3]);

    // Act
    let first = sequence.to_vec();
    let second = sequence.to_vec();

    // Assert
    assert_eq!(first, vec![1, 2, 3]);
    assert!(second.is_empty());
    assert_eq!(sequence.known_len(), None);
}

#[test]
fn test_from_iterator_resumes_after_early_stop() {
    let sequence = Sequence::from_iterator("abcd".chars());

    assert_eq!(sequence.first(), Ok('a'));
    assert_eq!(sequence.to_vec(), vec!['b', 'c', 'd']);
}

#[test]
fn test_debug_output() {
    let sequence = as_sequence(vec![1, 2, 3]);

    let rendered = format!("{sequence:?}");

    assert!(rendered.starts_with("Sequence"));
    assert!(rendered.contains("known_len: Some(3)"));
}
