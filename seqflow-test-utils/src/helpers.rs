// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::Sequence;
use seqflow_core::CancelToken;

/// Runs a full emission and returns every `(value, index)` pair with the
/// count reported by the source.
pub fn collect_indexed<'a, T: 'a>(sequence: &Sequence<'a, T>) -> (Vec<(T, usize)>, usize) {
    let mut pairs = Vec::new();
    let count = sequence.emit(&mut |value, index| pairs.push((value, index)), &CancelToken::NEVER);
    (pairs, count)
}

/// Asserts that a full emission pushes `expected` in order, with indexes
/// `0..expected.len()` and a matching reported count.
pub fn assert_emits<'a, T>(sequence: &Sequence<'a, T>, expected: &[T])
where
    T: PartialEq + std::fmt::Debug + 'a,
{
    let (pairs, count) = collect_indexed(sequence);
    let values: Vec<&T> = pairs.iter().map(|(value, _)| value).collect();
    let indexes: Vec<usize> = pairs.iter().map(|(_, index)| *index).collect();

    assert_eq!(values, expected.iter().collect::<Vec<_>>());
    assert_eq!(indexes, (0..expected.len()).collect::<Vec<_>>());
    assert_eq!(count, expected.len());
}

/// Asserts that a full emission pushes nothing.
pub fn assert_emits_nothing<'a, T: std::fmt::Debug + 'a>(sequence: &Sequence<'a, T>) {
    let (pairs, count) = collect_indexed(sequence);
    assert!(pairs.is_empty(), "expected no values, got {pairs:?}");
    assert_eq!(count, 0);
}
