// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::{as_sequence, Sequence};
use seqflow_core::SequenceError;
use seqflow_test_utils::test_data::{people, person_diane};

#[test]
fn test_last_returns_final_value() -> anyhow::Result<()> {
    let last = as_sequence(people()).last()?;

    assert_eq!(last, person_diane());
    Ok(())
}

#[test]
fn test_last_on_empty_sequence_fails() {
    let result = Sequence::<u32>::empty().last();

    assert_eq!(result, Err(SequenceError::empty_sequence("last")));
}

#[test]
fn test_last_where() {
    let sequence = as_sequence(vec![1, 2, 3, 4, 5]);

    assert_eq!(sequence.last_where(|n| n % 2 == 0), Ok(4));
    assert!(sequence.last_where(|n| *n > 5).is_err());
}

#[test]
fn test_last_or_none() {
    assert_eq!(as_sequence(vec!['a', 'z']).last_or_none(), Some('z'));
    assert_eq!(Sequence::<char>::empty().last_or_none(), None);
}

#[test]
fn test_last_where_or_none() {
    let sequence = as_sequence(vec![3, 6, 9, 10]);

    assert_eq!(sequence.last_where_or_none(|n| n % 3 == 0), Some(9));
    assert_eq!(sequence.last_where_or_none(|n| *n < 0), None);
}
