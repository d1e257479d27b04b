// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use seqflow::as_sequence;
use seqflow_core::SequenceError;

#[test]
fn test_try_skip_negative_count_is_rejected() {
    let result = as_sequence(vec![1, 2, 3]).try_skip(-5);

    let Err(err) = result else {
        panic!("expected an error");
    };
    assert_eq!(
        err,
        SequenceError::invalid_argument("count", "must be >= 0, got -5")
    );
}

#[test]
fn test_try_skip_valid_count() -> anyhow::Result<()> {
    let result = as_sequence(vec![1, 2, 3]).try_skip(1)?;

    assert_eq!(result.to_vec(), vec![2, 3]);
    Ok(())
}
