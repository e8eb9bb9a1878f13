//! Integration tests: full overflow/resize scenarios against the public API

use lifo_core::{DynamicStack, StackError};

#[test]
fn test_declined_resize_leaves_stack_untouched() {
    // capacity 2, push 10, push 20, push 30 overflows; the user declines,
    // so nothing may have changed.
    let mut stack = DynamicStack::new(2);
    stack.push(10).unwrap();
    stack.push(20).unwrap();

    let err = stack.push(30).unwrap_err();
    assert!(err.is_overflow());

    let entries: Vec<_> = stack.entries().collect();
    assert_eq!(entries, vec![(1, 20), (0, 10)]);
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.capacity(), 2);
}

#[test]
fn test_accepted_resize_keeps_prefix_and_lands_the_push() {
    // Same start, but the user approves growing to 4: the old contents
    // stay in place and the pending push goes through.
    let mut stack = DynamicStack::new(2);
    stack.push(10).unwrap();
    stack.push(20).unwrap();
    assert!(stack.push(30).unwrap_err().is_overflow());

    stack.grow(4).unwrap();
    stack.push(30).unwrap();

    let entries: Vec<_> = stack.entries().collect();
    assert_eq!(entries, vec![(2, 30), (1, 20), (0, 10)]);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.capacity(), 4);
}

#[test]
fn test_rejected_growth_still_allows_a_later_valid_one() {
    let mut stack = DynamicStack::new(1);
    stack.push(1).unwrap();
    assert!(stack.push(2).unwrap_err().is_overflow());

    assert!(matches!(
        stack.grow(1),
        Err(StackError::InvalidGrowth { .. })
    ));
    stack.grow(3).unwrap();
    stack.push(2).unwrap();
    stack.push(3).unwrap();
    assert!(stack.is_full());
}
