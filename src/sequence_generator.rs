use std::fmt;

use crate::error_classifier::DomainError;

/// Index into the Fibonacci sequence. Callers may pass negative values.
///
/// 32-bit like the values, so inputs outside `i32` are rejected at parse time
/// and sums wrap the same way a Java `int` does.
pub type Position = i32;

/// Positions at or above this are rejected by [`fibonacci_at_bounded`].
pub const RANGE_LIMIT: Position = 8;

/// Ordered run of Fibonacci values, always starting at index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    pub fn values(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Sequence {
    // Renders as `[0, 1, 1, 2]`, the persisted text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Recursively find the Fibonacci number at `position`.
///
/// Positions `<= 1` are returned unchanged, so `fibonacci_at(-3) == -3`.
/// There is no upper bound. Large positions take exponential time, and a deep
/// enough one overflows the stack, which aborts the whole process rather than
/// failing the single request. Use [`fibonacci_at_bounded`] or
/// [`fibonacci_at_iterative`] when that matters.
pub fn fibonacci_at(position: Position) -> i32 {
    if position <= 1 {
        return position;
    }
    fibonacci_at(position - 1).wrapping_add(fibonacci_at(position - 2))
}

/// Same recursion as [`fibonacci_at`], but fails with `OutOfRange` once the
/// position reaches [`RANGE_LIMIT`].
pub fn fibonacci_at_bounded(position: Position) -> Result<i32, DomainError> {
    if position <= 1 {
        return Ok(position);
    }
    // checked before recursing
    if position >= RANGE_LIMIT {
        return Err(DomainError::OutOfRange { position });
    }
    Ok(fibonacci_at_bounded(position - 1)? + fibonacci_at_bounded(position - 2)?)
}

/// Constant-stack alternative to [`fibonacci_at`] with the same `<= 1` policy.
pub fn fibonacci_at_iterative(position: Position) -> i32 {
    if position <= 1 {
        return position;
    }
    let mut prev: i32 = 0;
    let mut curr: i32 = 1;
    for _ in 1..position {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    curr
}

/// Build the first `count + 1` Fibonacci values without recursion.
///
/// The leading 0 is always present, so any `count <= 0` yields `[0]`.
/// Values wrap on overflow.
pub fn fibonacci_sequence(count: i32) -> Sequence {
    let mut values = vec![0];
    let mut prev: i32 = 0;
    let mut curr: i32 = 1;
    for _ in 0..count.max(0) {
        values.push(curr);
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    Sequence(values)
}
