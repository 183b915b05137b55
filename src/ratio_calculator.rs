use crate::error_classifier::DomainError;
use crate::sequence_generator::{fibonacci_at, Position};

/// Ratio between the Fibonacci numbers at `position` and `position - 1`.
///
/// Approaches the golden ratio (1.618033988749895) as the position grows.
/// Only `position == 1` is guarded, since its divisor is `fibonacci_at(0)`.
/// Every other position uses plain float division, so `ratio(0)` is `-0.0`.
pub fn ratio(position: Position) -> Result<f64, DomainError> {
    if position == 1 {
        return Err(DomainError::DivisionByZero {
            position: position - 1,
        });
    }
    let dividend = fibonacci_at(position);
    let divisor = fibonacci_at(position - 1);
    Ok(f64::from(dividend) / f64::from(divisor))
}

/// Text form of a ratio: whole numbers keep a trailing `.0` and negative zero
/// stays `-0.0`.
pub fn format_ratio(value: f64) -> String {
    format!("{:?}", value)
}
