use tracing::debug;

use crate::error_classifier::DomainError;
use crate::sequence_generator::{fibonacci_sequence, Position, Sequence};

/// Reserved input that deliberately raises [`DomainError::SimulatedFault`].
pub const FAULT_SENTINEL: &str = "npe";

/// Parse a raw query value into a position.
pub fn parse_position(raw: &str) -> Result<Position, DomainError> {
    raw.parse::<Position>().map_err(|source| {
        debug!(raw, %source, "rejected non-numeric input");
        DomainError::InvalidInput { source }
    })
}

/// Parse a count and build its sequence.
///
/// The sentinel is checked first and surfaces as a fault rather than bad
/// input, so the two are classified differently at the boundary.
pub fn parse_count_with_fault_simulation(raw: &str) -> Result<Sequence, DomainError> {
    if raw == FAULT_SENTINEL {
        return Err(DomainError::SimulatedFault);
    }
    let count = parse_position(raw)?;
    Ok(fibonacci_sequence(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::ErrorKind;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3").unwrap(), 3);
        assert_eq!(parse_position("-1").unwrap(), -1);
        assert_eq!(parse_position("+7").unwrap(), 7);
    }

    #[test]
    fn test_parse_position_rejects_non_numeric() {
        for raw in ["a", "", " 3", "3.5", "0x10", "npe"] {
            let err = parse_position(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {:?}", raw);
            assert_eq!(err.to_string(), "Invalid input. Please provide a valid number");
        }
    }

    #[test]
    fn test_parse_position_rejects_values_outside_i32() {
        assert_eq!(parse_position("2147483647").unwrap(), i32::MAX);
        assert_eq!(parse_position("-2147483648").unwrap(), i32::MIN);
        for raw in ["2147483648", "-2147483649", "-3000000000"] {
            let err = parse_position(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {:?}", raw);
        }
        let err = parse_count_with_fault_simulation("2147483648").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_sentinel_is_simulated_fault() {
        let err = parse_count_with_fault_simulation("npe").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SimulatedFault);
    }

    #[test]
    fn test_sentinel_match_is_exact() {
        let err = parse_count_with_fault_simulation("NPE").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_count_builds_sequence() {
        let sequence = parse_count_with_fault_simulation("3").unwrap();
        assert_eq!(sequence, fibonacci_sequence(3));
        assert_eq!(sequence.values(), &[0, 1, 1, 2]);
        assert_eq!(parse_count_with_fault_simulation("-4").unwrap().values(), &[0]);
    }

    #[test]
    fn test_count_rejects_non_numeric() {
        let err = parse_count_with_fault_simulation("b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
