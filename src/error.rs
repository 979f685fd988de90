//! Error types.
//!
//! Every failure in this crate is recoverable: a malformed expression or
//! equation is reported back to the caller, and a rejected graph mutation
//! leaves the circuit exactly as it was.

use thiserror::Error;

use crate::gate::ComponentKind;
use crate::types::ComponentId;

/// Errors raised while parsing a boolean expression.
///
/// Positions are character offsets into the original input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty or whitespace-only
    #[error("empty expression")]
    Empty,
    /// A character that is neither a variable, a constant nor an operator
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    /// A parenthesis without its partner
    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParens { pos: usize },
    /// An operator with nothing on one of its sides
    #[error("missing operand at position {pos}")]
    MissingOperand { pos: usize },
    /// Two operands next to each other without an operator in between
    #[error("expected an operator at position {pos}")]
    ExpectedOperator { pos: usize },
    /// More distinct variables than a truth table can enumerate
    #[error("too many variables: {count} (at most {max} supported)")]
    TooManyVariables { count: usize, max: usize },
}

/// Errors raised by circuit graph mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("no component with id {0}")]
    UnknownComponent(ComponentId),
    /// Inputs are driven from outside and never receive connections
    #[error("component {0} is an input and cannot be driven")]
    TargetIsInput(ComponentId),
    #[error("{kind} {id} already has {max} input(s)")]
    FanInExceeded {
        id: ComponentId,
        kind: ComponentKind,
        max: usize,
    },
    #[error("connecting {from} to {to} would create a cycle")]
    WouldCreateCycle { from: ComponentId, to: ComponentId },
    #[error("component {0} is not an input")]
    NotAnInput(ComponentId),
}

impl CircuitError {
    /// Whether this error is one of the ways `connect` refuses an edge.
    pub fn is_rejected_connection(&self) -> bool {
        matches!(
            self,
            CircuitError::TargetIsInput(_)
                | CircuitError::FanInExceeded { .. }
                | CircuitError::WouldCreateCycle { .. }
        )
    }
}

/// Errors raised while parsing a sum-of-products equation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquationError {
    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    /// Only the Karnaugh map variables may appear in an equation
    #[error("variable {0} is not one of A, B, C")]
    UnsupportedVariable(char),
    /// A complement mark `'` that does not follow a variable
    #[error("complement mark without a variable at position {pos}")]
    DanglingComplement { pos: usize },
}

/// A Karnaugh map coordinate outside the 2×4 grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cell ({row}, {col}) is outside the 2x4 map")]
pub struct CellOutOfRange {
    pub row: usize,
    pub col: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::UnbalancedParens { pos: 4 };
        assert_eq!(err.to_string(), "unbalanced parenthesis at position 4");
    }

    #[test]
    fn test_rejected_connection_kinds() {
        let id = ComponentId::new(3);
        assert!(CircuitError::TargetIsInput(id).is_rejected_connection());
        assert!(CircuitError::WouldCreateCycle { from: id, to: id }.is_rejected_connection());
        assert!(CircuitError::FanInExceeded {
            id,
            kind: ComponentKind::NotGate,
            max: 1
        }
        .is_rejected_connection());
        assert!(!CircuitError::UnknownComponent(id).is_rejected_connection());
        assert!(!CircuitError::NotAnInput(id).is_rejected_connection());
    }

    #[test]
    fn test_fan_in_message() {
        let err = CircuitError::FanInExceeded {
            id: ComponentId::new(7),
            kind: ComponentKind::AndGate,
            max: 2,
        };
        assert_eq!(err.to_string(), "AND #7 already has 2 input(s)");
    }
}
