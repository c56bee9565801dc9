use symlower_expr::{BitvectorOperator, LogicalOperator, Type};
use symlower_symbolic::Kind;
use thiserror::Error;

/// A source construct with no faithful symbolic counterpart.
///
/// Lowering never approximates an unsupported construct; it stops with one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("expected a boolean expression, found {0}")]
    NotBoolean(Kind),

    #[error("expected a numeric operand, found {0}")]
    NotNumeric(Kind),

    #[error("operands of kind {left} and {right} cannot be unified")]
    IncompatibleOperands { left: Kind, right: Kind },

    #[error("operator {op} is not supported on {kind}")]
    UnsupportedOperator { op: BitvectorOperator, kind: Kind },

    #[error("bitvector operator {op} not supported for {left} and {right}")]
    BitvectorMismatch {
        op: BitvectorOperator,
        left: Kind,
        right: Kind,
    },

    #[error("connective {0} is not supported")]
    UnsupportedConnective(LogicalOperator),

    #[error("cannot cast {from} to {to}")]
    UnsupportedCast { from: Type, to: Type },

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("function '{name}' expects {expected} argument(s), got {found}")]
    FunctionArity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("variable '{name}' of type {ty} has no symbolic counterpart")]
    UnsupportedVariableType { name: String, ty: Type },

    #[error("constant {0} cannot be represented as a double")]
    UnrepresentableConstant(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LowerError::IncompatibleOperands {
            left: Kind::Float,
            right: Kind::Double,
        };
        assert_eq!(
            err.to_string(),
            "operands of kind float and double cannot be unified"
        );

        let err = LowerError::UnsupportedOperator {
            op: BitvectorOperator::ShiftUR,
            kind: Kind::Long,
        };
        assert_eq!(err.to_string(), "operator >>> is not supported on long");

        let err = LowerError::UnsupportedConnective(LogicalOperator::Imply);
        assert_eq!(err.to_string(), "connective => is not supported");
    }

    #[test]
    fn test_arity_display() {
        let err = LowerError::FunctionArity {
            name: "pow".into(),
            expected: 2,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "function 'pow' expects 2 argument(s), got 1"
        );
    }
}
