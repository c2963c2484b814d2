use std::fmt;
use std::result;

use super::{Expr, RcalcError};

/// Renders the tree fully parenthesized, so feeding the output back through
/// the parser rebuilds the same tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::Constant { value } => write!(f, "{}", value),
            Self::Identifier { name } => write!(f, "{}", name),
            Self::Compound {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

impl fmt::Display for RcalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::IllegalExpression => write!(f, "syntax error: Illegal expression"),
            Self::UnbalancedParentheses => write!(f, "syntax error: Unbalanced parentheses"),
            Self::UnexpectedToken(t) => write!(f, "syntax error: Unexpected token {}", t),
            Self::InvalidLiteral(t) => write!(f, "syntax error: Invalid integer literal {}", t),
            Self::TypeMismatch(accessor, found) => {
                write!(f, "type mismatch: {} called on {}", accessor, found)
            }
            Self::UndefinedVariable(s) => write!(f, "runtime error: Undefined variable '{}'", s),
            Self::DivisionByZero => write!(f, "runtime error: Division by zero"),
            Self::Overflow(op) => write!(f, "runtime error: Integer overflow in '{}'", op),
            Self::UnknownOperator(op) => write!(f, "runtime error: Unknown operator '{}'", op),
        }
    }
}
