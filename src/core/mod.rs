use std::error;
use std::result;

mod display;
mod environment;
mod interpreter;
mod parser;
mod precedence;
mod scanner;

pub type Environment = environment::Environment;
pub type Interpreter = interpreter::Interpreter;
pub type PrecedenceTable = precedence::PrecedenceTable;
pub type Result<T> = result::Result<T, RcalcError>;
pub type Scanner = scanner::Scanner;

pub use parser::Parser;
pub use scanner::TokenSource;

/// The operator that binds a value to a name.
pub const ASSIGN: &str = "=";

#[derive(Debug, PartialEq)]
pub enum RcalcError {
    /// The input ran out where a term was expected, e.g. `1 +`.
    IllegalExpression,
    /// An '(' open parenthesis was parsed, but no ')' close parenthesis
    /// followed the enclosed expression.
    UnbalancedParentheses,
    /// A lexeme that cannot start a term, or a lexeme left over after a
    /// complete expression was parsed.
    UnexpectedToken(String),
    /// A run of digits that does not fit in an `i64`.
    InvalidLiteral(String),
    /// A variant accessor was called on the wrong kind of node. The tuple
    /// elements are the accessor and the kind of node it was called on.
    ///
    /// The evaluator reaches this when the target of an assignment is not an
    /// identifier, e.g. `1 = 2`.
    TypeMismatch(&'static str, &'static str),
    /// A non existent variable was queried
    UndefinedVariable(String),
    DivisionByZero,
    /// The result of the operator does not fit in an `i64`.
    Overflow(String),
    /// The precedence table accepted an operator the evaluator has no
    /// arithmetic for.
    UnknownOperator(String),
}

impl RcalcError {
    /// Returns true for errors raised by the parser.
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            Self::IllegalExpression
                | Self::UnbalancedParentheses
                | Self::UnexpectedToken(_)
                | Self::InvalidLiteral(_)
        )
    }
}

impl error::Error for RcalcError {}

/// A parsed expression.
///
/// Each `Compound` owns its operands, so a tree has no sharing and no cycles.
/// Evaluation never mutates a tree; see `Expr::evaluate`.
#[derive(Eq, Hash, Debug, PartialEq, Clone)]
pub enum Expr {
    Constant {
        value: i64,
    },
    Identifier {
        name: String,
    },
    Compound {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn constant(value: i64) -> Self {
        Expr::Constant { value }
    }

    /// # Panics
    /// Panics if `name` is empty. The parser only builds identifiers from
    /// lexemes that start with a letter.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty());
        Expr::Identifier { name }
    }

    #[must_use]
    pub fn compound(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Compound {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// The name of this node's variant, as reported by `TypeMismatch`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Identifier { .. } => "identifier",
            Self::Compound { .. } => "compound",
        }
    }

    pub fn value(&self) -> Result<i64> {
        match self {
            Self::Constant { value } => Ok(*value),
            _ => Err(RcalcError::TypeMismatch("value", self.kind())),
        }
    }

    pub fn name(&self) -> Result<&str> {
        match self {
            Self::Identifier { name } => Ok(name.as_str()),
            _ => Err(RcalcError::TypeMismatch("name", self.kind())),
        }
    }

    pub fn operator(&self) -> Result<&str> {
        match self {
            Self::Compound { operator, .. } => Ok(operator.as_str()),
            _ => Err(RcalcError::TypeMismatch("operator", self.kind())),
        }
    }

    pub fn left(&self) -> Result<&Expr> {
        match self {
            Self::Compound { left, .. } => Ok(left.as_ref()),
            _ => Err(RcalcError::TypeMismatch("left", self.kind())),
        }
    }

    pub fn right(&self) -> Result<&Expr> {
        match self {
            Self::Compound { right, .. } => Ok(right.as_ref()),
            _ => Err(RcalcError::TypeMismatch("right", self.kind())),
        }
    }
}
