use super::{
    Environment, Expr, Parser, PrecedenceTable, RcalcError, Result, Scanner, ASSIGN,
};

impl Expr {
    /// Evaluates the tree against `environment`.
    ///
    /// The right operand of a compound is always evaluated before the left
    /// one. This is observable when the right operand assigns:
    /// ```notrust
    ///     (x = 2) * (x = 3)    =>    6, and x is left at 2
    /// ```
    ///
    /// # Errors
    /// - `UndefinedVariable` when reading a name that was never assigned
    /// - `TypeMismatch` when the target of `=` is not a name; nothing is bound
    /// - `DivisionByZero` and `Overflow` from the arithmetic
    /// - `UnknownOperator` for an operator the precedence table accepted but
    ///   that has no arithmetic
    pub fn evaluate(&self, environment: &mut Environment) -> Result<i64> {
        match self {
            Self::Constant { value } => Ok(*value),
            Self::Identifier { name } => environment.get(name),
            Self::Compound {
                operator,
                left,
                right,
            } => {
                if operator == ASSIGN {
                    // The target is checked before the right operand runs, so
                    // a bad target leaves the environment untouched.
                    let name = left.name()?;
                    let value = right.evaluate(environment)?;
                    environment.define(name, value);
                    return Ok(value);
                }

                let right = right.evaluate(environment)?;
                let left = left.evaluate(environment)?;
                apply(operator, left, right)
            }
        }
    }
}

fn apply(operator: &str, left: i64, right: i64) -> Result<i64> {
    let value = match operator {
        "+" => left.checked_add(right),
        "-" => left.checked_sub(right),
        "*" => left.checked_mul(right),
        "/" => {
            if right == 0 {
                return Err(RcalcError::DivisionByZero);
            }

            // `checked_div` truncates toward zero; it only fails on
            // i64::MIN / -1 once the zero divisor is ruled out.
            left.checked_div(right)
        }
        _ => return Err(RcalcError::UnknownOperator(operator.to_owned())),
    };

    value.ok_or_else(|| RcalcError::Overflow(operator.to_owned()))
}

/// One interpreter session: a precedence table and the variables assigned so
/// far.
#[derive(Debug, Default)]
pub struct Interpreter {
    table: PrecedenceTable,
    environment: Environment,
}

impl Interpreter {
    #[must_use]
    pub fn new() -> Self {
        Interpreter::with_table(PrecedenceTable::default())
    }

    #[must_use]
    pub fn with_table(table: PrecedenceTable) -> Self {
        Interpreter {
            table,
            environment: Environment::new(),
        }
    }

    /// Parses one line of input.
    ///
    /// # Errors
    /// Returns a syntax error if `line` is not a single expression.
    pub fn parse(&self, line: &str) -> Result<Expr> {
        let scanner = Scanner::new(line.to_owned());
        Parser::new(scanner, self.table.clone()).parse()
    }

    /// Evaluates `expr` against this session's variables.
    ///
    /// # Errors
    /// See `Expr::evaluate`.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<i64> {
        expr.evaluate(&mut self.environment)
    }

    /// Parses and evaluates one line of input.
    ///
    /// # Errors
    /// Returns the first syntax or runtime error; a line that fails to parse
    /// never touches the session's variables.
    pub fn run(&mut self, line: &str) -> Result<i64> {
        let expr = self.parse(line)?;
        self.evaluate(&expr)
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
