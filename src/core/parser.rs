use super::{Expr, PrecedenceTable, RcalcError, Result, TokenSource};

const LEFT_PAREN: &str = "(";
const RIGHT_PAREN: &str = ")";

/// Parses a stream of lexemes into an `Expr` by precedence climbing.
///
/// ## Syntax grammar
/// ```notrust
/// expression → term ( OPERATOR term )* ;
/// term       → IDENTIFIER | INTEGER | "(" expression ")" ;
/// ```
///
/// `OPERATOR` is any lexeme with a nonzero precedence in the table the parser
/// was built with. Rather than a rule per precedence level, `expression`
/// threads a minimum precedence through its recursion: an operator binds to
/// the expression on its left only if it is strictly stronger than the
/// operator that started the current level. Operators of equal precedence
/// therefore combine left to right:
/// ```notrust
///     1 - 2 - 3    =>    ((1 - 2) - 3)
///     a = b = c    =>    ((a = b) = c)
/// ```
///
/// The second line is not how most languages group assignment; evaluating it
/// fails because `(a = b)` is not a name.
pub struct Parser<S> {
    source: S,
    table: PrecedenceTable,
}

impl<S: TokenSource> Parser<S> {
    #[must_use]
    pub fn new(source: S, table: PrecedenceTable) -> Self {
        Parser { source, table }
    }

    /// Parses the whole input as a single expression.
    ///
    /// # Errors
    /// Returns a syntax error if the input is not an expression, or if any
    /// lexemes are left over once one has been parsed.
    pub fn parse(mut self) -> Result<Expr> {
        let expr = self.expression(0)?;

        if self.source.has_more_tokens() {
            return Err(RcalcError::UnexpectedToken(self.source.next_token()));
        }

        Ok(expr)
    }

    fn expression(&mut self, min_precedence: u32) -> Result<Expr> {
        let mut expr = self.term()?;

        loop {
            let token = self.source.next_token();
            let precedence = self.table.precedence_of(&token);

            if precedence <= min_precedence {
                // The end of input is never handed back; there is nothing to
                // read again.
                if !token.is_empty() {
                    self.source.save_token(token);
                }

                return Ok(expr);
            }

            let right = self.expression(precedence)?;
            expr = Expr::compound(token, expr, right);
        }
    }

    fn term(&mut self) -> Result<Expr> {
        let token = self.source.next_token();

        match token.chars().next() {
            None => Err(RcalcError::IllegalExpression),
            Some(c) if c.is_ascii_alphabetic() => Ok(Expr::identifier(token)),
            Some(c) if c.is_ascii_digit() => token
                .parse::<i64>()
                .map(Expr::constant)
                .map_err(|_| RcalcError::InvalidLiteral(token)),
            Some(_) if token == LEFT_PAREN => {
                let expr = self.expression(0)?;
                self.consume(RIGHT_PAREN)?;
                Ok(expr)
            }
            Some(_) => Err(RcalcError::UnexpectedToken(token)),
        }
    }

    fn consume(&mut self, expected: &str) -> Result<()> {
        let token = self.source.next_token();

        if token == expected {
            Ok(())
        } else {
            // Only parentheses are ever consumed
            Err(RcalcError::UnbalancedParentheses)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::Scanner;
    use super::*;

    fn parse(input: &str) -> Result<Expr> {
        let scanner = Scanner::new(input.to_owned());
        Parser::new(scanner, PrecedenceTable::default()).parse()
    }

    fn num(value: i64) -> Expr {
        Expr::constant(value)
    }

    #[test]
    fn it_can_parse_an_integer() {
        assert_eq!(Ok(num(1)), parse("1"));
    }

    #[test]
    fn it_can_parse_an_identifier() {
        assert_eq!(Ok(Expr::identifier("foo")), parse("foo"));
    }

    #[test]
    fn it_can_parse_a_binary_expression() {
        assert_eq!(Ok(Expr::compound("+", num(1), num(2))), parse("1 + 2"));
    }

    #[test]
    fn it_binds_multiplication_tighter_than_addition() {
        let expected = Expr::compound("+", num(2), Expr::compound("*", num(3), num(4)));
        assert_eq!(Ok(expected), parse("2 + 3 * 4"));

        let expected = Expr::compound("+", Expr::compound("*", num(2), num(3)), num(4));
        assert_eq!(Ok(expected), parse("2 * 3 + 4"));
    }

    #[test]
    fn it_can_parse_a_grouping_expression() {
        let expected = Expr::compound("*", Expr::compound("+", num(2), num(3)), num(4));
        assert_eq!(Ok(expected), parse("(2 + 3) * 4"));
        assert_eq!(Ok(num(1)), parse("((1))"));
    }

    #[test]
    fn it_associates_equal_precedence_to_the_left() {
        let expected = Expr::compound("-", Expr::compound("-", num(1), num(2)), num(3));
        assert_eq!(Ok(expected), parse("1 - 2 - 3"));

        let expected = Expr::compound("*", Expr::compound("/", num(8), num(4)), num(2));
        assert_eq!(Ok(expected), parse("8 / 4 * 2"));
    }

    #[test]
    fn it_associates_assignment_to_the_left() {
        let expected = Expr::compound(
            "=",
            Expr::compound("=", Expr::identifier("a"), Expr::identifier("b")),
            Expr::identifier("c"),
        );
        assert_eq!(Ok(expected), parse("a = b = c"));
    }

    #[test]
    fn it_binds_assignment_loosest() {
        let expected = Expr::compound(
            "=",
            Expr::identifier("x"),
            Expr::compound("+", num(1), Expr::compound("*", num(2), num(3))),
        );
        assert_eq!(Ok(expected), parse("x = 1 + 2 * 3"));
    }

    #[test]
    fn it_can_parse_an_arbitrarily_complex_expression() {
        let left = Expr::compound("*", Expr::compound("+", num(1), num(2)), num(3));
        let right = Expr::compound("/", Expr::compound("-", num(4), num(5)), num(6));
        let expected = Expr::compound("-", left, right);

        assert_eq!(Ok(expected), parse("(1 + 2) * 3 - (4 - 5) / 6"));
    }

    #[test]
    fn it_detects_unclosed_parenthesis() {
        assert_eq!(Err(RcalcError::UnbalancedParentheses), parse("(1 + 2"));
        assert_eq!(Err(RcalcError::UnbalancedParentheses), parse("(1 2)"));
    }

    #[test]
    fn it_detects_a_stray_closing_parenthesis() {
        assert_eq!(
            Err(RcalcError::UnexpectedToken(")".to_owned())),
            parse("1 + 2)")
        );
    }

    #[test]
    fn it_detects_an_incomplete_expression() {
        assert_eq!(Err(RcalcError::IllegalExpression), parse("1 +"));
        assert_eq!(Err(RcalcError::IllegalExpression), parse(""));
        assert_eq!(Err(RcalcError::IllegalExpression), parse("   "));
        assert_eq!(Err(RcalcError::IllegalExpression), parse("("));
    }

    #[test]
    fn it_detects_an_unexpected_token() {
        assert_eq!(Err(RcalcError::UnexpectedToken("*".to_owned())), parse("* 2"));
        assert_eq!(Err(RcalcError::UnexpectedToken(")".to_owned())), parse(")"));
    }

    #[test]
    fn it_detects_trailing_tokens() {
        assert_eq!(Err(RcalcError::UnexpectedToken("2".to_owned())), parse("1 2"));
        assert_eq!(Err(RcalcError::UnexpectedToken("%".to_owned())), parse("7 % 2"));
    }

    #[test]
    fn it_detects_an_out_of_range_literal() {
        assert_eq!(
            Err(RcalcError::InvalidLiteral("99999999999999999999".to_owned())),
            parse("99999999999999999999")
        );
    }

    #[test]
    fn it_parses_operators_added_to_the_table() {
        let scanner = Scanner::new("7 % 2 + 1".to_owned());
        let table = PrecedenceTable::default().with("%", 3);
        let expected = Expr::compound("+", Expr::compound("%", num(7), num(2)), num(1));

        assert_eq!(Ok(expected), Parser::new(scanner, table).parse());
    }

    #[test]
    fn it_can_parse_without_skipping_whitespace() {
        let scanner = Scanner::with_whitespace("1+2".to_owned());
        let expected = Expr::compound("+", num(1), num(2));
        assert_eq!(
            Ok(expected),
            Parser::new(scanner, PrecedenceTable::default()).parse()
        );

        let scanner = Scanner::with_whitespace("1 + 2".to_owned());
        assert_eq!(
            Err(RcalcError::UnexpectedToken(" ".to_owned())),
            Parser::new(scanner, PrecedenceTable::default()).parse()
        );
    }
}
