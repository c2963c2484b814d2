use std::collections::HashMap;
use std::iter::FromIterator;

/// Binding strength of each operator lexeme.
///
/// A lexeme with no entry is not an operator and has precedence 0. Lower
/// numbers bind looser, so in the default table `=` is applied last and `*`
/// and `/` first:
/// ```notrust
///     =      1
///     + -    2
///     * /    3
/// ```
///
/// The parser never names an operator itself; registering a lexeme here is
/// enough to have it parsed as a binary operator.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    levels: HashMap<String, u32>,
}

impl PrecedenceTable {
    /// Creates a table with no operators at all.
    #[must_use]
    pub fn empty() -> Self {
        PrecedenceTable {
            levels: HashMap::new(),
        }
    }

    /// Registers (or re-ranks) `operator` and returns the table.
    ///
    /// # Panics
    /// Panics if `precedence` is 0, which is reserved for "not an operator".
    #[must_use]
    pub fn with(mut self, operator: &str, precedence: u32) -> Self {
        self.insert(operator, precedence);
        self
    }

    /// # Panics
    /// Panics if `precedence` is 0, which is reserved for "not an operator".
    pub fn insert(&mut self, operator: &str, precedence: u32) {
        assert!(precedence > 0);
        self.levels.insert(operator.to_owned(), precedence);
    }

    #[must_use]
    pub fn precedence_of(&self, operator: &str) -> u32 {
        self.levels.get(operator).copied().unwrap_or(0)
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        vec![("=", 1), ("+", 2), ("-", 2), ("*", 3), ("/", 3)]
            .into_iter()
            .collect()
    }
}

/// Constructs a table from `(operator, precedence)` pairs.
impl<'a> FromIterator<(&'a str, u32)> for PrecedenceTable {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut table = PrecedenceTable::empty();
        for (operator, precedence) in iter {
            table.insert(operator, precedence);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_ranks_the_default_operators() {
        let table = PrecedenceTable::default();

        assert_eq!(1, table.precedence_of("="));
        assert_eq!(2, table.precedence_of("+"));
        assert_eq!(2, table.precedence_of("-"));
        assert_eq!(3, table.precedence_of("*"));
        assert_eq!(3, table.precedence_of("/"));
    }

    #[test]
    fn it_returns_zero_for_non_operators() {
        let table = PrecedenceTable::default();

        assert_eq!(0, table.precedence_of("("));
        assert_eq!(0, table.precedence_of("x"));
        assert_eq!(0, table.precedence_of(""));
        assert_eq!(0, table.precedence_of("%"));
    }

    #[test]
    fn it_can_be_extended() {
        let table = PrecedenceTable::default().with("%", 3);

        assert_eq!(3, table.precedence_of("%"));
        assert_eq!(2, table.precedence_of("+"));
    }

    #[test]
    fn it_can_be_built_from_an_iterator() {
        let table = vec![("+", 5), ("^", 9)]
            .into_iter()
            .collect::<PrecedenceTable>();

        assert_eq!(5, table.precedence_of("+"));
        assert_eq!(9, table.precedence_of("^"));
        assert_eq!(0, table.precedence_of("*"));
    }

    #[test]
    #[should_panic]
    fn it_panics_on_a_zero_precedence() {
        let _ = PrecedenceTable::empty().with("+", 0);
    }
}
