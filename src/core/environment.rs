use std::collections::HashMap;
use std::iter::FromIterator;

use super::{RcalcError, Result};

/// The variable bindings of one interpreter session.
///
/// Bindings are only ever added or overwritten, never removed. An
/// `Environment` is passed explicitly to `Expr::evaluate`, so independent
/// sessions never see each other's variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    values: HashMap<String, i64>,
}

impl Environment {
    /// Creates a new empty environment.
    #[must_use]
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_owned(), value);
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// Returns `Err(RcalcError::UndefinedVariable(name))` if `name` was never
    /// assigned.
    pub fn get(&self, name: &str) -> Result<i64> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RcalcError::UndefinedVariable(name.to_owned()))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Constructs an environment from an iterator.
impl FromIterator<(String, i64)> for Environment {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, i64)>,
    {
        let mut values = HashMap::new();
        values.extend(iter);

        Environment { values }
    }
}
