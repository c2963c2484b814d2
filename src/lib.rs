//! `librcalc` is the library that powers the rcalc interpreter.
//!
//! `rcalc` evaluates infix integer expressions with variable assignment. A
//! line of input goes through three stages:
//! - a `Scanner` splits the line into lexemes (runs of letters, runs of digits
//!   and single punctuation characters)
//! - a `Parser` climbs operator precedence, as configured by a
//!   `PrecedenceTable`, to build an `Expr` tree
//! - `Expr::evaluate` walks the tree against an `Environment`, the variable
//!   bindings of the current session
//!
//! `Interpreter` ties the three together for callers that just want to feed
//! it lines.
#![warn(clippy::pedantic)]

pub mod core;
