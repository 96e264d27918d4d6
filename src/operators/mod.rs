//! Binary operator model for the query language.
//!
//! This module is independent of the scanner. It provides:
//!
//! - Operator identity and case-insensitive lookup
//! - Precedence and associativity used to build expression trees
//! - Modifier classification (`on`/`ignoring`, `group_left`/`group_right`, `bool`)
//! - Scalar evaluation of a resolved binary expression
//!
//! A parser climbing precedence treats operators of equal priority as
//! left-associative, except `^` which groups to the right.

pub mod eval;
pub mod table;

#[cfg(test)]
mod tests;
