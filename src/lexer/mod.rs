//! Lexical analysis for query text.
//!
//! This module contains the scanner that splits a query into raw tokens.
//! It handles:
//!
//! - Identifiers with backslash escapes, quoted strings, numbers and durations
//! - Punctuation, binary operators and tag filter operators (longest match)
//! - Whitespace and `#` comments, which never produce tokens
//! - Pushback through `retreat` for parser lookahead
//!
//! Tokens are returned as raw text. Identifier, string, number and duration
//! values are converted on demand by the functions in `ident` and `literals`.

pub mod chars;
pub mod ident;
pub mod lexer;
pub mod literals;
pub mod scanners;
pub mod tokens;
