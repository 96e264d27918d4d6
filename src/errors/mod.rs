//! Error types for the query front end.
//!
//! This module defines the errors produced while scanning query text and
//! converting literal tokens. It includes:
//!
//! - `ErrorImpl`, one variant per kind of lexical failure
//! - `Error`, an `ErrorImpl` with the position of the offending text
//! - `ErrorTip`, an optional hint shown next to a diagnostic

pub mod errors;
