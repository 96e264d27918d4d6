use std::fmt::Display;

use crate::operators::table::is_binary_op;

use super::{
    chars::{is_ident_prefix, is_positive_duration, is_positive_number_prefix, is_string_prefix},
    scanners::scan_tag_filter_op_prefix,
};

/// Shape of a raw token. The scanner never attaches a kind to what it
/// emits; callers that want one derive it from the token text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Punctuation,
    Identifier,
    String,
    Duration,
    Number,
    BinaryOp,
    TagFilterOp,
    Unknown,
}

impl TokenKind {
    /// Classifies a token produced by the scanner. Word operators such as
    /// `and` are identifiers by shape; check them with `is_binary_op`.
    pub fn of(token: &str) -> TokenKind {
        if token.is_empty() {
            return TokenKind::EOF;
        }

        if matches!(token, "{" | "}" | "[" | "]" | "(" | ")" | ",") {
            TokenKind::Punctuation
        } else if is_ident_prefix(token) {
            TokenKind::Identifier
        } else if is_string_prefix(token) {
            TokenKind::String
        } else if is_binary_op(token) {
            TokenKind::BinaryOp
        } else if scan_tag_filter_op_prefix(token) == Some(token.len()) {
            TokenKind::TagFilterOp
        } else if is_positive_duration(token) {
            TokenKind::Duration
        } else if is_positive_number_prefix(token) {
            TokenKind::Number
        } else {
            TokenKind::Unknown
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
