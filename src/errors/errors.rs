use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error together with the position in the query it refers to.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at byte {} of {})", .position.0, .position.1)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        self.internal_error.name()
    }

    pub fn get_tip(&self) -> ErrorTip {
        self.internal_error.tip()
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("cannot recognize {token:?}")]
    UnrecognisedToken { token: String },
    #[error("cannot find closing quote {quote} for the string {token:?}")]
    UnterminatedString { quote: char, token: String },
    #[error("number cannot be empty")]
    EmptyNumber,
    #[error("missing fractional part in {token:?}")]
    MissingFractionalPart { token: String },
    #[error("missing exponent part in {token:?}")]
    MissingExponentPart { token: String },
    #[error("cannot parse duration {token:?}")]
    InvalidDuration { token: String },
    #[error("invalid duration suffix in {token:?}")]
    InvalidDurationSuffix { token: String },
    #[error("duration cannot be negative; got {token:?}")]
    NegativeDuration { token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid string literal: {token:?}")]
    InvalidStringLiteral { token: String },
    #[error("cannot retreat past the first token")]
    RetreatWithoutHistory,
}

impl ErrorImpl {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::EmptyNumber => "EmptyNumber",
            ErrorImpl::MissingFractionalPart { .. } => "MissingFractionalPart",
            ErrorImpl::MissingExponentPart { .. } => "MissingExponentPart",
            ErrorImpl::InvalidDuration { .. } => "InvalidDuration",
            ErrorImpl::InvalidDurationSuffix { .. } => "InvalidDurationSuffix",
            ErrorImpl::NegativeDuration { .. } => "NegativeDuration",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidStringLiteral { .. } => "InvalidStringLiteral",
            ErrorImpl::RetreatWithoutHistory => "RetreatWithoutHistory",
        }
    }

    pub fn tip(&self) -> ErrorTip {
        match self {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString { quote, .. } => {
                ErrorTip::Suggestion(format!("Add a closing `{}` to the string", quote))
            }
            ErrorImpl::EmptyNumber => ErrorTip::None,
            ErrorImpl::MissingFractionalPart { token } => ErrorTip::Suggestion(format!(
                "Expected digits after `.` in `{}`",
                token
            )),
            ErrorImpl::MissingExponentPart { token } => ErrorTip::Suggestion(format!(
                "Expected digits after the exponent marker in `{}`",
                token
            )),
            ErrorImpl::InvalidDuration { token } => ErrorTip::Suggestion(format!(
                "Invalid duration: `{}`, expected a number followed by one of s, m, h, d, w, y, i",
                token
            )),
            ErrorImpl::InvalidDurationSuffix { token } => ErrorTip::Suggestion(format!(
                "Unknown duration unit in `{}`, expected one of s, m, h, d, w, y, i",
                token
            )),
            ErrorImpl::NegativeDuration { token } => {
                ErrorTip::Suggestion(format!("Duration `{}` must not be negative", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it a valid float literal?",
                token
            )),
            ErrorImpl::InvalidStringLiteral { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a quoted string",
                token
            )),
            ErrorImpl::RetreatWithoutHistory => ErrorTip::Suggestion(String::from(
                "Advance the scanner at least once before retreating",
            )),
        }
    }
}
