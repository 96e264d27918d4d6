//! Utility macros for the scanner.
//!
//! - `MK_ERROR!` - Creates an Error positioned inside a query
//! - `MK_SCAN_RULE!` - Creates an entry of the scanner's ordered rule table

/// Creates an Error instance at a byte offset of a named query.
///
/// # Arguments
///
/// * `$kind` - The ErrorImpl
/// * `$offset` - Byte offset of the offending text
/// * `$file` - `Rc<String>` naming the query source
///
/// # Example
///
/// ```ignore
/// let error = MK_ERROR!(ErrorImpl::EmptyNumber, scanner.offset(), scanner.file);
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $offset:expr, $file:expr) => {
        $crate::errors::errors::Error::new(
            $kind,
            $crate::Position(
                ::std::primitive::u32::try_from($offset).unwrap_or(::std::primitive::u32::MAX),
                ::std::rc::Rc::clone(&$file),
            ),
        )
    };
}

/// Creates a scan rule pairing a name (used in trace output) with the
/// sub-scanner that tries to match the start of the remaining input.
///
/// # Example
///
/// ```ignore
/// static RULES: &[ScanRule] = &[MK_SCAN_RULE!("punctuation", scan_punctuation)];
/// ```
#[macro_export]
macro_rules! MK_SCAN_RULE {
    ($name:literal, $scanner:expr) => {
        $crate::lexer::scanners::ScanRule {
            name: $name,
            scanner: $scanner,
        }
    };
}
