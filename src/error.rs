//! Error types for DID parsing.

use std::fmt;

use crate::constants::MIN_DID_LENGTH;

/// Error returned when a DID string fails to parse.
///
/// Carries the full input alongside the specific [`ParseErrorKind`], so
/// callers can both display a useful message and branch on the exact
/// grammar violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Each variant corresponds to one grammar check; parsing aborts at the
/// first violation, so the kind always describes the earliest offending
/// byte. Positions are byte offsets into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input is shorter than the minimum parseable DID (`did:x:y`)
    TooShort {
        /// Actual length of the input
        actual: usize,
    },
    /// Input does not begin with the `did:` scheme
    BadScheme,
    /// Method name contains a character outside `a`-`z` / `0`-`9`
    InvalidMethodChar {
        /// The offending byte
        found: u8,
        /// Byte offset in the input
        position: usize,
    },
    /// Input ended before a `:` marking the end of the method name
    MissingMethodSeparator,
    /// The method name is empty (`did::...`)
    EmptyMethod,
    /// An id component contains a character outside `ALPHA / DIGIT / "." / "-"`
    InvalidIdChar {
        /// The offending byte
        found: u8,
        /// Byte offset in the input
        position: usize,
    },
    /// An id component is empty (`did:a::1`, `did:a:1:`)
    EmptyIdComponent {
        /// Byte offset where the empty component starts
        position: usize,
    },
    /// A `%` is not followed by exactly two hexadecimal digits
    BadPercentEncoding {
        /// Byte offset of the `%`
        position: usize,
    },
    /// A path segment contains a character outside the `pchar` set
    InvalidPathChar {
        /// The offending byte
        found: u8,
        /// Byte offset in the input
        position: usize,
    },
    /// The first path segment is empty (`did:a:1/`)
    EmptyFirstPathSegment {
        /// Byte offset where the segment starts
        position: usize,
    },
    /// The fragment contains a character outside `pchar / "/" / "?"`
    InvalidFragmentChar {
        /// The offending byte
        found: u8,
        /// Byte offset in the input
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse DID '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { actual } => {
                write!(f, "input length {actual} is below the minimum {MIN_DID_LENGTH}")
            }
            Self::BadScheme => write!(f, "input does not begin with the 'did:' scheme"),
            Self::InvalidMethodChar { found, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {position}; method names may contain only a-z and 0-9",
                    found.escape_ascii()
                )
            }
            Self::MissingMethodSeparator => {
                write!(f, "missing ':' marking the end of the method name")
            }
            Self::EmptyMethod => write!(f, "method name cannot be empty"),
            Self::InvalidIdChar { found, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {position}; id components may contain only ALPHA, DIGIT, '.' and '-'",
                    found.escape_ascii()
                )
            }
            Self::EmptyIdComponent { position } => {
                write!(f, "id component at position {position} must be at least one character long")
            }
            Self::BadPercentEncoding { position } => {
                write!(f, "'%' at position {position} is not followed by two hex digits")
            }
            Self::InvalidPathChar { found, position } => {
                write!(
                    f,
                    "character '{}' at position {position} is not allowed in a path",
                    found.escape_ascii()
                )
            }
            Self::EmptyFirstPathSegment { position } => {
                write!(f, "first path segment at position {position} must be at least one character long")
            }
            Self::InvalidFragmentChar { found, position } => {
                write!(
                    f,
                    "character '{}' at position {position} is not allowed in a fragment",
                    found.escape_ascii()
                )
            }
        }
    }
}

impl std::error::Error for ParseErrorKind {}
