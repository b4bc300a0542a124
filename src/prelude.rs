//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use did_uri::prelude::*;
//!
//! let did = Did::parse("did:example:123456789abcdefghi").unwrap();
//! ```
//!
//! Builder state markers (`Empty`, `HasMethod`, `Ready`) are
//! intentionally excluded as they are implementation details.

pub use crate::{
    // Core types
    Did, DidParts,
    // Builder
    DidBuilder,
    // Operations
    char_class, stringify,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    MIN_DID_LENGTH, SCHEME, SCHEME_PREFIX,
};
