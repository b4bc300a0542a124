//! Parser and serializer for Decentralized Identifier (DID) strings.
//!
//! This crate implements parsing, validation, and stringification of
//! DIDs per the DID Core URI grammar.
//!
//! # Overview
//!
//! A DID names a subject through a method and a method-specific
//! identifier, optionally followed by a path or a fragment:
//!
//! ```text
//! did:<method>:<method-specific-id>[/<path>][#<fragment>]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use did_uri::Did;
//!
//! // Parse a DID
//! let did = Did::parse("did:web:example.com:user:alice#keys-1").unwrap();
//!
//! // Access components
//! assert_eq!(did.method(), "web");
//! assert_eq!(did.id(), "example.com:user:alice");
//! assert_eq!(did.fragment(), Some("keys-1"));
//! assert!(did.is_reference());
//!
//! // The canonical form round-trips
//! assert_eq!(did.to_string(), "did:web:example.com:user:alice#keys-1");
//! ```
//!
//! # Assembling DIDs
//!
//! [`stringify`] is the parser's lenient counterpart: it assembles a
//! string from caller-supplied [`DidParts`] and never fails, returning
//! `""` for unusable input instead. The typestate [`DidBuilder`]
//! enforces the required components at compile-time:
//!
//! ```rust
//! use did_uri::{stringify, DidBuilder};
//!
//! let parts = DidBuilder::new()
//!     .method("example")
//!     .id_string("123")
//!     .fragment("keys-1")
//!     .build();
//!
//! assert_eq!(stringify(&parts), "did:example:123#keys-1");
//! ```
//!
//! # Grammar
//!
//! The accepted grammar, with character classes from RFC 3986:
//!
//! ```text
//! did                = "did:" method ":" method-specific-id
//! method             = 1*( %x61-7A / DIGIT )
//! method-specific-id = idstring *( ":" idstring )
//! idstring           = 1*idchar
//! idchar             = ALPHA / DIGIT / "." / "-"
//! did-path           = segment-nz *( "/" segment )
//! did-fragment       = *( pchar / "/" / "?" )
//! pchar              = unreserved / pct-encoded / sub-delims / ":" / "@"
//! ```
//!
//! Fragments are recognized only directly after the method-specific-id;
//! once a path has started, a literal `#` is an invalid path character
//! rather than the start of a fragment.
//!
//! The character-class predicates backing the grammar are exposed in
//! [`char_class`] for callers that want to pre-validate input.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
pub mod char_class;
mod constants;
mod did;
mod error;
#[cfg(kani)]
mod kani_impls;
mod parser;
mod parts;
pub mod prelude;

pub use builder::{DidBuilder, Empty, HasMethod, Ready};
pub use constants::{MIN_DID_LENGTH, SCHEME, SCHEME_PREFIX};
pub use did::Did;
pub use error::{ParseError, ParseErrorKind};
pub use parts::{stringify, DidParts};
