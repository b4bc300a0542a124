//! Constants for DID validation.

/// The URI scheme.
pub const SCHEME: &str = "did";

/// The scheme prefix every DID starts with, trailing separator included.
pub const SCHEME_PREFIX: &str = "did:";

/// Minimum length of a parseable DID string (`did:x:y`).
pub const MIN_DID_LENGTH: usize = 7;
