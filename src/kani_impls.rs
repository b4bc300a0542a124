//! Kani Arbitrary implementations and proof harnesses for property
//! verification.
//!
//! This module enables property-based verification of the DID grammar
//! with the Kani model checker.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::char_class;
use crate::{stringify, Did, DidParts};

/// Valid characters for method names: small letters and digits
const METHOD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Valid characters for id components: ALPHA / DIGIT / "." / "-"
const ID_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.-";

/// Generate a valid method character
fn arbitrary_method_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % METHOD_CHARS.len();
    METHOD_CHARS[idx] as char
}

/// Generate a valid id character
fn arbitrary_id_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % ID_CHARS.len();
    ID_CHARS[idx] as char
}

impl kani::Arbitrary for Did {
    fn any() -> Self {
        // Generate 1-3 char method and a single 1-4 char id component
        // for tractability
        let method_len: usize = kani::any();
        let method_len = 1 + (method_len % 3);
        let method: String = (0..method_len).map(|_| arbitrary_method_char()).collect();

        let id_len: usize = kani::any();
        let id_len = 1 + (id_len % 4);
        let id: String = (0..id_len).map(|_| arbitrary_id_char()).collect();

        let input = format!("did:{method}:{id}");
        Did::parse(&input).expect("valid DID by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: parse then serialize reproduces the canonical string
#[kani::proof]
#[kani::unwind(12)]
fn proof_parse_roundtrip() {
    let did: Did = kani::any();
    let serialized = did.to_string();
    let reparsed = Did::parse(&serialized).expect("canonical form should parse");
    assert_eq!(reparsed.as_str(), did.as_str());
}

/// Proof: a path in either form suppresses the fragment on output
#[kani::proof]
#[kani::unwind(12)]
fn proof_path_suppresses_fragment() {
    let did: Did = kani::any();
    let mut parts = DidParts::from(&did);
    parts.path = Some("p".to_string());
    parts.fragment = Some("f".to_string());

    let output = stringify(&parts);
    assert!(!output.contains('#'));
    assert!(output.ends_with("/p"));
}

/// Proof: the character classes nest as the grammar requires
#[kani::proof]
fn proof_char_class_containment() {
    let b: u8 = kani::any();

    if char_class::is_digit(b) || char_class::is_small_letter(b) {
        assert!(char_class::is_id_char(b));
    }
    if char_class::is_id_char(b) && b != b'.' && b != b'-' {
        assert!(char_class::is_alpha(b) || char_class::is_digit(b));
    }
    if char_class::is_unreserved_or_sub_delim(b) {
        assert!(char_class::is_path_char(b));
    }
    if char_class::is_path_char(b) {
        assert!(char_class::is_fragment_char(b));
    }
    if !b.is_ascii() {
        assert!(!char_class::is_fragment_char(b));
    }
}

/// Proof: stringify never produces a truncated DID for unusable input
#[kani::proof]
#[kani::unwind(8)]
fn proof_stringify_discards_partial_output() {
    let method_only = DidParts {
        method: Some("example".to_string()),
        ..DidParts::default()
    };
    assert_eq!(stringify(&method_only), "");

    let id_only = DidParts {
        id: Some("123".to_string()),
        ..DidParts::default()
    };
    assert_eq!(stringify(&id_only), "");
}
