//! Character classes of the DID grammar.
//!
//! Every predicate answers whether a single byte belongs to one of the
//! RFC 3986 / RFC 5234 derived classes the grammar is built from. The
//! grammar is ASCII-only, so the predicates take bytes and any byte
//! outside the ASCII range fails every class. They are part of the
//! public contract: callers may reuse them to pre-validate fragments of
//! input before assembling a DID.
//!
//! Percent-encoding is a three-byte construct and is validated by the
//! parser, not by these single-byte predicates; `%` itself is in no
//! class.
//!
//! # Examples
//!
//! ```
//! use did_uri::char_class;
//!
//! assert!(char_class::is_id_char(b'x'));
//! assert!(char_class::is_id_char(b'.'));
//! assert!(!char_class::is_id_char(b'_'));
//!
//! assert!(char_class::is_path_char(b'@'));
//! assert!(!char_class::is_path_char(b'/'));
//! assert!(char_class::is_fragment_char(b'/'));
//! ```

/// Returns true if the byte is a digit `0`-`9`.
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Returns true if the byte is a big letter `A`-`Z`.
#[must_use]
pub const fn is_big_letter(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Returns true if the byte is a small letter `a`-`z`.
#[must_use]
pub const fn is_small_letter(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Returns true if the byte is a letter `A`-`Z` or `a`-`z`.
#[must_use]
pub const fn is_alpha(b: u8) -> bool {
    is_big_letter(b) || is_small_letter(b)
}

/// Returns true if the byte is a hexadecimal digit (`0`-`9`, `A`-`F`,
/// `a`-`f`).
#[must_use]
pub const fn is_hex_digit(b: u8) -> bool {
    is_digit(b) || matches!(b, b'A'..=b'F' | b'a'..=b'f')
}

/// Returns true if the byte is valid in a method-specific-id component.
///
/// From the grammar: `idchar = ALPHA / DIGIT / "." / "-"`.
#[must_use]
pub const fn is_id_char(b: u8) -> bool {
    is_alpha(b) || is_digit(b) || b == b'.' || b == b'-'
}

/// Returns true if the byte is `unreserved` or `sub-delims` per
/// RFC 3986 appendix A.
///
/// ```text
/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")" / "*" / "+" / "," / ";" / "="
/// ```
#[must_use]
pub const fn is_unreserved_or_sub_delim(b: u8) -> bool {
    is_alpha(b)
        || is_digit(b)
        || matches!(
            b,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
        )
}

/// Returns true if the byte is valid inside a path segment.
///
/// From the grammar: `pchar = unreserved / pct-encoded / sub-delims /
/// ":" / "@"`. Percent-encoded triplets are validated by the parser.
#[must_use]
pub const fn is_path_char(b: u8) -> bool {
    is_unreserved_or_sub_delim(b) || b == b':' || b == b'@'
}

/// Returns true if the byte is valid inside a fragment.
///
/// From the grammar: `did-fragment = *( pchar / "/" / "?" )`.
#[must_use]
pub const fn is_fragment_char(b: u8) -> bool {
    is_path_char(b) || b == b'/' || b == b'?'
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const ALPHA_LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    const DIGITS: &[u8] = b"0123456789";
    const SUB_DELIMS_EXTRA: &[u8] = b"-._~!$&'()*+,;=";

    #[test]
    fn digit_boundaries() {
        for &b in DIGITS {
            assert!(is_digit(b));
        }
        for b in [b'A', b'a', 0x29, 0x40, b'/'] {
            assert!(!is_digit(b));
        }
    }

    #[test]
    fn big_letter_boundaries() {
        for &b in ALPHA_UPPER {
            assert!(is_big_letter(b));
        }
        // 0x40 and 0x5B sit directly outside the A-Z range
        for b in [0x40, 0x5B, b'a', b'z', b'1', b'9', b'-', b'%'] {
            assert!(!is_big_letter(b));
        }
    }

    #[test]
    fn small_letter_boundaries() {
        for &b in ALPHA_LOWER {
            assert!(is_small_letter(b));
        }
        // 0x60 and 0x7B sit directly outside the a-z range
        for b in [0x60, 0x7B, b'A', b'Z', b'1', b'9', b'-', b'%'] {
            assert!(!is_small_letter(b));
        }
    }

    #[test]
    fn alpha_is_union_of_letter_classes() {
        for &b in ALPHA_UPPER {
            assert!(is_alpha(b));
        }
        for &b in ALPHA_LOWER {
            assert!(is_alpha(b));
        }
        for b in [0x40, 0x5B, 0x60, 0x7B, b'0', b'9', b'-', b'%'] {
            assert!(!is_alpha(b));
        }
    }

    #[test]
    fn hex_digit_boundaries() {
        for &b in b"0123456789ABCDEFabcdef" {
            assert!(is_hex_digit(b));
        }
        // 0x40/0x47 and 0x60/0x67 bracket the A-F and a-f ranges
        for b in [b'G', b'g', b'%', 0x40, 0x47, 0x60, 0x67] {
            assert!(!is_hex_digit(b));
        }
    }

    #[test]
    fn id_char_accepts_alpha_digit_dot_dash() {
        for &b in ALPHA_UPPER {
            assert!(is_id_char(b));
        }
        for &b in ALPHA_LOWER {
            assert!(is_id_char(b));
        }
        for &b in DIGITS {
            assert!(is_id_char(b));
        }
        assert!(is_id_char(b'.'));
        assert!(is_id_char(b'-'));
    }

    #[test]
    fn id_char_rejects_everything_else() {
        for &b in b"%^# _~!$&'()*+,;=:@/?" {
            assert!(!is_id_char(b));
        }
    }

    #[test]
    fn unreserved_or_sub_delim_truth_table() {
        for &b in ALPHA_UPPER {
            assert!(is_unreserved_or_sub_delim(b));
        }
        for &b in ALPHA_LOWER {
            assert!(is_unreserved_or_sub_delim(b));
        }
        for &b in DIGITS {
            assert!(is_unreserved_or_sub_delim(b));
        }
        for &b in SUB_DELIMS_EXTRA {
            assert!(is_unreserved_or_sub_delim(b));
        }
        for &b in b"%:@/?" {
            assert!(!is_unreserved_or_sub_delim(b));
        }
    }

    #[test]
    fn path_char_adds_colon_and_at() {
        assert!(is_path_char(b':'));
        assert!(is_path_char(b'@'));
        for &b in SUB_DELIMS_EXTRA {
            assert!(is_path_char(b));
        }
        for &b in b"%/?" {
            assert!(!is_path_char(b));
        }
    }

    #[test]
    fn fragment_char_adds_slash_and_question_mark() {
        assert!(is_fragment_char(b'/'));
        assert!(is_fragment_char(b'?'));
        assert!(is_fragment_char(b':'));
        assert!(is_fragment_char(b'@'));
        for &b in b"%^# " {
            assert!(!is_fragment_char(b));
        }
    }

    #[test]
    fn non_ascii_bytes_fail_every_class() {
        for b in [0x80u8, 0xC3, 0xFF] {
            assert!(!is_alpha(b));
            assert!(!is_hex_digit(b));
            assert!(!is_id_char(b));
            assert!(!is_unreserved_or_sub_delim(b));
            assert!(!is_path_char(b));
            assert!(!is_fragment_char(b));
        }
    }
}
