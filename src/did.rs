//! The parsed DID value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::constants::SCHEME_PREFIX;
use crate::error::ParseError;
use crate::parser::Parser;

/// A parsed and validated Decentralized Identifier.
///
/// # Structure
///
/// ```text
/// did:<method>:<method-specific-id>[/<path>][#<fragment>]
/// ```
///
/// A successful parse populates the derived fields eagerly: `id` is the
/// id components joined with `:`, `path` is the path segments joined
/// with `/`, and the canonical string form is precomputed so `Display`
/// and `as_str` are allocation-free.
///
/// The grammar never fills both trailing positions: a path, once
/// started, runs to the end of the input, so a parsed value carries a
/// path or a fragment but not both.
///
/// # Examples
///
/// ```
/// use did_uri::Did;
///
/// let did = Did::parse("did:example:123456789abcdefghi").unwrap();
/// assert_eq!(did.method(), "example");
/// assert_eq!(did.id(), "123456789abcdefghi");
/// assert!(!did.is_reference());
///
/// // Multi-component ids and references
/// let did = Did::parse("did:web:example.com:user:alice#keys-1").unwrap();
/// assert_eq!(did.id_strings(), ["example.com", "user", "alice"]);
/// assert_eq!(did.fragment(), Some("keys-1"));
/// assert!(did.is_reference());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Did {
    method: String,
    id_strings: Vec<String>,
    id: String,
    path_segments: Vec<String>,
    path: String,
    fragment: Option<String>,
    /// Canonical string representation
    normalized: String,
}

impl Did {
    /// Parses a DID from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if:
    /// - The input is shorter than `did:x:y`
    /// - The input does not begin with the `did:` scheme
    /// - The method name is empty, unterminated, or contains a
    ///   character outside `a`-`z` / `0`-`9`
    /// - Any id component is empty or contains an invalid character
    /// - A path or fragment contains an invalid character or a
    ///   malformed percent-encoded triplet
    /// - The first path segment is empty
    ///
    /// ```
    /// use did_uri::{Did, ParseErrorKind};
    ///
    /// let err = Did::parse("did::1234").unwrap_err();
    /// assert_eq!(err.kind, ParseErrorKind::EmptyMethod);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Parser::new(input).parse().map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Assembles the value from the parser's accumulated output,
    /// computing the derived fields.
    pub(crate) fn from_parse(
        method: String,
        id_strings: Vec<String>,
        path_segments: Vec<String>,
        fragment: Option<String>,
    ) -> Self {
        let id = id_strings.join(":");
        let path = path_segments.join("/");

        let mut normalized = String::from(SCHEME_PREFIX);
        normalized.push_str(&method);
        normalized.push(':');
        normalized.push_str(&id);
        if path_segments.is_empty() {
            if let Some(frag) = &fragment {
                normalized.push('#');
                normalized.push_str(frag);
            }
        } else {
            normalized.push('/');
            normalized.push_str(&path);
        }

        Self {
            method,
            id_strings,
            id,
            path_segments,
            path,
            fragment,
            normalized,
        }
    }

    /// Returns the method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the `:`-separated components of the method-specific-id.
    #[must_use]
    pub fn id_strings(&self) -> &[String] {
        &self.id_strings
    }

    /// Returns the method-specific-id, components joined with `:`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the path segments. Empty when the DID has no path.
    #[must_use]
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    /// Returns the path, segments joined with `/`. Empty when the DID
    /// has no path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the fragment, if present.
    ///
    /// `Some("")` means the input carried a bare `#` and is distinct
    /// from no fragment at all.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true if this value is a DID reference: it carries a path
    /// or a fragment addressing a resource relative to the DID.
    ///
    /// ```
    /// use did_uri::Did;
    ///
    /// assert!(!Did::parse("did:example:123").unwrap().is_reference());
    /// assert!(Did::parse("did:example:123/a/b").unwrap().is_reference());
    /// assert!(Did::parse("did:example:123#keys-1").unwrap().is_reference());
    /// ```
    #[must_use]
    pub fn is_reference(&self) -> bool {
        !self.path.is_empty() || !self.path_segments.is_empty() || self.fragment.is_some()
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for Did {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Did {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for Did {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for Did {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Did {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
