//! Loose DID values and the stringifier.
//!
//! [`DidParts`] is the caller-constructed counterpart of [`Did`]: a
//! plain record with no validation and no derived fields, fed to
//! [`stringify`] to assemble a DID string. The stringifier is
//! deliberately lenient where the parser is strict - it never fails,
//! and structurally unusable input yields an empty string the caller
//! must check for.

use crate::constants::SCHEME_PREFIX;
use crate::did::Did;

/// An unvalidated set of DID components.
///
/// Fields come in direct/derived pairs: `id` wins over `id_strings` and
/// `path` wins over `path_segments` when both are present. `None` (and,
/// for `id`/`path`, the empty string) means "absent, fall through to
/// the other form". A `fragment` of `Some("")` is present-but-empty and
/// renders as a bare `#`.
///
/// # Examples
///
/// ```
/// use did_uri::{stringify, DidParts};
///
/// let parts = DidParts {
///     method: Some("example".into()),
///     id: Some("123".into()),
///     ..DidParts::default()
/// };
/// assert_eq!(stringify(&parts), "did:example:123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DidParts {
    /// The method name
    pub method: Option<String>,
    /// The method-specific-id as a single string
    pub id: Option<String>,
    /// The method-specific-id as `:`-separated components
    pub id_strings: Vec<String>,
    /// The path as a single string, without the leading `/`
    pub path: Option<String>,
    /// The path as `/`-separated segments
    pub path_segments: Vec<String>,
    /// The fragment, without the leading `#`
    pub fragment: Option<String>,
}

impl DidParts {
    /// Returns true if the value carries a path or a fragment.
    ///
    /// ```
    /// use did_uri::DidParts;
    ///
    /// let bare = DidParts {
    ///     method: Some("example".into()),
    ///     id: Some("123".into()),
    ///     ..DidParts::default()
    /// };
    /// assert!(!bare.is_reference());
    ///
    /// let with_path = DidParts {
    ///     path: Some("a/b".into()),
    ///     ..bare.clone()
    /// };
    /// assert!(with_path.is_reference());
    /// ```
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.path.as_deref().is_some_and(|p| !p.is_empty())
            || !self.path_segments.is_empty()
            || self.fragment.is_some()
    }
}

impl From<&Did> for DidParts {
    fn from(did: &Did) -> Self {
        Self {
            method: Some(did.method().to_string()),
            id: Some(did.id().to_string()),
            id_strings: did.id_strings().to_vec(),
            path: (!did.path().is_empty()).then(|| did.path().to_string()),
            path_segments: did.path_segments().to_vec(),
            fragment: did.fragment().map(str::to_string),
        }
    }
}

impl From<Did> for DidParts {
    fn from(did: Did) -> Self {
        Self::from(&did)
    }
}

/// Assembles a DID string from loose parts.
///
/// Total function with no failure path: if the parts lack a method or
/// any form of id, the whole string is discarded and `""` is returned
/// rather than a truncated prefix.
///
/// A path - in either form - always suppresses the fragment, mirroring
/// the grammar fact that the two compete for the same trailing
/// position.
///
/// # Examples
///
/// ```
/// use did_uri::{stringify, DidParts};
///
/// let parts = DidParts {
///     method: Some("example".into()),
///     id_strings: vec!["123".into(), "456".into()],
///     fragment: Some("keys-1".into()),
///     ..DidParts::default()
/// };
/// assert_eq!(stringify(&parts), "did:example:123:456#keys-1");
///
/// // Path wins over fragment when a caller supplies both
/// let parts = DidParts {
///     path: Some("a/b".into()),
///     ..parts
/// };
/// assert_eq!(stringify(&parts), "did:example:123:456/a/b");
///
/// // Unusable input yields an empty string, never a partial DID
/// assert_eq!(stringify(&DidParts::default()), "");
/// ```
#[must_use]
pub fn stringify(parts: &DidParts) -> String {
    let Some(method) = parts.method.as_deref() else {
        return String::new();
    };
    if method.is_empty() {
        return String::new();
    }

    let mut out = String::from(SCHEME_PREFIX);
    out.push_str(method);
    out.push(':');

    if let Some(id) = parts.id.as_deref().filter(|id| !id.is_empty()) {
        out.push_str(id);
    } else if parts.id_strings.is_empty() {
        return String::new();
    } else {
        out.push_str(&parts.id_strings.join(":"));
    }

    if let Some(path) = parts.path.as_deref().filter(|p| !p.is_empty()) {
        out.push('/');
        out.push_str(path);
    } else if !parts.path_segments.is_empty() {
        out.push('/');
        out.push_str(&parts.path_segments.join("/"));
    } else if let Some(fragment) = &parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }

    out
}
