//! Typestate builder for assembling [`DidParts`] values.
//!
//! This module provides a builder that uses phantom types to enforce
//! at compile-time that the required components are supplied in order:
//! a method first, then at least one id component.

use std::marker::PhantomData;

use crate::parts::DidParts;

/// Marker: no components set yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

/// Marker: the method has been set.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasMethod;

/// Marker: method and at least one id component are set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ready;

/// A typestate builder for [`DidParts`].
///
/// The required components - method, then at least one id component -
/// are enforced at compile-time through the [`Empty`], [`HasMethod`]
/// and [`Ready`] state markers. Path segments and a fragment are
/// optional and only available once the builder is [`Ready`].
///
/// The builder produces a [`DidParts`], so the lenient stringification
/// contract applies: if both path segments and a fragment are supplied,
/// the path wins on output.
///
/// # Examples
///
/// ```
/// use did_uri::{stringify, DidBuilder};
///
/// let parts = DidBuilder::new()
///     .method("example")
///     .id_string("123")
///     .id_string("456")
///     .fragment("keys-1")
///     .build();
///
/// assert_eq!(stringify(&parts), "did:example:123:456#keys-1");
/// ```
///
/// # Compile-Time Safety
///
/// Attempting to skip a required component is a compile error:
///
/// ```compile_fail
/// use did_uri::DidBuilder;
///
/// // Error: cannot add an id component before the method
/// let builder = DidBuilder::new().id_string("123");
/// ```
///
/// ```compile_fail
/// use did_uri::DidBuilder;
///
/// // Error: cannot build without an id component
/// let parts = DidBuilder::new().method("example").build();
/// ```
#[derive(Debug, Clone)]
pub struct DidBuilder<State = Empty> {
    method: Option<String>,
    id_strings: Vec<String>,
    path_segments: Vec<String>,
    fragment: Option<String>,
    _state: PhantomData<State>,
}

impl DidBuilder<Empty> {
    /// Creates a new builder in the initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            method: None,
            id_strings: Vec::new(),
            path_segments: Vec::new(),
            fragment: None,
            _state: PhantomData,
        }
    }

    /// Sets the method name and advances to the [`HasMethod`] state.
    #[must_use]
    pub fn method(self, method: impl Into<String>) -> DidBuilder<HasMethod> {
        DidBuilder {
            method: Some(method.into()),
            id_strings: self.id_strings,
            path_segments: self.path_segments,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl Default for DidBuilder<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl DidBuilder<HasMethod> {
    /// Appends the first id component and advances to the [`Ready`]
    /// state.
    #[must_use]
    pub fn id_string(mut self, component: impl Into<String>) -> DidBuilder<Ready> {
        self.id_strings.push(component.into());
        DidBuilder {
            method: self.method,
            id_strings: self.id_strings,
            path_segments: self.path_segments,
            fragment: self.fragment,
            _state: PhantomData,
        }
    }
}

impl DidBuilder<Ready> {
    /// Appends a further id component.
    #[must_use]
    pub fn id_string(mut self, component: impl Into<String>) -> Self {
        self.id_strings.push(component.into());
        self
    }

    /// Appends a path segment.
    #[must_use]
    pub fn path_segment(mut self, segment: impl Into<String>) -> Self {
        self.path_segments.push(segment.into());
        self
    }

    /// Sets the fragment.
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Finishes the builder, yielding the assembled [`DidParts`].
    #[must_use]
    pub fn build(self) -> DidParts {
        DidParts {
            method: self.method,
            id: None,
            id_strings: self.id_strings,
            path: None,
            path_segments: self.path_segments,
            fragment: self.fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::stringify;
    use crate::Did;

    #[test]
    fn builds_a_minimal_did() {
        let parts = DidBuilder::new().method("example").id_string("123").build();
        assert_eq!(stringify(&parts), "did:example:123");
    }

    #[test]
    fn builds_a_multi_component_id() {
        let parts = DidBuilder::new()
            .method("web")
            .id_string("example.com")
            .id_string("user")
            .id_string("alice")
            .build();
        assert_eq!(stringify(&parts), "did:web:example.com:user:alice");
    }

    #[test]
    fn builds_a_did_with_path() {
        let parts = DidBuilder::new()
            .method("example")
            .id_string("123")
            .path_segment("a")
            .path_segment("b")
            .build();
        assert_eq!(stringify(&parts), "did:example:123/a/b");
    }

    #[test]
    fn path_segments_win_over_fragment() {
        let parts = DidBuilder::new()
            .method("example")
            .id_string("123")
            .path_segment("a")
            .fragment("keys-1")
            .build();
        assert_eq!(stringify(&parts), "did:example:123/a");
    }

    #[test]
    fn built_output_reparses() {
        let parts = DidBuilder::new()
            .method("example")
            .id_string("123")
            .id_string("456")
            .fragment("keys-1")
            .build();
        let did = Did::parse(&stringify(&parts)).unwrap();
        assert_eq!(did.id(), "123:456");
        assert_eq!(did.fragment(), Some("keys-1"));
    }
}
