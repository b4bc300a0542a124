//! The DID parsing state machine.
//!
//! A single-pass, fail-fast scanner over the input bytes. Each state
//! consumes at least one byte or terminates, so parsing is linear in the
//! input length. The id and path states are re-entrant: encountering
//! their separator re-enters the same state for the next component.

use crate::char_class;
use crate::constants::{MIN_DID_LENGTH, SCHEME_PREFIX};
use crate::did::Did;
use crate::error::ParseErrorKind;

/// Next state returned by the re-entrant scanners.
///
/// The machine is driven by a single loop dispatching on this tag; the
/// method state runs exactly once before the loop starts.
enum Step {
    Id,
    Path,
    Fragment,
    Finish,
}

/// Scanner state for one parse call.
///
/// Owns a cursor into the input plus the accumulated output. A fresh
/// instance is created per call, so concurrent parses share nothing.
pub(crate) struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    cursor: usize,
    method: String,
    id_strings: Vec<String>,
    path_segments: Vec<String>,
    fragment: Option<String>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            cursor: 0,
            method: String::new(),
            id_strings: Vec::new(),
            path_segments: Vec::new(),
            fragment: None,
        }
    }

    /// Runs the machine to completion, producing a [`Did`] or the first
    /// grammar violation encountered.
    pub(crate) fn parse(mut self) -> Result<Did, ParseErrorKind> {
        self.check_length()?;
        self.check_scheme()?;
        self.parse_method()?;

        let mut step = Step::Id;
        loop {
            step = match step {
                Step::Id => self.parse_id()?,
                Step::Path => self.parse_path()?,
                Step::Fragment => self.parse_fragment()?,
                Step::Finish => break,
            };
        }

        Ok(Did::from_parse(
            self.method,
            self.id_strings,
            self.path_segments,
            self.fragment,
        ))
    }

    /// Anything shorter than `did:x:y` cannot be a DID.
    fn check_length(&self) -> Result<(), ParseErrorKind> {
        if self.input.len() < MIN_DID_LENGTH {
            return Err(ParseErrorKind::TooShort {
                actual: self.input.len(),
            });
        }
        Ok(())
    }

    fn check_scheme(&mut self) -> Result<(), ParseErrorKind> {
        if !self.input.starts_with(SCHEME_PREFIX) {
            return Err(ParseErrorKind::BadScheme);
        }
        self.cursor = SCHEME_PREFIX.len();
        Ok(())
    }

    /// Scans the method name up to the `:` that ends it.
    ///
    /// Methods are lowercase-only: every byte must be a digit or a small
    /// letter, a stricter rule than the id character class.
    fn parse_method(&mut self) -> Result<(), ParseErrorKind> {
        let start = self.cursor;
        loop {
            if self.cursor == self.bytes.len() {
                return Err(ParseErrorKind::MissingMethodSeparator);
            }
            let b = self.bytes[self.cursor];
            if b == b':' {
                if self.cursor == start {
                    return Err(ParseErrorKind::EmptyMethod);
                }
                break;
            }
            if !char_class::is_digit(b) && !char_class::is_small_letter(b) {
                return Err(ParseErrorKind::InvalidMethodChar {
                    found: b,
                    position: self.cursor,
                });
            }
            self.cursor += 1;
        }

        self.method = self.input[start..self.cursor].to_string();
        self.cursor += 1;
        Ok(())
    }

    /// Scans one `:`-separated component of the method-specific-id.
    ///
    /// From the grammar: `idstring = 1*idchar`, so a component stopping
    /// where it started is an error.
    fn parse_id(&mut self) -> Result<Step, ParseErrorKind> {
        let start = self.cursor;
        let next = loop {
            if self.cursor == self.bytes.len() {
                break Step::Finish;
            }
            match self.bytes[self.cursor] {
                b':' => break Step::Id,
                b'/' => break Step::Path,
                b'#' => break Step::Fragment,
                b if char_class::is_id_char(b) => self.cursor += 1,
                b => {
                    return Err(ParseErrorKind::InvalidIdChar {
                        found: b,
                        position: self.cursor,
                    });
                }
            }
        };

        if self.cursor == start {
            return Err(ParseErrorKind::EmptyIdComponent { position: start });
        }

        self.id_strings.push(self.input[start..self.cursor].to_string());
        if !matches!(next, Step::Finish) {
            self.cursor += 1;
        }
        Ok(next)
    }

    /// Scans one `/`-separated path segment.
    ///
    /// From the grammar: `did-path = segment-nz *( "/" segment )` - the
    /// first segment must be non-empty, later ones may be empty. A `#`
    /// here is not a delimiter: fragments are only recognized directly
    /// after the id, so a literal `#` in path position fails the `pchar`
    /// check instead of starting a fragment.
    fn parse_path(&mut self) -> Result<Step, ParseErrorKind> {
        let start = self.cursor;
        let next = loop {
            if self.cursor == self.bytes.len() {
                break Step::Finish;
            }
            let b = self.bytes[self.cursor];
            if b == b'/' {
                break Step::Path;
            }
            if b == b'%' {
                self.check_percent_triplet()?;
                self.cursor += 3;
                continue;
            }
            if !char_class::is_path_char(b) {
                return Err(ParseErrorKind::InvalidPathChar {
                    found: b,
                    position: self.cursor,
                });
            }
            self.cursor += 1;
        };

        if self.cursor == start && self.path_segments.is_empty() {
            return Err(ParseErrorKind::EmptyFirstPathSegment { position: start });
        }

        self.path_segments.push(self.input[start..self.cursor].to_string());
        if matches!(next, Step::Path) {
            self.cursor += 1;
        }
        Ok(next)
    }

    /// Scans the fragment through to the end of input.
    ///
    /// From the grammar: `did-fragment = *( pchar / "/" / "?" )` - the
    /// fragment may be empty, so there is no zero-length check.
    fn parse_fragment(&mut self) -> Result<Step, ParseErrorKind> {
        let start = self.cursor;
        loop {
            if self.cursor == self.bytes.len() {
                break;
            }
            let b = self.bytes[self.cursor];
            if b == b'%' {
                self.check_percent_triplet()?;
                self.cursor += 3;
                continue;
            }
            if !char_class::is_fragment_char(b) {
                return Err(ParseErrorKind::InvalidFragmentChar {
                    found: b,
                    position: self.cursor,
                });
            }
            self.cursor += 1;
        }

        self.fragment = Some(self.input[start..self.cursor].to_string());
        Ok(Step::Finish)
    }

    /// Validates that the `%` under the cursor starts a full
    /// percent-encoded triplet.
    fn check_percent_triplet(&self) -> Result<(), ParseErrorKind> {
        if self.cursor + 2 >= self.bytes.len()
            || !char_class::is_hex_digit(self.bytes[self.cursor + 1])
            || !char_class::is_hex_digit(self.bytes[self.cursor + 2])
        {
            return Err(ParseErrorKind::BadPercentEncoding {
                position: self.cursor,
            });
        }
        Ok(())
    }
}
