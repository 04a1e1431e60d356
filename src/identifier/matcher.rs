//! Splitting identifiers into parts.
//!
//! `policy.coverage["BASE"].sumInsured` splits into `policy`, `coverage`,
//! `["BASE"]` and `sumInsured`. A bracketed suffix is a part of its own and
//! follows its predecessor without a separator; a `.` inside brackets (or a
//! `]` inside a quoted literal) never ends the part.

use crate::base::TextRegion;

/// What precedes an identifier part in the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Separator {
    /// The first part.
    Start,
    /// A `.` separator.
    Dot,
    /// A bracketed part directly following its predecessor.
    Bracket,
    /// A name part glued to a preceding bracket part, e.g. the `x` in `a[0]x`.
    Missing,
}

impl Separator {
    /// Number of input bytes the separator occupies.
    pub fn width(&self) -> usize {
        match self {
            Separator::Dot => 1,
            Separator::Start | Separator::Bracket | Separator::Missing => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::Dot => ".",
            Separator::Start | Separator::Bracket | Separator::Missing => "",
        }
    }
}

/// One part of an identifier with its position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdentifierPart<'a> {
    pub text: &'a str,
    pub region: TextRegion,
    pub separator: Separator,
}

impl IdentifierPart<'_> {
    pub fn is_bracket(&self) -> bool {
        self.text.starts_with('[')
    }
}

/// Forward cursor over the parts of an identifier.
///
/// The matcher always has a current part; the empty identifier has exactly
/// one empty part at `0..0`.
#[derive(Clone, Debug)]
pub struct IdentifierMatcher<'a> {
    input: &'a str,
    region: TextRegion,
    separator: Separator,
}

impl<'a> IdentifierMatcher<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            region: TextRegion::new(0, part_end(input, 0)),
            separator: Separator::Start,
        }
    }

    /// The whole identifier.
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Text of the current part.
    pub fn identifier_part(&self) -> &'a str {
        &self.input[self.region.start()..self.region.end()]
    }

    /// Region of the current part within the identifier.
    pub fn text_region(&self) -> TextRegion {
        self.region
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn is_bracket_part(&self) -> bool {
        self.identifier_part().starts_with('[')
    }

    pub fn current(&self) -> IdentifierPart<'a> {
        IdentifierPart {
            text: self.identifier_part(),
            region: self.region,
            separator: self.separator,
        }
    }

    pub fn has_next_identifier_part(&self) -> bool {
        self.region.end() < self.input.len()
    }

    /// Advance to the next part.
    ///
    /// # Panics
    /// Panics when called on the last part; check
    /// [`has_next_identifier_part`](Self::has_next_identifier_part) first.
    pub fn next_identifier_part(&mut self) {
        assert!(
            self.has_next_identifier_part(),
            "no identifier part after {} in '{}'",
            self.region,
            self.input
        );
        let position = self.region.end();
        let (start, separator) = match self.input.as_bytes()[position] {
            b'.' => (position + 1, Separator::Dot),
            b'[' => (position, Separator::Bracket),
            _ => (position, Separator::Missing),
        };
        self.region = TextRegion::new(start, part_end(self.input, start));
        self.separator = separator;
    }

    /// All parts of `input`, in order.
    pub fn split(input: &'a str) -> Vec<IdentifierPart<'a>> {
        let mut matcher = Self::new(input);
        let mut parts = vec![matcher.current()];
        while matcher.has_next_identifier_part() {
            matcher.next_identifier_part();
            parts.push(matcher.current());
        }
        parts
    }
}

/// End offset of the part starting at `start`.
fn part_end(input: &str, start: usize) -> usize {
    let bytes = input.as_bytes();
    if bytes.get(start) == Some(&b'[') {
        let mut in_quotes = false;
        for (offset, byte) in bytes[start + 1..].iter().enumerate() {
            match byte {
                b'"' => in_quotes = !in_quotes,
                b']' if !in_quotes => return start + offset + 2,
                _ => {}
            }
        }
        return input.len();
    }
    bytes[start..]
        .iter()
        .position(|byte| matches!(byte, b'.' | b'['))
        .map_or(input.len(), |offset| start + offset)
}
