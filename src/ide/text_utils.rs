//! Locating identifiers inside a line of formula text.
//!
//! Offsets are byte offsets into the line, like [`TextRegion`](crate::base::TextRegion).

/// Check if a character may appear in an identifier part.
///
/// Uses Unicode Standard Annex #31 rules for identifier characters, plus the
/// `@` of default-value access.
#[inline]
pub fn is_identifier_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c) || c == '@'
}

/// Scanner state while walking a line forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scan {
    Identifier,
    /// Inside `[...]` of an identifier.
    Bracket { quoted: bool },
    /// Inside a string literal of the formula itself.
    Literal,
}

/// The identifier being typed at `caret`: its start offset and its text up to the caret.
///
/// Dots, brackets and quoted qualifier literals belong to the identifier;
/// any other character (operators, spaces, parentheses) starts a new one.
/// Returns `None` inside a string literal or when `caret` is not a
/// character boundary of `line`.
///
/// # Example
/// ```
/// use formula_ident::ide::identifier_before_caret;
///
/// let line = r#"1.5 * policy.coverage["BASE"].sum"#;
/// assert_eq!(
///     identifier_before_caret(line, line.len()),
///     Some((6, r#"policy.coverage["BASE"].sum"#))
/// );
/// assert_eq!(identifier_before_caret("a + ", 4), Some((4, "")));
/// ```
pub fn identifier_before_caret(line: &str, caret: usize) -> Option<(usize, &str)> {
    let (start, _) = scan_before(line, caret)?;
    Some((start, &line[start..caret]))
}

/// Scan `line` up to `caret`; the identifier start and the scanner state at the caret.
fn scan_before(line: &str, caret: usize) -> Option<(usize, Scan)> {
    let before = line.get(..caret)?;
    let mut start = 0;
    let mut scan = Scan::Identifier;
    for (offset, c) in before.char_indices() {
        scan = match (scan, c) {
            (Scan::Literal, '"') => {
                start = offset + 1;
                Scan::Identifier
            }
            (Scan::Literal, _) => Scan::Literal,
            (Scan::Bracket { quoted }, '"') => Scan::Bracket { quoted: !quoted },
            (Scan::Bracket { quoted: false }, ']') => Scan::Identifier,
            (Scan::Bracket { .. }, _) => scan,
            (Scan::Identifier, '[') => Scan::Bracket { quoted: false },
            (Scan::Identifier, '"') => Scan::Literal,
            (Scan::Identifier, '.') => Scan::Identifier,
            (Scan::Identifier, c) if is_identifier_character(c) => Scan::Identifier,
            (Scan::Identifier, c) => {
                start = offset + c.len_utf8();
                Scan::Identifier
            }
        };
    }
    if scan == Scan::Literal {
        return None;
    }
    Some((start, scan))
}

/// The whole identifier around `offset`: its start offset and full text.
///
/// Extends [`identifier_before_caret`] forward over identifier characters,
/// dots and brackets. A bracket open at `offset` runs through its closing
/// `]`, skipping quoted literals. Returns `None` when there is no
/// identifier at `offset`.
pub fn identifier_at(line: &str, offset: usize) -> Option<(usize, &str)> {
    let (start, mut scan) = scan_before(line, offset)?;
    let bytes = line.as_bytes();
    let mut end = offset;
    while end < line.len() {
        if let Scan::Bracket { quoted } = scan {
            scan = match bytes[end] {
                b'"' => Scan::Bracket { quoted: !quoted },
                b']' if !quoted => Scan::Identifier,
                _ => scan,
            };
            end += 1;
            continue;
        }
        match bytes[end] {
            b'[' => {
                scan = Scan::Bracket { quoted: false };
                end += 1;
            }
            b'.' => end += 1,
            _ => {
                let c = line[end..].chars().next()?;
                if !is_identifier_character(c) {
                    break;
                }
                end += c.len_utf8();
            }
        }
    }
    let text = &line[start..end];
    (!text.is_empty()).then_some((start, text))
}
