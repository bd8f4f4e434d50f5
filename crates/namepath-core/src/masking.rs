//! Masking - マスク済み（エスケープ済み）コンポーネントの変換と検証
//!
//! A masked component is the wire form of a raw component: every escape
//! character and every delimiter character of the raw value is prefixed with
//! [`ESCAPE_CHARACTER`]. All functions here are pure and scan left to right.

use std::ops::Range;

use crate::error::{NameError, Result};

/// The fixed escape character.
pub const ESCAPE_CHARACTER: char = '\\';

/// Delimiter used when none is given.
pub const DEFAULT_DELIMITER: char = '.';

/// Canonical delimiter of the machine string form.
pub const MACHINE_DELIMITER: char = DEFAULT_DELIMITER;

/// Removes one level of escaping.
///
/// A trailing escape with nothing after it is dropped. Callers that need the
/// strict behavior validate with [`validate_masked`] first.
pub fn unescape(masked: &str) -> String {
    let mut out = String::with_capacity(masked.len());
    let mut chars = masked.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}

/// Masks a raw component for `delimiter`.
pub fn escape_for_delimiter(raw: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == ESCAPE_CHARACTER || ch == delimiter {
            out.push(ESCAPE_CHARACTER);
        }
        out.push(ch);
    }
    out
}

/// Checks that `masked` is a well-formed masked component for `delimiter`.
///
/// Fails with [`NameError::DanglingEscape`] when an escape character ends the
/// string and with [`NameError::UnescapedDelimiter`] when a delimiter appears
/// outside an escape sequence.
pub fn validate_masked(masked: &str, delimiter: char) -> Result<()> {
    let mut chars = masked.chars();
    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                tracing::debug!(component = masked, "rejected masked component: dangling escape");
                return Err(NameError::DanglingEscape {
                    component: masked.to_string(),
                });
            }
        } else if ch == delimiter {
            tracing::debug!(
                component = masked,
                %delimiter,
                "rejected masked component: unescaped delimiter"
            );
            return Err(NameError::UnescapedDelimiter {
                component: masked.to_string(),
                delimiter,
            });
        }
    }
    Ok(())
}

/// Rejects the escape character as a delimiter.
pub fn check_delimiter(delimiter: char) -> Result<char> {
    if delimiter == ESCAPE_CHARACTER {
        tracing::debug!(%delimiter, "rejected delimiter: escape character");
        return Err(NameError::InvalidDelimiter(format!(
            "{delimiter:?} is the escape character"
        )));
    }
    Ok(delimiter)
}

/// Parses a textual delimiter, which must be exactly one character.
pub fn parse_delimiter(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => check_delimiter(ch),
        _ => {
            tracing::debug!(delimiter = text, "rejected delimiter: not a single character");
            Err(NameError::InvalidDelimiter(format!(
                "{text:?} must be exactly one character"
            )))
        }
    }
}

/// Byte ranges of the masked components of `masked`.
///
/// An escape character always takes the following character with it, so an
/// escaped delimiter never splits. The empty string has no components; a
/// trailing delimiter produces a trailing empty component.
pub(crate) fn component_ranges(masked: &str, delimiter: char) -> Vec<Range<usize>> {
    if masked.is_empty() {
        return Vec::new();
    }
    let mut ranges = Vec::new();
    let mut start = 0;
    let mut chars = masked.char_indices();
    while let Some((pos, ch)) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            chars.next();
        } else if ch == delimiter {
            ranges.push(start..pos);
            start = pos + ch.len_utf8();
        }
    }
    ranges.push(start..masked.len());
    tracing::trace!(input = masked, components = ranges.len(), "tokenized masked name");
    ranges
}

/// Splits a masked name string into its masked components.
pub fn split_masked(masked: &str, delimiter: char) -> Vec<String> {
    component_ranges(masked, delimiter)
        .into_iter()
        .map(|r| masked[r].to_string())
        .collect()
}

/// Joins already-masked components. No escaping is applied.
pub fn join_masked<I, S>(components: I, delimiter: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, c) in components.into_iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(c.as_ref());
    }
    out
}
