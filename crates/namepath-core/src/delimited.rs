//! DelimitedStringName - 一つのマスク済み文字列で保持する名前
//!
//! 構築時に文字列をトークナイズし、各コンポーネントのバイト範囲をキャッシュします。
//! 編集は「コンポーネント列 → リスト操作 → 再結合」で新しい値を作ります。

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component_list::ComponentListName;
use crate::config::NameConfig;
use crate::error::{NameError, Result};
use crate::masking::{
    DEFAULT_DELIMITER, check_delimiter, component_ranges, escape_for_delimiter, join_masked,
    validate_masked,
};
use crate::name::{Name, check_index, check_insert_index, check_stored_components, hash_name};
use crate::repr::NameRepr;

/// A name stored as one masked string.
///
/// The stored string alone cannot tell zero components from a single empty
/// one, so the component ranges are kept alongside it and are authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameRepr", into = "NameRepr")]
pub struct DelimitedStringName {
    delimiter: char,
    masked: String,
    ranges: Vec<Range<usize>>,
}

impl DelimitedStringName {
    /// An empty name using `delimiter`.
    pub fn new(delimiter: char) -> Result<Self> {
        Self::parse("", delimiter)
    }

    pub fn with_config(config: &NameConfig) -> Result<Self> {
        Self::new(config.delimiter()?)
    }

    /// Tokenizes a masked name string.
    ///
    /// The empty string has no components. Construction fails if any parsed
    /// component is not valid masked form for `delimiter`.
    pub fn parse(masked: &str, delimiter: char) -> Result<Self> {
        let delimiter = check_delimiter(delimiter)?;
        let ranges = component_ranges(masked, delimiter);
        for r in &ranges {
            validate_masked(&masked[r.clone()], delimiter)?;
        }
        let name = Self {
            delimiter,
            masked: masked.to_string(),
            ranges,
        };
        name.check_invariants()?;
        Ok(name)
    }

    /// Builds a name from masked components, each validated for `delimiter`.
    pub fn from_components<I, S>(components: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiter = check_delimiter(delimiter)?;
        let components: Vec<String> = components.into_iter().map(Into::into).collect();
        for c in &components {
            validate_masked(c, delimiter)?;
        }
        Self::assemble(delimiter, &components)
    }

    /// Builds a name from raw components, masking each for `delimiter`.
    pub fn from_raw_components<I, S>(components: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let delimiter = check_delimiter(delimiter)?;
        let masked: Vec<String> = components
            .into_iter()
            .map(|raw| escape_for_delimiter(raw.as_ref(), delimiter))
            .collect();
        Self::assemble(delimiter, &masked)
    }

    /// The whole masked string.
    pub fn as_masked_str(&self) -> &str {
        &self.masked
    }

    fn parts(&self) -> Vec<&str> {
        self.components().collect()
    }

    fn assemble<S: AsRef<str>>(delimiter: char, parts: &[S]) -> Result<Self> {
        let name = Self::from_valid_parts(delimiter, parts);
        name.check_invariants()?;
        Ok(name)
    }

    fn from_valid_parts<S: AsRef<str>>(delimiter: char, parts: &[S]) -> Self {
        let mut ranges = Vec::with_capacity(parts.len());
        let mut start = 0;
        for part in parts {
            let end = start + part.as_ref().len();
            ranges.push(start..end);
            start = end + delimiter.len_utf8();
        }
        Self {
            delimiter,
            masked: join_masked(parts, delimiter),
            ranges,
        }
    }

    /// Ranges cover the stored string exactly, separated by single delimiters.
    fn check_ranges(&self) -> Result<()> {
        let mut pos = 0;
        for (i, r) in self.ranges.iter().enumerate() {
            if i > 0 {
                match self.masked.get(pos..) {
                    Some(rest) if rest.starts_with(self.delimiter) => {
                        pos += self.delimiter.len_utf8();
                    }
                    _ => {
                        return Err(NameError::Invariant(format!(
                            "no delimiter before component {i} at byte {pos}"
                        )));
                    }
                }
            }
            if r.start != pos || self.masked.get(r.clone()).is_none() {
                return Err(NameError::Invariant(format!(
                    "component {i} range {r:?} does not follow byte {pos}"
                )));
            }
            pos = r.end;
        }
        if pos != self.masked.len() {
            return Err(NameError::Invariant(format!(
                "component ranges end at byte {pos} of {}",
                self.masked.len()
            )));
        }
        Ok(())
    }
}

impl Default for DelimitedStringName {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            masked: String::new(),
            ranges: Vec::new(),
        }
    }
}

impl Name for DelimitedStringName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn component_count(&self) -> usize {
        self.ranges.len()
    }

    fn component(&self, index: usize) -> Result<&str> {
        check_index(index, self.ranges.len())?;
        Ok(&self.masked[self.ranges[index].clone()])
    }

    fn components(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|r| &self.masked[r.clone()])
    }

    fn with_component(&self, index: usize, masked: &str) -> Result<Self> {
        check_index(index, self.ranges.len())?;
        validate_masked(masked, self.delimiter)?;
        let mut parts = self.parts();
        parts[index] = masked;
        Self::assemble(self.delimiter, &parts)
    }

    fn with_inserted(&self, index: usize, masked: &str) -> Result<Self> {
        check_insert_index(index, self.ranges.len())?;
        validate_masked(masked, self.delimiter)?;
        let mut parts = self.parts();
        parts.insert(index, masked);
        Self::assemble(self.delimiter, &parts)
    }

    fn with_removed(&self, index: usize) -> Result<Self> {
        check_index(index, self.ranges.len())?;
        let mut parts = self.parts();
        parts.remove(index);
        Self::assemble(self.delimiter, &parts)
    }

    fn concat<N: Name>(&self, other: &N) -> Result<Self> {
        let mut parts = self.parts();
        for c in other.components() {
            validate_masked(c, self.delimiter)?;
            parts.push(c);
        }
        Self::assemble(self.delimiter, &parts)
    }

    fn check_invariants(&self) -> Result<()> {
        self.check_ranges()?;
        check_stored_components(self)
    }
}

impl FromStr for DelimitedStringName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DEFAULT_DELIMITER)
    }
}

impl From<&ComponentListName> for DelimitedStringName {
    fn from(name: &ComponentListName) -> Self {
        Self::from_valid_parts(name.delimiter(), name.as_slice())
    }
}

impl From<&DelimitedStringName> for ComponentListName {
    fn from(name: &DelimitedStringName) -> Self {
        ComponentListName::from_valid_parts(name.delimiter, &name.parts())
    }
}

impl fmt::Display for DelimitedStringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_human_string())
    }
}

impl PartialEq for DelimitedStringName {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for DelimitedStringName {}

impl PartialEq<ComponentListName> for DelimitedStringName {
    fn eq(&self, other: &ComponentListName) -> bool {
        self.equals(other)
    }
}

impl PartialEq<DelimitedStringName> for ComponentListName {
    fn eq(&self, other: &DelimitedStringName) -> bool {
        self.equals(other)
    }
}

impl Hash for DelimitedStringName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_name(self, state);
    }
}
