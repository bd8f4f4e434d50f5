//! ComponentListName - マスク済みコンポーネントのリストで保持する名前

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::config::NameConfig;
use crate::error::Result;
use crate::masking::{DEFAULT_DELIMITER, check_delimiter, escape_for_delimiter, validate_masked};
use crate::name::{Name, check_index, check_insert_index, hash_name};
use crate::repr::NameRepr;

/// A name stored as an ordered list of masked components.
///
/// Component access is O(1); every edit copies the list into the new value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "NameRepr", into = "NameRepr")]
pub struct ComponentListName {
    delimiter: char,
    components: Vec<String>,
}

impl ComponentListName {
    /// An empty name using `delimiter`.
    pub fn new(delimiter: char) -> Result<Self> {
        Self::from_components(Vec::<String>::new(), delimiter)
    }

    pub fn with_config(config: &NameConfig) -> Result<Self> {
        Self::new(config.delimiter()?)
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
        Self::assemble(delimiter, components)
    }

    /// Builds a name from raw components, masking each for `delimiter`.
    pub fn from_raw_components<I, S>(components: I, delimiter: char) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let delimiter = check_delimiter(delimiter)?;
        let components = components
            .into_iter()
            .map(|raw| escape_for_delimiter(raw.as_ref(), delimiter))
            .collect();
        Self::assemble(delimiter, components)
    }

    fn assemble(delimiter: char, components: Vec<String>) -> Result<Self> {
        let name = Self {
            delimiter,
            components,
        };
        name.check_invariants()?;
        Ok(name)
    }

    /// Builds from components already known to be valid for `delimiter`.
    pub(crate) fn from_valid_parts<S: AsRef<str>>(delimiter: char, parts: &[S]) -> Self {
        Self {
            delimiter,
            components: parts.iter().map(|p| p.as_ref().to_string()).collect(),
        }
    }

    /// Masked components as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.components
    }
}

impl Default for ComponentListName {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            components: Vec::new(),
        }
    }
}

impl Name for ComponentListName {
    fn delimiter(&self) -> char {
        self.delimiter
    }

    fn component_count(&self) -> usize {
        self.components.len()
    }

    fn component(&self, index: usize) -> Result<&str> {
        check_index(index, self.components.len())?;
        Ok(&self.components[index])
    }

    fn components(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(String::as_str)
    }

    fn with_component(&self, index: usize, masked: &str) -> Result<Self> {
        check_index(index, self.components.len())?;
        validate_masked(masked, self.delimiter)?;
        let mut components = self.components.clone();
        components[index] = masked.to_string();
        Self::assemble(self.delimiter, components)
    }

    fn with_inserted(&self, index: usize, masked: &str) -> Result<Self> {
        check_insert_index(index, self.components.len())?;
        validate_masked(masked, self.delimiter)?;
        let mut components = self.components.clone();
        components.insert(index, masked.to_string());
        Self::assemble(self.delimiter, components)
    }

    fn with_removed(&self, index: usize) -> Result<Self> {
        check_index(index, self.components.len())?;
        let mut components = self.components.clone();
        components.remove(index);
        Self::assemble(self.delimiter, components)
    }

    fn concat<N: Name>(&self, other: &N) -> Result<Self> {
        let mut components = Vec::with_capacity(self.components.len() + other.component_count());
        components.extend(self.components.iter().cloned());
        for c in other.components() {
            validate_masked(c, self.delimiter)?;
            components.push(c.to_string());
        }
        Self::assemble(self.delimiter, components)
    }
}

impl fmt::Display for ComponentListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_human_string())
    }
}

impl PartialEq for ComponentListName {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ComponentListName {}

impl Hash for ComponentListName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_name(self, state);
    }
}
