//! Serialized shape shared by both name representations.
//!
//! ```json
//! {"delimiter": ".", "components": ["usr", "lib\\.d"]}
//! ```
//!
//! Deserialization goes through the validating constructors.

use serde::{Deserialize, Serialize};

use crate::component_list::ComponentListName;
use crate::delimited::DelimitedStringName;
use crate::error::NameError;
use crate::masking::{DEFAULT_DELIMITER, parse_delimiter};
use crate::name::Name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NameRepr {
    #[serde(default = "default_delimiter")]
    delimiter: String,

    #[serde(default)]
    components: Vec<String>,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl NameRepr {
    fn from_name<N: Name>(name: &N) -> Self {
        Self {
            delimiter: name.delimiter().to_string(),
            components: name.components().map(str::to_string).collect(),
        }
    }
}

impl From<ComponentListName> for NameRepr {
    fn from(name: ComponentListName) -> Self {
        Self::from_name(&name)
    }
}

impl From<DelimitedStringName> for NameRepr {
    fn from(name: DelimitedStringName) -> Self {
        Self::from_name(&name)
    }
}

impl TryFrom<NameRepr> for ComponentListName {
    type Error = NameError;

    fn try_from(repr: NameRepr) -> Result<Self, Self::Error> {
        ComponentListName::from_components(repr.components, parse_delimiter(&repr.delimiter)?)
    }
}

impl TryFrom<NameRepr> for DelimitedStringName {
    type Error = NameError;

    fn try_from(repr: NameRepr) -> Result<Self, Self::Error> {
        DelimitedStringName::from_components(repr.components, parse_delimiter(&repr.delimiter)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_name_serializes_masked_components() {
        let name = ComponentListName::from_components(["usr", "lib\\.d"], '.').unwrap();
        let json = serde_json::to_value(&name).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"delimiter": ".", "components": ["usr", "lib\\.d"]})
        );

        let back: ComponentListName = serde_json::from_value(json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn delimited_name_keeps_single_empty_component() {
        let name = DelimitedStringName::default().with_appended("").unwrap();
        let s = serde_json::to_string(&name).unwrap();
        let back: DelimitedStringName = serde_json::from_str(&s).unwrap();
        assert_eq!(back.component_count(), 1);
        assert_eq!(back, name);
    }

    #[test]
    fn delimiter_defaults_to_dot() {
        let name: DelimitedStringName =
            serde_json::from_str(r#"{"components": ["a", "b"]}"#).unwrap();
        assert_eq!(name.delimiter(), '.');
        assert_eq!(name.as_masked_str(), "a.b");
    }

    #[test]
    fn invalid_input_is_rejected() {
        let bad_mask = serde_json::from_str::<ComponentListName>(
            r#"{"delimiter": "/", "components": ["a/b"]}"#,
        );
        assert!(bad_mask.unwrap_err().to_string().contains("unescaped delimiter"));

        let bad_delimiter = serde_json::from_str::<DelimitedStringName>(
            r#"{"delimiter": "::", "components": []}"#,
        );
        assert!(bad_delimiter.unwrap_err().to_string().contains("invalid delimiter"));
    }
}
