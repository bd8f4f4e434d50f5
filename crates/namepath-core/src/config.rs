//! NameConfig - 名前値の構築設定
//!
//! JSON で読み込み、区切り文字を検証します。
//!
//! ```json
//! {"delimiter": "/"}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{NameError, Result};
use crate::masking::{DEFAULT_DELIMITER, parse_delimiter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameConfig {
    /// One character, not the escape character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

impl NameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| NameError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter().map(|_| ())
    }

    /// The configured delimiter as a character.
    pub fn delimiter(&self) -> Result<char> {
        parse_delimiter(&self.delimiter)
    }
}
