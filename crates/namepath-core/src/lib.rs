//! namepath-core
//!
//! Structured names: sequences of masked components joined by a single
//! delimiter character.
//!
//! # モジュール構成
//! - **masking**: エスケープ / アンエスケープ、マスク検証、トークナイザ
//! - **name**: 共通契約（`Name` trait）
//! - **component_list**: コンポーネントのリストで保持する表現
//! - **delimited**: 一つのマスク済み文字列で保持する表現
//! - **config**: 区切り文字の設定
//! - **error**: エラー型と分類

pub mod component_list;
pub mod config;
pub mod delimited;
pub mod error;
pub mod masking;
pub mod name;

mod repr;

pub use component_list::ComponentListName;
pub use config::NameConfig;
pub use delimited::DelimitedStringName;
pub use error::{ErrorKind, NameError, Result};
pub use masking::{DEFAULT_DELIMITER, ESCAPE_CHARACTER, MACHINE_DELIMITER};
pub use name::Name;
