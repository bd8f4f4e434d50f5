//! Name - 構造化された名前値の共通契約
//!
//! # 二つの表現
//! - [`ComponentListName`](crate::ComponentListName): マスク済みコンポーネントのリスト
//! - [`DelimitedStringName`](crate::DelimitedStringName): 一つのマスク済み文字列
//!
//! どちらも同じ契約を満たし、呼び出し側からは区別できません。
//! 値は不変で、編集操作は常に新しい値を返します。

use std::hash::{Hash, Hasher};

use crate::error::{NameError, Result};
use crate::masking::{
    MACHINE_DELIMITER, check_delimiter, escape_for_delimiter, join_masked, unescape,
    validate_masked,
};

/// A sequence of masked components joined by a single delimiter.
///
/// Edit operations (`with_*`, [`concat`](Name::concat)) leave the receiver
/// untouched and return a new value. Every masked component supplied to them
/// is validated against the receiver's delimiter before anything is built.
pub trait Name: Sized {
    fn delimiter(&self) -> char;

    fn component_count(&self) -> usize;

    /// Masked component at `index`.
    fn component(&self, index: usize) -> Result<&str>;

    /// Masked components in order.
    fn components(&self) -> impl Iterator<Item = &str>;

    fn with_component(&self, index: usize, masked: &str) -> Result<Self>;

    /// `index` may equal [`component_count`](Name::component_count).
    fn with_inserted(&self, index: usize, masked: &str) -> Result<Self>;

    fn with_appended(&self, masked: &str) -> Result<Self> {
        self.with_inserted(self.component_count(), masked)
    }

    fn with_removed(&self, index: usize) -> Result<Self>;

    /// Appends the masked components of `other`, validated against this
    /// value's delimiter.
    fn concat<N: Name>(&self, other: &N) -> Result<Self>;

    fn is_empty(&self) -> bool {
        self.component_count() == 0
    }

    /// Unescaped components joined by this value's delimiter.
    fn as_human_string(&self) -> String {
        self.as_human_string_with(self.delimiter())
    }

    /// Unescaped components joined by `delimiter`. The result is not escaped
    /// and may not parse back.
    fn as_human_string_with(&self, delimiter: char) -> String {
        join_masked(self.components().map(unescape), delimiter)
    }

    /// Components re-masked for [`MACHINE_DELIMITER`] and joined by it.
    fn as_machine_string(&self) -> String {
        let masked = self
            .components()
            .map(|c| escape_for_delimiter(&unescape(c), MACHINE_DELIMITER));
        join_masked(masked, MACHINE_DELIMITER)
    }

    /// Same delimiter and pairwise equal masked components.
    fn equals<N: Name>(&self, other: &N) -> bool {
        self.delimiter() == other.delimiter()
            && self.component_count() == other.component_count()
            && self.components().eq(other.components())
    }

    /// Deterministic 64-bit FNV-1a hash of the delimiter and masked
    /// components. Equal values hash equally regardless of representation.
    fn hash_code(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;

        let mut hash = OFFSET;
        let mut feed = |bytes: &[u8]| {
            for b in bytes {
                hash ^= u64::from(*b);
                hash = hash.wrapping_mul(PRIME);
            }
        };
        let mut buf = [0u8; 4];
        feed(self.delimiter().encode_utf8(&mut buf).as_bytes());
        for c in self.components() {
            // 0xff never occurs in UTF-8, so it separates components unambiguously
            feed(&[0xff]);
            feed(c.as_bytes());
        }
        hash
    }

    /// Re-checks the value's own invariants.
    ///
    /// A failure here is a defect in the representation, never bad input.
    fn check_invariants(&self) -> Result<()> {
        check_stored_components(self)
    }
}

/// Delimiter and stored components of `name` are valid masked form.
pub(crate) fn check_stored_components<N: Name>(name: &N) -> Result<()> {
    check_delimiter(name.delimiter())
        .map_err(|err| NameError::Invariant(format!("delimiter: {err}")))?;
    for c in name.components() {
        validate_masked(c, name.delimiter())
            .map_err(|err| NameError::Invariant(format!("stored component: {err}")))?;
    }
    Ok(())
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(NameError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn check_insert_index(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(NameError::InsertOutOfRange { index, len })
    }
}

/// Feeds a name into a std [`Hasher`] consistently with [`Name::equals`].
pub(crate) fn hash_name<N: Name, H: Hasher>(name: &N, state: &mut H) {
    name.delimiter().hash(state);
    name.component_count().hash(state);
    for c in name.components() {
        c.hash(state);
    }
}
