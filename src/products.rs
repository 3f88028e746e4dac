//! Products

use std::{
    borrow::{Borrow, Cow},
    fmt,
};

use serde::{Deserialize, Serialize};

/// Product kind identifier.
///
/// Kinds are open-ended string keys: the four built-in fuels have associated
/// constants, and any other key may be registered with a pricing strategy at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKind(Cow<'static, str>);

impl ProductKind {
    /// Diesel
    pub const DIESEL: Self = Self::from_static("diesel");

    /// Gasoline
    pub const GASOLINE: Self = Self::from_static("gasolina");

    /// Ethanol
    pub const ETHANOL: Self = Self::from_static("etanol");

    /// Lubricant
    pub const LUBRICANT: Self = Self::from_static("lubrificante");

    /// The kinds priced out of the box.
    pub const BUILT_IN: [Self; 4] = [Self::DIESEL, Self::GASOLINE, Self::ETHANOL, Self::LUBRICANT];

    /// Create a product kind from any string key.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    /// Create a product kind from a static key, usable in const contexts.
    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// The string key of this kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductKind {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ProductKind {
    fn from(key: &'static str) -> Self {
        Self::from_static(key)
    }
}

impl From<String> for ProductKind {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;

    #[test]
    fn built_in_kinds_use_portuguese_keys() {
        let built_in = ProductKind::BUILT_IN;
        let keys: Vec<&str> = built_in.iter().map(ProductKind::as_str).collect();

        assert_eq!(keys, ["diesel", "gasolina", "etanol", "lubrificante"]);
    }

    #[test]
    fn owned_and_static_keys_compare_equal() {
        assert_eq!(ProductKind::from(String::from("diesel")), ProductKind::DIESEL);
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = FxHashMap::default();
        map.insert(ProductKind::new("querosene"), 1);

        assert_eq!(map.get("querosene"), Some(&1));
        assert_eq!(map.get("diesel"), None);
    }

    #[test]
    fn display_writes_key() {
        assert_eq!(ProductKind::LUBRICANT.to_string(), "lubrificante");
    }

    #[test]
    fn deserializes_from_plain_string() -> testresult::TestResult {
        let kind: ProductKind = serde_norway::from_str("etanol")?;

        assert_eq!(kind, ProductKind::ETHANOL);

        Ok(())
    }
}
