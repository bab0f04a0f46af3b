//! City-name synonyms mapped onto canonical destination keys.

use std::collections::BTreeMap;

/// Lookup table from alternative city names to canonical keys.
///
/// Names are compared after trimming and lower-casing. Unknown names pass
/// through in their normalised form, so canonical keys never need an entry.
///
/// # Examples
/// ```
/// use tripweave_core::CityAliases;
///
/// let aliases = CityAliases::builtin();
/// assert_eq!(aliases.normalise("  Tokyo "), "tokyo");
/// assert_eq!(aliases.normalise("도쿄"), "tokyo");
/// assert_eq!(aliases.normalise("New York"), "newyork");
/// assert_eq!(aliases.normalise("Lisbon"), "lisbon");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct CityAliases {
    map: BTreeMap<String, String>,
}

impl CityAliases {
    /// Construct an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in synonyms covering Korean and Japanese spellings of the
    /// supported cities.
    #[must_use]
    pub fn builtin() -> Self {
        [
            ("서울", "seoul"),
            ("인천", "incheon"),
            ("부산", "busan"),
            ("제주", "jeju"),
            ("도쿄", "tokyo"),
            ("東京", "tokyo"),
            ("오사카", "osaka"),
            ("大阪", "osaka"),
            ("후쿠오카", "fukuoka"),
            ("福岡", "fukuoka"),
            ("삿포로", "sapporo"),
            ("교토", "kyoto"),
            ("京都", "kyoto"),
            ("파리", "paris"),
            ("런던", "london"),
            ("뉴욕", "newyork"),
            ("new york", "newyork"),
        ]
        .into_iter()
        .fold(Self::new(), |aliases, (alias, canonical)| {
            aliases.with_alias(alias, canonical)
        })
    }

    /// Insert or replace a synonym.
    pub fn insert(&mut self, alias: &str, canonical: &str) {
        self.map.insert(normalise_key(alias), normalise_key(canonical));
    }

    /// Add a synonym while returning `self` for chaining.
    #[must_use]
    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.insert(alias, canonical);
        self
    }

    /// Resolve `name` to its canonical key.
    #[must_use]
    pub fn normalise(&self, name: &str) -> String {
        let key = normalise_key(name);
        self.map.get(&key).cloned().unwrap_or(key)
    }

    /// Number of synonyms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Report whether the table holds no synonyms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Trim and lower-case a destination name.
#[must_use]
pub fn normalise_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("제주", "jeju")]
    #[case(" 파리 ", "paris")]
    #[case("NEW YORK", "newyork")]
    #[case("Busan", "busan")]
    #[case("", "")]
    fn resolves_builtin_synonyms(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(CityAliases::builtin().normalise(name), expected);
    }

    #[test]
    fn custom_aliases_are_normalised_on_insert() {
        let aliases = CityAliases::new().with_alias(" Big Apple ", "NewYork");
        assert_eq!(aliases.normalise("big apple"), "newyork");
        assert_eq!(aliases.len(), 1);
    }
}
