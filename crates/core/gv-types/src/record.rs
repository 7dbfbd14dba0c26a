//! Attribute records in the restcountries shape.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// One country's canonical attributes.
///
/// Every field is optional in the source; absent and `null` members both
/// deserialize to the default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeRecord {
    /// ISO alpha-2 code
    #[serde(deserialize_with = "null_as_default")]
    pub cca2: String,

    /// ISO alpha-3 code (the join key)
    #[serde(deserialize_with = "null_as_default")]
    pub cca3: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: CountryName,

    /// Head count; non-integral values are rounded, unusable ones dropped
    #[serde(deserialize_with = "lenient_population")]
    pub population: Option<u64>,

    /// Capital cities; usually one, sometimes several, sometimes none
    #[serde(deserialize_with = "null_as_default")]
    pub capital: Vec<String>,

    /// Language code to display name
    #[serde(deserialize_with = "null_as_default")]
    pub languages: CodeMap<String>,

    /// Currency code to name and symbol
    #[serde(deserialize_with = "null_as_default")]
    pub currencies: CodeMap<Currency>,

    #[serde(deserialize_with = "null_as_default")]
    pub region: String,

    #[serde(deserialize_with = "null_as_default")]
    pub subregion: String,

    /// Surface area in km²
    pub area: Option<f64>,

    #[serde(rename = "unMember")]
    pub un_member: Option<bool>,

    /// Flag emoji
    #[serde(deserialize_with = "null_as_default")]
    pub flag: String,
}

/// Common and official names of a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    #[serde(deserialize_with = "null_as_default")]
    pub common: String,

    #[serde(deserialize_with = "null_as_default")]
    pub official: String,
}

/// A currency as described by the attributes dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
}

/// A code-keyed mapping that remembers source order.
///
/// Deserializes from a JSON object and iterates its entries in the order
/// they appeared in the document. A repeated key keeps its first position
/// and takes the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> CodeMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces the value for `code`.
    pub fn insert(&mut self, code: impl Into<String>, value: V) {
        let code = code.into();
        match self.entries.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((code, value)),
        }
    }

    /// Looks up a value by code.
    pub fn get(&self, code: &str) -> Option<&V> {
        self.entries.iter().find(|(c, _)| c == code).map(|(_, v)| v)
    }

    /// Returns the first entry in source order.
    pub fn first(&self) -> Option<(&str, &V)> {
        self.entries.first().map(|(c, v)| (c.as_str(), v))
    }

    /// Iterates entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Iterates values in source order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for CodeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CodeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, value) in iter {
            map.insert(code, value);
        }
        map
    }
}

impl<V: Serialize> Serialize for CodeMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, value) in &self.entries {
            map.serialize_entry(code, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for CodeMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for CodeMapVisitor<V> {
            type Value = CodeMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by code")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = CodeMap::new();
                while let Some((code, value)) = access.next_entry::<String, V>()? {
                    map.insert(code, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(CodeMapVisitor(PhantomData))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_population<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        }),
        _ => None,
    })
}
