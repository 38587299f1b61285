use super::label::Label;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One analyzed token as produced by the external analyzer.
///
/// Every field defaults when absent or `null` so that a sparse payload
/// classifies as "no match" instead of failing to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Half-open character offsets into the analyzed text.
    #[serde(deserialize_with = "null_as_default")]
    pub start: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub end: usize,
    /// Coarse universal part-of-speech code (NOUN, VERB, DET, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub pos: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    /// Dependency relation to the syntactic head.
    #[serde(deserialize_with = "null_as_default")]
    pub dep: String,
    #[serde(deserialize_with = "null_as_default")]
    pub head: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shape: String,
    #[serde(deserialize_with = "null_as_default")]
    pub lemma: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_alpha: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_stop: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_punct: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_entity: bool,
    pub entity_type: Option<String>,
    pub morphology: Morphology,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Token {
    /// Entity type, if the token is flagged as an entity and the type is non-empty.
    pub fn entity(&self) -> Option<&str> {
        if !self.is_entity {
            return None;
        }
        self.entity_type.as_deref().filter(|t| !t.is_empty())
    }

    pub fn is_negation(&self) -> bool {
        self.dep == "neg"
    }

    /// Numbers, symbols and other tokens that are neither words nor punctuation.
    pub fn has_notable_shape(&self) -> bool {
        !self.is_alpha && !self.is_punct
    }
}

/// Morphological features in analyzer order.
///
/// Backed by a list rather than a map: the order the analyzer emitted the
/// features in is visible in `Morph.*` labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Morphology(Vec<(String, String)>);

impl Morphology {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self(entries)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn get(&self, feature: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == feature)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Morphology {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

struct MorphologyVisitor;

impl<'de> Visitor<'de> for MorphologyVisitor {
    type Value = Morphology;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of morphological feature names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            entries.push((key, value));
        }
        Ok(Morphology(entries))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Morphology::default())
    }
}

impl<'de> Deserialize<'de> for Morphology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MorphologyVisitor)
    }
}

impl Serialize for Morphology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A token after classification for the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedToken {
    pub token: String,
    pub start: usize,
    pub end: usize,
    pub labels: Vec<Label>,
}

impl ProcessedToken {
    pub fn label_strings(&self) -> Vec<String> {
        self.labels.iter().map(Label::to_string).collect()
    }
}
