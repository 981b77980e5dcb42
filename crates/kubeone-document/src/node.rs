//! The value model of a document tree.
//!
//! A [`Node`] is either a [`Scalar`] leaf, an ordered [`Mapping`] or a
//! sequence of nodes. Mapping keys keep the order in which they were first
//! inserted, which is what makes serialized output stable across edits.
//!
//! Decoded input may also carry [`Tagged`] values (`!Tag value`). They are
//! opaque leaves which are written back with their tag.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use indexmap::IndexMap;
use serde::{
    Deserialize, Serialize,
    de::{self, MapAccess, SeqAccess, VariantAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

/// An opaque leaf value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),

    /// Only used for unsigned integers which don't fit into an [`i64`].
    UInt(u64),
    Float(f64),
    String(String),
}

impl Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::UInt(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
        }
    }
}

/// A single position in a document tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Node>),
    Tagged(Box<Tagged>),
}

/// A value with an explicit YAML tag, such as `!Secret abc`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tagged {
    /// The tag including its leading `!`.
    pub tag: String,
    pub value: Node,
}

impl Tagged {
    pub fn new(tag: impl Into<String>, value: impl Into<Node>) -> Self {
        let tag = tag.into();
        let tag = if tag.starts_with('!') {
            tag
        } else {
            format!("!{tag}")
        };

        Self {
            tag,
            value: value.into(),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl Node {
    pub fn null() -> Self {
        Self::default()
    }

    pub fn empty_mapping() -> Self {
        Self::Mapping(Mapping::new())
    }

    pub fn empty_sequence() -> Self {
        Self::Sequence(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Scalar(Scalar::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Scalar(Scalar::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Returns floats as well as integers, which are widened.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Scalar(Scalar::Float(value)) => Some(*value),
            Self::Scalar(Scalar::Int(value)) => Some(*value as f64),
            Self::Scalar(Scalar::UInt(value)) => Some(*value as f64),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_tagged(&self) -> Option<&Tagged> {
        match self {
            Self::Tagged(tagged) => Some(tagged),
            _ => None,
        }
    }

    /// A short, human-readable name of the node shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(Scalar::Null) => "null",
            Self::Scalar(_) => "scalar",
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Tagged(_) => "tagged value",
        }
    }
}

/// A mapping key.
///
/// Keys are addressed by their text. A key decoded from a non-string scalar
/// (`8080:` or `true:`) remembers that scalar and is encoded as it again.
/// Equality and hashing only look at the text, so `8080` and `"8080"` are the
/// same key.
#[derive(Clone, Debug)]
pub struct Key {
    text: String,
    scalar: Option<Scalar>,
}

impl Key {
    /// A key which was read from, and is written back as, a non-string scalar.
    pub fn from_scalar(scalar: Scalar) -> Self {
        match scalar {
            Scalar::String(text) => Self::from(text),
            scalar => Self {
                text: scalar.to_string(),
                scalar: Some(scalar),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The original scalar of keys which were not plain strings.
    pub fn scalar(&self) -> Option<&Scalar> {
        self.scalar.as_ref()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for Key {
    fn from(text: String) -> Self {
        Self { text, scalar: None }
    }
}

impl From<&str> for Key {
    fn from(text: &str) -> Self {
        Self::from(text.to_owned())
    }
}

impl From<&String> for Key {
    fn from(text: &String) -> Self {
        Self::from(text.clone())
    }
}

/// An ordered collection of uniquely keyed nodes.
///
/// New keys are appended at the end, replacing the value of an existing key
/// keeps its position and removing a key keeps the relative order of all
/// remaining keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mapping(IndexMap<Key, Node>);

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.0.get_mut(key)
    }

    /// Inserts `value` under `key`, returning the previous value.
    ///
    /// An existing key keeps its position, a new key is appended.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes `key`, shifting all following entries up by one.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(Key::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Node> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<Key>,
    V: Into<Node>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Mapping
where
    K: Into<Key>,
    V: Into<Node>,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl IntoIterator for Mapping {
    type IntoIter = indexmap::map::IntoIter<Key, Node>;
    type Item = (Key, Node);

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type IntoIter = indexmap::map::Iter<'a, Key, Node>;
    type Item = (&'a Key, &'a Node);

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// Encoders must see entries in stored order, which `serialize_map` and
// `serialize_seq` guarantee as long as we feed them in iteration order.
impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Mapping(mapping) => mapping.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Tagged(tagged) => tagged.serialize(serializer),
        }
    }
}

// A single-entry map whose key is collected as a `!`-prefixed string is how
// serde_yaml's serializer recognizes a tag, see `serde_yaml::value::TaggedValue`.
impl Serialize for Tagged {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        struct SerializeTag<'a>(&'a str);

        impl Serialize for SerializeTag<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self.0)
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&SerializeTag(&self.tag), &self.value)?;
        map.end()
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.scalar {
            Some(scalar) => scalar.serialize(serializer),
            None => serializer.serialize_str(&self.text),
        }
    }
}

impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::UInt(value) => serializer.serialize_u64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::String(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a scalar, a mapping or a sequence")
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(Node::null())
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(Node::null())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(v.into())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Node>()? {
            items.push(item);
        }
        Ok(Node::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut mapping = Mapping::new();
        while let Some(key) = map.next_key::<Key>()? {
            let value = map.next_value::<Node>()?;
            if mapping.contains_key(key.as_str()) {
                return Err(de::Error::custom(format!(
                    "duplicate mapping key {:?}",
                    key.as_str()
                )));
            }
            mapping.insert(key, value);
        }
        Ok(Node::Mapping(mapping))
    }

    fn visit_enum<A>(self, data: A) -> Result<Self::Value, A::Error>
    where
        A: de::EnumAccess<'de>,
    {
        let (tag, contents) = data.variant::<String>()?;
        let value = contents.newtype_variant::<Node>()?;
        Ok(Node::Tagged(Box::new(Tagged::new(tag, value))))
    }
}

// Simple non-string scalars are accepted as keys. Composite keys are not.
impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number or boolean mapping key")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(Key::from_scalar(Scalar::Bool(v)))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Key::from_scalar(Scalar::Int(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Key::from_scalar(match i64::try_from(v) {
                    Ok(v) => Scalar::Int(v),
                    Err(_) => Scalar::UInt(v),
                }))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(Key::from_scalar(Scalar::Float(v)))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(Key::from(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
