//! Conversions from caller-side values into [`Node`]s.
//!
//! Callers hand mapping-shaped content to the document either as an ordered
//! structure ([`Mapping`], [`IndexMap`], arrays of pairs) or as an unordered
//! one ([`HashMap`]). Unordered maps are normalized by sorting their keys, so
//! the resulting order never depends on hashing. [`BTreeMap`]s are already
//! sorted and keep that order.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use indexmap::IndexMap;
use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::node::{Mapping, Node, Scalar};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to convert serializable value into a document node"))]
    SerializeValue { source: serde_yaml::Error },

    #[snafu(display("failed to convert intermediate value into a document node"))]
    ConvertValue { source: serde_yaml::Error },
}

impl Node {
    /// Converts any serializable value, for example a typed manifest struct,
    /// into a [`Node`]. Struct fields keep their declaration order.
    pub fn from_serialize<T>(value: &T) -> Result<Self, Error>
    where
        T: Serialize + ?Sized,
    {
        let value = serde_yaml::to_value(value).context(SerializeValueSnafu)?;
        serde_yaml::from_value(value).context(ConvertValueSnafu)
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(value) => Self::Scalar(Scalar::Int(value)),
            Err(_) => Self::Scalar(Scalar::UInt(value)),
        }
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl From<&String> for Node {
    fn from(value: &String) -> Self {
        Self::Scalar(Scalar::String(value.clone()))
    }
}

impl<T> From<Option<T>> for Node
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

impl<T> From<Vec<T>> for Node
where
    T: Into<Self>,
{
    fn from(value: Vec<T>) -> Self {
        Self::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<IndexMap<K, V>> for Node
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from(value: IndexMap<K, V>) -> Self {
        Self::Mapping(
            value
                .into_iter()
                .map(|(k, v)| -> (String, V) { (k.into(), v) })
                .collect(),
        )
    }
}

impl<K, V> From<BTreeMap<K, V>> for Node
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from(value: BTreeMap<K, V>) -> Self {
        Self::Mapping(
            value
                .into_iter()
                .map(|(k, v)| -> (String, V) { (k.into(), v) })
                .collect(),
        )
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Node
where
    K: Into<String>,
    V: Into<Self>,
    S: BuildHasher,
{
    fn from(value: HashMap<K, V, S>) -> Self {
        let mut entries: Vec<(String, V)> =
            value.into_iter().map(|(k, v)| (k.into(), v)).collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self::Mapping(entries.into_iter().collect())
    }
}
