//! Decoding documents from and encoding them to the YAML file format.
//!
//! The engine itself only works on decoded trees. This module is the glue to
//! [`serde_yaml`], which walks mappings and sequences in stored order.
use std::io::{Read, Write};

use serde::Serialize;
use snafu::{ResultExt, Snafu};

use crate::Document;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Represents every error which can be encountered while decoding or encoding YAML documents.
#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to deserialize YAML document"))]
    DeserializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to serialize YAML"))]
    SerializeYaml { source: serde_yaml::Error },

    #[snafu(display("failed to write YAML document separator"))]
    WriteDocumentSeparator { source: std::io::Error },

    #[snafu(display("failed to parse bytes as valid UTF-8 string"))]
    ParseUtf8Bytes { source: std::string::FromUtf8Error },
}

/// Provides configurable options during YAML serialization.
///
/// The default implementation [`SerializeOptions::default()`] emits a plain
/// document without leading separator, which is what most manifest files look
/// like.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Adds leading triple dashes (`---`) to the output string.
    pub explicit_document: bool,
}

impl SerializeOptions {
    pub fn explicit_document() -> Self {
        Self {
            explicit_document: true,
        }
    }
}

/// Decodes a single YAML document. The root must be a mapping.
pub fn from_str(input: &str) -> Result<Document> {
    serde_yaml::from_str(input).context(DeserializeYamlSnafu)
}

/// Decodes a single YAML document from a [`Reader`](Read).
pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    serde_yaml::from_reader(reader).context(DeserializeYamlSnafu)
}

/// Serializes the given value and writes it to a [`Writer`](Write).
pub fn serialize<T, W>(value: &T, mut writer: W, options: SerializeOptions) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    if options.explicit_document {
        writer
            .write_all(b"---\n")
            .context(WriteDocumentSeparatorSnafu)?;
    }

    let mut serializer = serde_yaml::Serializer::new(writer);
    value
        .serialize(&mut serializer)
        .context(SerializeYamlSnafu)
}

/// Serializes the given value into a [`String`].
pub fn to_string<T>(value: &T, options: SerializeOptions) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buffer = Vec::new();
    serialize(value, &mut buffer, options)?;
    String::from_utf8(buffer).context(ParseUtf8BytesSnafu)
}
