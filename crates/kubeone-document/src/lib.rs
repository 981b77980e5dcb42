//! Order-preserving, path-addressed editing of decoded manifest documents.
//!
//! A [`Document`] owns a tree of [`Node`]s with a [`Mapping`] at its root.
//! Individual nodes are addressed by [`Path`]s made up of mapping keys and
//! sequence indices:
//!
//! - [`Document::get`] and the typed getters read tolerantly and report
//!   anything that doesn't resolve as [`None`],
//! - [`Document::set`] and [`Document::append`] write, creating missing parent
//!   containers on the way,
//! - [`Document::remove`] deletes and is a no-op for missing nodes,
//! - [`Document::fill`] deep-merges defaults without overwriting existing data.
//!
//! Mapping keys keep their insertion order through every edit, so keys which
//! no caller ever touched are serialized exactly where they were read from.
//!
//! ```
//! use kubeone_document::{yaml, path};
//!
//! let mut document = yaml::from_str("kind: KubeOneCluster\nname: demo\n")
//!     .expect("valid YAML document");
//!
//! document.set(&path!["apiVersion"], "kubeone.k8c.io/v1beta2").expect("key can be set");
//! document.remove(&path!["name"]);
//!
//! let output = yaml::to_string(&document, yaml::SerializeOptions::default())
//!     .expect("document serializes");
//! assert_eq!(output, "kind: KubeOneCluster\napiVersion: kubeone.k8c.io/v1beta2\n");
//! ```

pub mod convert;
pub mod document;
pub mod node;
pub mod path;
pub mod yaml;

pub use document::{Document, Error};
pub use node::{Key, Mapping, Node, Scalar, Tagged};
pub use path::{Path, Step};
