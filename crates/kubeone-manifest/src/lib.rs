//! KubeOneCluster manifests on top of [`kubeone_document`].
//!
//! This crate knows the identifying fields of a cluster manifest, how to
//! migrate between its schema generations and how to generate example
//! manifests. Everything else in a manifest is carried as raw document data.
pub mod api_version;
pub mod example;
pub mod loader;
pub mod migrate;

pub use api_version::{API_GROUP, ApiVersion, MANIFEST_KIND};
pub use example::{CloudProvider, ExampleOptions, HostOptions, build_example, validate_example};
pub use loader::{Manifest, TypeMeta, type_meta};
pub use migrate::migrate_to_latest;
