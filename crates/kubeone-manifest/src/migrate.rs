//! Migrations between manifest schema generations.
//!
//! Migrations edit the raw [`Document`] instead of going through typed schema
//! objects. Fields a migration neither reads nor relocates are carried over
//! unchanged and in their original order.
use kubeone_document::{Document, Path, path};
use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, instrument};

use crate::{api_version::ApiVersion, loader};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to identify the manifest"))]
    IdentifyManifest { source: loader::Error },

    #[snafu(display(
        "migration is available only for \"{expected}\" API, but \"{actual}\" is given"
    ))]
    UnexpectedApiVersion {
        expected: ApiVersion,
        actual: ApiVersion,
    },

    #[snafu(display("failed to update {path:?} in the manifest"))]
    EditManifest {
        source: kubeone_document::Error,
        path: String,
    },
}

/// A single step from one schema generation to the next.
#[derive(Clone, Copy, Debug)]
pub struct Migration {
    pub from: ApiVersion,
    pub to: ApiVersion,
    pub apply: fn(Document) -> Result<Document>,
}

/// All known migrations, ordered by their source version.
pub const MIGRATIONS: &[Migration] = &[Migration {
    from: ApiVersion::V1Beta1,
    to: ApiVersion::V1Beta2,
    apply: migrate_v1beta1_v1beta2,
}];

/// Migrates `document` from whatever known version it is in to
/// [`ApiVersion::LATEST`]. Manifests already in the latest version are
/// returned unchanged.
#[instrument(skip(document))]
pub fn migrate_to_latest(mut document: Document) -> Result<Document> {
    let mut current = loader::type_meta(&document)
        .context(IdentifyManifestSnafu)?
        .api_version;

    for migration in MIGRATIONS {
        if migration.from != current {
            continue;
        }

        debug!(from = %migration.from, to = %migration.to, "applying manifest migration");
        document = (migration.apply)(document)?;
        current = migration.to;
    }

    debug!(api_version = %current, "manifest is up to date");
    Ok(document)
}

/// Migrates a `kubeone.k8c.io/v1beta1` manifest to `kubeone.k8c.io/v1beta2`.
///
/// Besides bumping the `apiVersion`, the Packet cloud provider has been
/// renamed to Equinix Metal, so `cloudProvider.packet` moves to
/// `cloudProvider.equinixmetal`.
pub fn migrate_v1beta1_v1beta2(mut document: Document) -> Result<Document> {
    ensure_api_version(&document, ApiVersion::V1Beta1)?;

    set(
        &mut document,
        &path!["apiVersion"],
        ApiVersion::V1Beta2.to_string(),
    )?;

    let packet = path!["cloudProvider", "packet"];
    if let Some(settings) = document.get(&packet).cloned() {
        debug!("renaming cloud provider packet to equinixmetal");
        set(&mut document, &path!["cloudProvider", "equinixmetal"], settings)?;
        document.remove(&packet);
    }

    Ok(document)
}

fn ensure_api_version(document: &Document, expected: ApiVersion) -> Result<()> {
    let actual = loader::type_meta(document)
        .context(IdentifyManifestSnafu)?
        .api_version;

    ensure!(actual == expected, UnexpectedApiVersionSnafu { expected, actual });
    Ok(())
}

fn set(
    document: &mut Document,
    path: &Path,
    value: impl Into<kubeone_document::Node>,
) -> Result<()> {
    document.set(path, value).context(EditManifestSnafu {
        path: path.to_string(),
    })
}
