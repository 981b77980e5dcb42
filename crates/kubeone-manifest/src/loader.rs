//! Loading cluster manifests into [`Document`]s.
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use kubeone_document::{Document, path, yaml};
use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::debug;

use crate::api_version::{ApiVersion, MANIFEST_KIND};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to read manifest file {path:?}"))]
    ReadManifestFile {
        source: std::io::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to decode manifest"))]
    DecodeManifest { source: yaml::Error },

    #[snafu(display("apiVersion not present in the manifest"))]
    MissingApiVersion,

    #[snafu(display("kind not present in the manifest"))]
    MissingKind,

    #[snafu(display("unsupported apiVersion {api_version:?}"))]
    UnknownApiVersion {
        source: strum::ParseError,
        api_version: String,
    },

    #[snafu(display("expected kind {expected:?}, but {actual:?} is given"))]
    UnexpectedKind {
        expected: &'static str,
        actual: String,
    },
}

/// The identifying fields every manifest starts with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMeta {
    pub api_version: ApiVersion,
    pub kind: String,
}

/// Reads `apiVersion` and `kind` from `document` and checks that it is a
/// cluster manifest of a known version.
pub fn type_meta(document: &Document) -> Result<TypeMeta> {
    let api_version = document
        .get_str(&path!["apiVersion"])
        .context(MissingApiVersionSnafu)?;
    let kind = document.get_str(&path!["kind"]).context(MissingKindSnafu)?;

    ensure!(
        kind == MANIFEST_KIND,
        UnexpectedKindSnafu {
            expected: MANIFEST_KIND,
            actual: kind,
        }
    );

    let api_version =
        ApiVersion::from_str(api_version).context(UnknownApiVersionSnafu { api_version })?;

    Ok(TypeMeta {
        api_version,
        kind: kind.to_owned(),
    })
}

/// A decoded cluster manifest.
///
/// The manifest keeps the raw document rather than a typed schema object, so
/// that fields unknown to this version of the tool survive a
/// load/edit/write cycle unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct Manifest {
    document: Document,
}

impl Manifest {
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let document = yaml::from_str(input).context(DecodeManifestSnafu)?;
        Ok(Self { document })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading manifest");

        let input = std::fs::read_to_string(path).context(ReadManifestFileSnafu { path })?;
        Self::from_yaml_str(&input)
    }

    pub fn type_meta(&self) -> Result<TypeMeta> {
        type_meta(&self.document)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

impl From<Document> for Manifest {
    fn from(document: Document) -> Self {
        Self { document }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    #[test]
    fn reads_type_meta() {
        let manifest = Manifest::from_yaml_str(indoc! {"
            apiVersion: kubeone.k8c.io/v1beta1
            kind: KubeOneCluster
            name: demo
        "})
        .expect("manifest is valid YAML");

        assert_eq!(
            manifest.type_meta().expect("type meta is valid"),
            TypeMeta {
                api_version: ApiVersion::V1Beta1,
                kind: MANIFEST_KIND.to_owned(),
            }
        );
    }

    #[rstest]
    #[case::missing_api_version("kind: KubeOneCluster\n", "apiVersion not present in the manifest")]
    #[case::missing_kind("apiVersion: kubeone.k8c.io/v1beta2\n", "kind not present in the manifest")]
    #[case::non_string_kind(
        "apiVersion: kubeone.k8c.io/v1beta2\nkind: 42\n",
        "kind not present in the manifest"
    )]
    #[case::wrong_kind(
        "apiVersion: kubeone.k8c.io/v1beta2\nkind: Deployment\n",
        r#"expected kind "KubeOneCluster", but "Deployment" is given"#
    )]
    #[case::unknown_version(
        "apiVersion: kubeone.io/v1alpha1\nkind: KubeOneCluster\n",
        r#"unsupported apiVersion "kubeone.io/v1alpha1""#
    )]
    fn rejects_invalid_type_meta(#[case] input: &str, #[case] message: &str) {
        let manifest = Manifest::from_yaml_str(input).expect("manifest is valid YAML");
        let err = manifest.type_meta().expect_err("type meta is invalid");
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn decoding_failure_is_reported() {
        let err = Manifest::from_yaml_str("- not\n- a mapping\n").expect_err("root is a sequence");
        assert!(matches!(err, Error::DecodeManifest { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temporary file can be created");
        file.write_all(b"apiVersion: kubeone.k8c.io/v1beta2\nkind: KubeOneCluster\n")
            .expect("temporary file is writable");

        let manifest = Manifest::from_file(file.path()).expect("manifest file can be loaded");
        assert_eq!(
            manifest.type_meta().expect("type meta is valid").api_version,
            ApiVersion::V1Beta2
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = Manifest::from_file("/nonexistent/kubeone.yaml").expect_err("file does not exist");
        assert!(matches!(err, Error::ReadManifestFile { .. }));
    }
}
