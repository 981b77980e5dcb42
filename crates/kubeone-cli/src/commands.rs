use std::path::PathBuf;

use clap::Args;
use kubeone_document::yaml;
use kubeone_manifest::{
    CloudProvider, ExampleOptions, HostOptions, Manifest, build_example, example, loader,
    migrate::{self, migrate_to_latest},
};
use snafu::{ResultExt, Snafu};
use tracing::info;

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to load manifest from {path}", path = path.display()))]
    LoadManifest {
        source: loader::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to migrate manifest from {path}", path = path.display()))]
    MigrateManifest {
        source: migrate::Error,
        path: PathBuf,
    },

    #[snafu(display("failed to build example manifest"))]
    BuildExample { source: example::Error },

    #[snafu(display("failed to serialize manifest"))]
    SerializeManifest { source: yaml::Error },
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Path to the cluster manifest to migrate.
    #[arg(long, short = 'm', env = "KUBEONE_MANIFEST")]
    pub manifest: PathBuf,
}

#[derive(Debug, Args)]
pub struct PrintArgs {
    /// Also print optional sections with their default values.
    #[arg(long)]
    pub full: bool,

    #[arg(long, value_enum, default_value_t = CloudProvider::None)]
    pub provider: CloudProvider,

    #[arg(long, default_value = example::DEFAULT_KUBERNETES_VERSION)]
    pub kubernetes_version: String,

    #[arg(long, default_value = example::DEFAULT_CLUSTER_NAME)]
    pub cluster_name: String,

    /// Public address of a control plane host. Can be given multiple times.
    #[arg(long = "control-plane-host", value_name = "ADDRESS")]
    pub control_plane_hosts: Vec<String>,

    #[arg(long, default_value = "root")]
    pub ssh_username: String,

    #[arg(long)]
    pub ssh_private_key_file: Option<String>,
}

impl PrintArgs {
    fn example_options(&self) -> ExampleOptions {
        let control_plane_hosts = self
            .control_plane_hosts
            .iter()
            .map(|address| HostOptions {
                ssh_username: self.ssh_username.clone(),
                ssh_private_key_file: self.ssh_private_key_file.clone(),
                ..HostOptions::new(address)
            })
            .collect();

        ExampleOptions {
            cluster_name: self.cluster_name.clone(),
            kubernetes_version: self.kubernetes_version.clone(),
            provider: self.provider,
            control_plane_hosts,
            full: self.full,
        }
    }
}

/// Migrates the manifest at `args.manifest` and returns it as YAML.
pub fn migrate(args: &MigrateArgs) -> Result<String> {
    let path = &args.manifest;
    let manifest = Manifest::from_file(path).context(LoadManifestSnafu { path })?;
    let from = manifest
        .type_meta()
        .context(LoadManifestSnafu { path })?
        .api_version;

    let document =
        migrate_to_latest(manifest.into_document()).context(MigrateManifestSnafu { path })?;
    info!(path = %path.display(), %from, "migrated manifest");

    yaml::to_string(&document, yaml::SerializeOptions::default()).context(SerializeManifestSnafu)
}

/// Builds the example manifest described by `args` and returns it as YAML.
pub fn print(args: &PrintArgs) -> Result<String> {
    let document = build_example(&args.example_options()).context(BuildExampleSnafu)?;

    yaml::to_string(&document, yaml::SerializeOptions::default()).context(SerializeManifestSnafu)
}
