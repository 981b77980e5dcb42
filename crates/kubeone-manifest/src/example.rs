//! Generation of example manifests.
//!
//! The builder only sets what it was asked for and then fills in defaults
//! with [`Document::fill`], so defaults never clobber anything derived from
//! the [`ExampleOptions`].
use kubeone_document::{Document, Mapping, Node, Path, path};
use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::debug;

use crate::api_version::{ApiVersion, MANIFEST_KIND};

type Result<T, E = Error> = std::result::Result<T, E>;

pub const DEFAULT_CLUSTER_NAME: &str = "example";
pub const DEFAULT_KUBERNETES_VERSION: &str = "1.29.4";
pub const DEFAULT_POD_SUBNET: &str = "10.244.0.0/16";
pub const DEFAULT_SERVICE_SUBNET: &str = "10.96.0.0/12";

/// Keys below `cloudProvider` which configure the provider rather than
/// select one.
const CLOUD_PROVIDER_SETTINGS: &[&str] = &["external", "cloudConfig", "csiConfig"];

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to set {path:?} in the example manifest"))]
    EditManifest {
        source: kubeone_document::Error,
        path: String,
    },

    #[snafu(display("required field {path:?} is missing"))]
    MissingField { path: String },

    #[snafu(display("exactly one cloud provider must be configured, found {found:?}"))]
    CloudProviderCount { found: Vec<String> },

    #[snafu(display("control plane host {index} has neither a public nor a private address"))]
    HostWithoutAddress { index: usize },
}

/// Cloud providers an example manifest can be generated for.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum), value(rename_all = "lower"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    DigitalOcean,
    EquinixMetal,
    Gce,
    Hetzner,
    Nutanix,
    Openstack,

    #[strum(serialize = "vmwareCloudDirector")]
    #[cfg_attr(feature = "clap", value(name = "vmwareCloudDirector"))]
    VmwareCloudDirector,
    Vsphere,

    #[default]
    None,
}

impl CloudProvider {
    /// Whether the provider's cloud controller manager runs out of tree,
    /// which is signalled by `cloudProvider.external: true`.
    pub fn requires_external_ccm(self) -> bool {
        matches!(
            self,
            Self::Aws
                | Self::Azure
                | Self::DigitalOcean
                | Self::EquinixMetal
                | Self::Hetzner
                | Self::Openstack
                | Self::Vsphere
        )
    }

    /// Whether worker nodes can be managed by machine-controller.
    pub fn supports_machine_controller(self) -> bool {
        self != Self::None
    }
}

/// A control plane host of the example manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostOptions {
    pub public_address: Option<String>,
    pub private_address: Option<String>,
    pub ssh_username: String,
    pub ssh_private_key_file: Option<String>,
}

impl HostOptions {
    pub fn new(public_address: impl Into<String>) -> Self {
        Self {
            public_address: Some(public_address.into()),
            private_address: None,
            ssh_username: "root".to_owned(),
            ssh_private_key_file: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExampleOptions {
    pub cluster_name: String,
    pub kubernetes_version: String,
    pub provider: CloudProvider,
    pub control_plane_hosts: Vec<HostOptions>,

    /// Also emit optional sections with their default values.
    pub full: bool,
}

impl Default for ExampleOptions {
    fn default() -> Self {
        Self {
            cluster_name: DEFAULT_CLUSTER_NAME.to_owned(),
            kubernetes_version: DEFAULT_KUBERNETES_VERSION.to_owned(),
            provider: CloudProvider::default(),
            control_plane_hosts: Vec::new(),
            full: false,
        }
    }
}

/// Builds an example manifest in the latest API version from `options`.
pub fn build_example(options: &ExampleOptions) -> Result<Document> {
    let mut document = Document::new();

    set(&mut document, &path!["apiVersion"], ApiVersion::LATEST.to_string())?;
    set(&mut document, &path!["kind"], MANIFEST_KIND)?;
    set(&mut document, &path!["name"], &options.cluster_name)?;
    set(
        &mut document,
        &path!["versions", "kubernetes"],
        &options.kubernetes_version,
    )?;

    set(
        &mut document,
        &path!["cloudProvider", options.provider.to_string()],
        Mapping::new(),
    )?;
    if options.provider.requires_external_ccm() {
        set(&mut document, &path!["cloudProvider", "external"], true)?;
    }

    for (index, host) in options.control_plane_hosts.iter().enumerate() {
        let host_path = path!["controlPlane", "hosts", index];

        if let Some(public_address) = &host.public_address {
            set(&mut document, &host_path.join("publicAddress"), public_address)?;
        }
        if let Some(private_address) = &host.private_address {
            set(&mut document, &host_path.join("privateAddress"), private_address)?;
        }
        set(&mut document, &host_path.join("sshUsername"), &host.ssh_username)?;
        if let Some(key_file) = &host.ssh_private_key_file {
            set(&mut document, &host_path.join("sshPrivateKeyFile"), key_file)?;
        }
    }

    debug!(full = options.full, "filling example manifest defaults");
    fill(&mut document, &path![], defaults(options))?;
    if options.full {
        fill(&mut document, &path![], full_defaults())?;
    }

    validate_example(&document)?;
    Ok(document)
}

/// Checks the fields every generated manifest must carry.
pub fn validate_example(document: &Document) -> Result<()> {
    for path in [
        path!["apiVersion"],
        path!["kind"],
        path!["name"],
        path!["versions", "kubernetes"],
    ] {
        document.get_str(&path).context(MissingFieldSnafu {
            path: path.to_string(),
        })?;
    }

    let cloud_provider = document
        .get_mapping(&path!["cloudProvider"])
        .context(MissingFieldSnafu {
            path: "cloudProvider",
        })?;
    let found: Vec<String> = cloud_provider
        .keys()
        .filter(|key| !CLOUD_PROVIDER_SETTINGS.contains(key))
        .map(ToOwned::to_owned)
        .collect();
    ensure!(found.len() == 1, CloudProviderCountSnafu { found });

    let hosts = document
        .get_sequence(&path!["controlPlane", "hosts"])
        .unwrap_or_default();
    for (index, host) in hosts.iter().enumerate() {
        let has_address = ["publicAddress", "privateAddress"]
            .into_iter()
            .any(|key| host.as_mapping().and_then(|host| host.get(key)).is_some());
        ensure!(has_address, HostWithoutAddressSnafu { index });
    }

    Ok(())
}

fn defaults(options: &ExampleOptions) -> Mapping {
    Mapping::from([
        (
            "containerRuntime",
            Node::from(Mapping::from([("containerd", Mapping::new())])),
        ),
        (
            "clusterNetwork",
            Node::from(Mapping::from([
                ("podSubnet", Node::from(DEFAULT_POD_SUBNET)),
                ("serviceSubnet", Node::from(DEFAULT_SERVICE_SUBNET)),
                (
                    "cni",
                    Node::from(Mapping::from([(
                        "canal",
                        Mapping::from([("mtu", 1450)]),
                    )])),
                ),
            ])),
        ),
        (
            "machineController",
            Node::from(Mapping::from([(
                "deploy",
                options.provider.supports_machine_controller(),
            )])),
        ),
    ])
}

fn full_defaults() -> Mapping {
    Mapping::from([
        (
            "clusterNetwork",
            Mapping::from([
                ("serviceDomainName", Node::from("cluster.local")),
                ("nodePortRange", Node::from("30000-32767")),
                ("kubeProxy", Node::from(Mapping::from([("skipInstallation", false)]))),
            ]),
        ),
        (
            "features",
            Mapping::from([
                (
                    "coreDNS",
                    Node::from(Mapping::from([
                        ("replicas", Node::from(2)),
                        ("deployPodDisruptionBudget", Node::from(true)),
                    ])),
                ),
                (
                    "metricsServer",
                    Node::from(Mapping::from([("enable", true)])),
                ),
            ]),
        ),
        (
            "loggingConfig",
            Mapping::from([("containerLogMaxSize", Node::from("100Mi"))]),
        ),
    ])
}

fn set(document: &mut Document, path: &Path, value: impl Into<Node>) -> Result<()> {
    document.set(path, value).context(EditManifestSnafu {
        path: path.to_string(),
    })
}

fn fill(document: &mut Document, path: &Path, value: impl Into<Node>) -> Result<()> {
    document.fill(path, value).context(EditManifestSnafu {
        path: path.to_string(),
    })
}
