/// The API group all KubeOneCluster manifests belong to.
pub const API_GROUP: &str = "kubeone.k8c.io";

/// The `kind` every cluster manifest must carry.
pub const MANIFEST_KIND: &str = "KubeOneCluster";

/// Every known schema generation of the cluster manifest, oldest first.
///
/// The [`Display`](std::fmt::Display) and [`FromStr`](std::str::FromStr)
/// representations are the full `apiVersion` values, for example
/// `kubeone.k8c.io/v1beta2`.
#[derive(
    Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, strum::Display, strum::EnumString,
)]
pub enum ApiVersion {
    #[strum(serialize = "kubeone.k8c.io/v1beta1")]
    V1Beta1,

    #[strum(serialize = "kubeone.k8c.io/v1beta2")]
    V1Beta2,
}

impl ApiVersion {
    /// The version new manifests are written in and migrations lead to.
    pub const LATEST: Self = Self::V1Beta2;

    pub fn is_latest(self) -> bool {
        self == Self::LATEST
    }
}
