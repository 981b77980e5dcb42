//! The [`Document`] and its path-addressed operations.
//!
//! Reads are tolerant: a missing key, an out-of-range index or a node of the
//! wrong shape somewhere along the path all surface as [`None`].
//!
//! Writes descend through the existing part of the path first and check every
//! container shape on the way down. An existing node of the wrong shape,
//! including an explicit null, rejects the write. The missing remainder of the
//! path is built off to the side and only spliced in once it is complete, so
//! a rejected write leaves the document exactly as it was.

use serde::{Deserialize, Serialize, de};
use snafu::Snafu;

use crate::{
    node::{Mapping, Node},
    path::{Path, Step},
};

type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum Error {
    #[snafu(display("the empty path addresses the document root, which must be replaced as a whole"))]
    EmptyPath,

    #[snafu(display("the document root must be a mapping, got a {kind}"))]
    RootNotMapping { kind: &'static str },

    #[snafu(display("cannot address key {key:?} at {path:?}: expected a mapping, found a {kind}"))]
    ExpectedMapping {
        path: String,
        key: String,
        kind: &'static str,
    },

    #[snafu(display("cannot address index {index} at {path:?}: expected a sequence, found a {kind}"))]
    ExpectedSequence {
        path: String,
        index: i64,
        kind: &'static str,
    },

    #[snafu(display("cannot write to negative index {index} at {path:?}"))]
    NegativeIndex { path: String, index: i64 },

    #[snafu(display("cannot extend the sequence at {path:?} up to index {index}"))]
    IndexTooLarge { path: String, index: i64 },

    #[snafu(display("cannot append to {path:?}: expected a sequence, found a {kind}"))]
    AppendToNonSequence { path: String, kind: &'static str },
}

/// An owned, order-preserving document tree with a mapping at its root.
///
/// All operations address nodes by [`Path`]. See the [module docs](self) for
/// the guarantees around failed writes.
///
/// ```
/// use kubeone_document::{Document, path};
///
/// let mut document = Document::new();
/// document
///     .set(&path!["controlPlane", "hosts", 0, "sshUsername"], "ubuntu")
///     .expect("path can be created");
///
/// assert_eq!(
///     document.get_str(&path!["controlPlane", "hosts", 0, "sshUsername"]),
///     Some("ubuntu")
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    root: Node,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates a document with an empty root mapping.
    pub fn new() -> Self {
        Self {
            root: Node::empty_mapping(),
        }
    }

    /// Wraps an already decoded tree. Fails if `root` is not a mapping.
    pub fn from_node(root: Node) -> Result<Self> {
        match root {
            Node::Mapping(_) => Ok(Self { root }),
            other => RootNotMappingSnafu { kind: other.kind() }.fail(),
        }
    }

    /// The root node, which is always a [`Node::Mapping`]. This is what
    /// encoders walk when serializing the document.
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Replaces the whole tree. Only mappings are accepted.
    pub fn set_root(&mut self, root: impl Into<Node>) -> Result<()> {
        *self = Self::from_node(root.into())?;
        Ok(())
    }

    /// Returns the node at `path`. The empty path returns the root.
    pub fn get(&self, path: &Path) -> Option<&Node> {
        path.iter().try_fold(&self.root, |node, step| child(node, step))
    }

    /// Mutable counterpart of [`Document::get`].
    ///
    /// The root itself is never handed out, as replacing it through the
    /// reference could break the mapping invariant. Use
    /// [`Document::set_root`] instead.
    pub fn get_mut(&mut self, path: &Path) -> Option<&mut Node> {
        if path.is_empty() {
            return None;
        }
        self.node_mut(path)
    }

    fn node_mut(&mut self, path: &Path) -> Option<&mut Node> {
        path.iter()
            .try_fold(&mut self.root, |node, step| child_mut(node, step))
    }

    pub fn has(&self, path: &Path) -> bool {
        self.get(path).is_some()
    }

    pub fn get_str(&self, path: &Path) -> Option<&str> {
        self.get(path).and_then(Node::as_str)
    }

    pub fn get_int(&self, path: &Path) -> Option<i64> {
        self.get(path).and_then(Node::as_int)
    }

    pub fn get_bool(&self, path: &Path) -> Option<bool> {
        self.get(path).and_then(Node::as_bool)
    }

    pub fn get_float(&self, path: &Path) -> Option<f64> {
        self.get(path).and_then(Node::as_float)
    }

    pub fn get_sequence(&self, path: &Path) -> Option<&[Node]> {
        self.get(path).and_then(Node::as_sequence)
    }

    pub fn get_mapping(&self, path: &Path) -> Option<&Mapping> {
        self.get(path).and_then(Node::as_mapping)
    }

    /// Writes `value` at `path`, creating missing parent containers.
    ///
    /// A missing parent becomes a mapping if the next step is a key and a
    /// sequence if it is an index. Writing past the end of a sequence pads it
    /// with nulls. Existing keys keep their position, new keys are appended.
    ///
    /// Existing nodes are never replaced to make room for a container, so
    /// writing below a scalar (null included) fails.
    pub fn set(&mut self, path: &Path, value: impl Into<Node>) -> Result<()> {
        if path.is_empty() {
            return EmptyPathSnafu.fail();
        }

        // Checked upfront, because the step may lie below containers which
        // would otherwise already have been created.
        for (depth, step) in path.iter().enumerate() {
            if let Step::Index(index @ ..0) = step {
                return NegativeIndexSnafu {
                    path: prefix(path, depth),
                    index: *index,
                }
                .fail();
            }
        }

        write(&mut self.root, path, 0, value.into())
    }

    /// Appends `value` to the sequence at `path`, creating the sequence if
    /// nothing is stored there.
    pub fn append(&mut self, path: &Path, value: impl Into<Node>) -> Result<()> {
        let value = value.into();

        if let Some(node) = self.node_mut(path) {
            let kind = node.kind();
            let Node::Sequence(items) = node else {
                return AppendToNonSequenceSnafu {
                    path: path.to_string(),
                    kind,
                }
                .fail();
            };
            items.push(value);
            return Ok(());
        }

        self.set(path, Node::Sequence(vec![value]))
    }

    /// Removes the node at `path` and returns it.
    ///
    /// Removing something that doesn't exist is not an error and leaves the
    /// document untouched. The empty path resets the root to an empty mapping.
    pub fn remove(&mut self, path: &Path) -> Option<Node> {
        let Some((parent_path, leaf)) = path.split_last() else {
            return Some(std::mem::replace(&mut self.root, Node::empty_mapping()));
        };

        match (self.node_mut(&parent_path)?, leaf) {
            (Node::Mapping(mapping), Step::Key(key)) => mapping.remove(key),
            (Node::Sequence(items), Step::Index(index)) => {
                let index = usize::try_from(*index).ok().filter(|i| *i < items.len())?;
                Some(items.remove(index))
            }
            _ => None,
        }
    }

    /// Merges `value` into the node at `path` without overwriting anything.
    ///
    /// If nothing is stored at `path` this behaves like [`Document::set`].
    /// Otherwise mappings are merged key by key: missing keys are appended in
    /// the order of `value`, keys present on both sides are merged recursively
    /// if both values are mappings and left alone otherwise. An existing node
    /// which is not a mapping is never replaced.
    pub fn fill(&mut self, path: &Path, value: impl Into<Node>) -> Result<()> {
        let value = value.into();

        if let Some(existing) = self.node_mut(path) {
            fill_node(existing, value);
            return Ok(());
        }

        self.set(path, value)
    }
}

impl TryFrom<Node> for Document {
    type Error = Error;

    fn try_from(value: Node) -> Result<Self> {
        Self::from_node(value)
    }
}

impl From<Mapping> for Document {
    fn from(value: Mapping) -> Self {
        Self {
            root: Node::Mapping(value),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let root = Node::deserialize(deserializer)?;
        Self::from_node(root).map_err(de::Error::custom)
    }
}

fn child<'a>(node: &'a Node, step: &Step) -> Option<&'a Node> {
    match (node, step) {
        (Node::Mapping(mapping), Step::Key(key)) => mapping.get(key),
        (Node::Sequence(items), Step::Index(index)) => {
            usize::try_from(*index).ok().and_then(|i| items.get(i))
        }
        _ => None,
    }
}

fn child_mut<'a>(node: &'a mut Node, step: &Step) -> Option<&'a mut Node> {
    match (node, step) {
        (Node::Mapping(mapping), Step::Key(key)) => mapping.get_mut(key),
        (Node::Sequence(items), Step::Index(index)) => {
            usize::try_from(*index).ok().and_then(|i| items.get_mut(i))
        }
        _ => None,
    }
}

/// Renders the first `depth` steps of `path` for error messages.
fn prefix(path: &Path, depth: usize) -> String {
    path.iter().take(depth).cloned().collect::<Path>().to_string()
}

/// Writes `value` at the steps of `path` starting at `depth`, with `node`
/// being the node already reached by the steps before.
fn write(node: &mut Node, path: &Path, depth: usize, value: Node) -> Result<()> {
    let Some(step) = path.steps().get(depth) else {
        *node = value;
        return Ok(());
    };
    let kind = node.kind();

    match step {
        Step::Key(key) => {
            let Node::Mapping(mapping) = node else {
                return ExpectedMappingSnafu {
                    path: prefix(path, depth),
                    key: key.clone(),
                    kind,
                }
                .fail();
            };

            if let Some(next) = mapping.get_mut(key) {
                return write(next, path, depth + 1, value);
            }

            let created = build(path, depth + 1, value)?;
            mapping.insert(key, created);
        }
        Step::Index(index) => {
            let Node::Sequence(items) = node else {
                return ExpectedSequenceSnafu {
                    path: prefix(path, depth),
                    index: *index,
                    kind,
                }
                .fail();
            };
            let position = position(path, depth, *index)?;

            if let Some(next) = items.get_mut(position) {
                return write(next, path, depth + 1, value);
            }

            let created = build(path, depth + 1, value)?;
            pad(items, position, path, depth, *index)?;
            items.push(created);
        }
    }

    Ok(())
}

/// Builds the containers for the steps of `path` starting at `depth`, with
/// `value` at the bottom.
fn build(path: &Path, depth: usize, value: Node) -> Result<Node> {
    let steps = path.steps().get(depth..).unwrap_or_default();

    if !steps.is_empty() {
        tracing::trace!(path = %prefix(path, depth), "creating missing containers");
    }

    steps
        .iter()
        .enumerate()
        .rev()
        .try_fold(value, |inner, (offset, step)| match step {
            Step::Key(key) => Ok(Node::Mapping(Mapping::from([(key, inner)]))),
            Step::Index(index) => {
                let depth = depth + offset;
                let mut items = Vec::new();
                pad(&mut items, position(path, depth, *index)?, path, depth, *index)?;
                items.push(inner);
                Ok(Node::Sequence(items))
            }
        })
}

fn position(path: &Path, depth: usize, index: i64) -> Result<usize> {
    if index < 0 {
        return NegativeIndexSnafu {
            path: prefix(path, depth),
            index,
        }
        .fail();
    }

    usize::try_from(index).map_err(|_| {
        IndexTooLargeSnafu {
            path: prefix(path, depth),
            index,
        }
        .build()
    })
}

/// Fills `items` with nulls up to (excluding) `position`, making room for one
/// more element. Nothing is changed if the memory cannot be reserved.
fn pad(items: &mut Vec<Node>, position: usize, path: &Path, depth: usize, index: i64) -> Result<()> {
    let additional = position.saturating_sub(items.len()).saturating_add(1);

    if items.try_reserve(additional).is_err() {
        return IndexTooLargeSnafu {
            path: prefix(path, depth),
            index,
        }
        .fail();
    }

    items.resize_with(position, Node::null);
    Ok(())
}

fn fill_node(existing: &mut Node, value: Node) {
    let (Node::Mapping(existing), Node::Mapping(incoming)) = (existing, value) else {
        return;
    };

    for (key, value) in incoming {
        match existing.get_mut(key.as_str()) {
            Some(current) => fill_node(current, value),
            None => {
                existing.insert(key, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;
    use crate::{node::Scalar, path};

    fn document(input: &str) -> Document {
        serde_yaml::from_str(input).expect("test YAML is a valid document")
    }

    fn keys(document: &Document, path: &Path) -> Vec<String> {
        document
            .get_mapping(path)
            .expect("path points to a mapping")
            .keys()
            .map(ToOwned::to_owned)
            .collect()
    }

    #[test]
    fn get_traverses_mappings_and_sequences() {
        let document = document(indoc! {"
            controlPlane:
              hosts:
              - publicAddress: 192.0.2.10
                sshPort: 22
              - publicAddress: 192.0.2.11
        "});

        assert_eq!(
            document.get_str(&path!["controlPlane", "hosts", 1, "publicAddress"]),
            Some("192.0.2.11")
        );
        assert_eq!(
            document.get_int(&path!["controlPlane", "hosts", 0, "sshPort"]),
            Some(22)
        );
        assert_eq!(
            document.get_sequence(&path!["controlPlane", "hosts"]).map(<[Node]>::len),
            Some(2)
        );
    }

    #[rstest]
    #[case(path!["missing"])]
    #[case(path!["name", "nested"])]
    #[case(path!["hosts", 2])]
    #[case(path!["hosts", -1])]
    #[case(path!["hosts", "first"])]
    #[case(path![0])]
    fn get_reports_absence(#[case] path: Path) {
        let document = document("name: demo\nhosts: [a, b]\n");
        assert_eq!(document.get(&path), None);
        assert!(!document.has(&path));
    }

    #[test]
    fn empty_path_returns_root() {
        let document = document("a: 1\n");
        assert_eq!(document.get(&path![]), Some(document.root()));
    }

    #[test]
    fn typed_getters_treat_mismatch_as_absence() {
        let document = document("port: 22\nname: demo\nenabled: true\n");

        assert_eq!(document.get_str(&path!["port"]), None);
        assert_eq!(document.get_int(&path!["name"]), None);
        assert_eq!(document.get_bool(&path!["name"]), None);
        assert_eq!(document.get_sequence(&path!["name"]), None);
        assert_eq!(document.get_bool(&path!["enabled"]), Some(true));
    }

    #[test]
    fn set_replaces_existing_key_in_place() {
        let mut document = document("apiVersion: kubeone.k8c.io/v1beta1\nkind: KubeOneCluster\n");
        document
            .set(&path!["apiVersion"], "kubeone.k8c.io/v1beta2")
            .expect("existing key can be replaced");

        assert_eq!(keys(&document, &path![]), ["apiVersion", "kind"]);
        assert_eq!(
            document.get_str(&path!["apiVersion"]),
            Some("kubeone.k8c.io/v1beta2")
        );
    }

    #[test]
    fn set_creates_missing_parents() {
        let mut document = Document::new();
        document
            .set(&path!["controlPlane", "hosts", 0, "sshUsername"], "root")
            .expect("missing parents are created");

        let hosts = document
            .get_sequence(&path!["controlPlane", "hosts"])
            .expect("hosts is a sequence");
        assert_eq!(hosts.len(), 1);
        assert_eq!(
            document.get_str(&path!["controlPlane", "hosts", 0, "sshUsername"]),
            Some("root")
        );
    }

    #[test]
    fn set_pads_sequences_with_null() {
        let mut document = document("items: [a, b]\n");
        document
            .set(&path!["items", 3], "d")
            .expect("sequence can be extended");

        let items = document.get_sequence(&path!["items"]).expect("items is a sequence");
        assert_eq!(items.len(), 4);
        assert!(items[2].is_null());
        assert_eq!(items[3], Node::from("d"));
    }

    #[test]
    fn set_below_explicit_null_fails() {
        let mut document = document("settings: ~\nitems: [a]\n");
        let original = document.clone();

        assert_eq!(
            document.set(&path!["settings", "debug"], true),
            Err(Error::ExpectedMapping {
                path: "settings".to_owned(),
                key: "debug".to_owned(),
                kind: "null",
            })
        );
        assert_eq!(document, original);

        document
            .set(&path!["settings"], Mapping::from([("debug", true)]))
            .expect("null leaf can be replaced");
        assert_eq!(document.get_bool(&path!["settings", "debug"]), Some(true));
    }

    #[test]
    fn padding_slots_are_nulls_like_any_other() {
        let mut document = document("items: [a]\n");
        document
            .set(&path!["items", 2], "c")
            .expect("sequence can be extended");
        let padded = document.clone();

        document
            .set(&path!["items", 1, "name"], "b")
            .expect_err("padding slot is an existing null");
        assert_eq!(document, padded);
    }

    #[test]
    fn set_rejects_unreachable_index() {
        let mut document = document("items: [a]\n");
        let original = document.clone();

        assert_eq!(
            document.set(&path!["items", i64::MAX], "x"),
            Err(Error::IndexTooLarge {
                path: "items".to_owned(),
                index: i64::MAX,
            })
        );
        assert_eq!(
            document.set(&path!["missing", i64::MAX, "name"], "x"),
            Err(Error::IndexTooLarge {
                path: "missing".to_owned(),
                index: i64::MAX,
            })
        );
        assert_eq!(document, original);
    }

    #[test]
    fn set_rejects_empty_path() {
        let mut document = Document::new();
        assert_eq!(document.set(&path![], "x"), Err(Error::EmptyPath));
    }

    #[rstest]
    #[case::index_into_mapping(path!["cloudProvider", 0])]
    #[case::key_into_sequence(path!["hosts", "first"])]
    #[case::key_into_scalar(path!["name", "first"])]
    #[case::below_scalar(path!["name", "a", "b", "c"])]
    #[case::index_into_root(path![0])]
    #[case::key_into_null(path!["settings", "debug"])]
    #[case::index_into_null(path!["settings", 0])]
    #[case::negative_index(path!["hosts", -1])]
    #[case::negative_index_below_missing(path!["missing", "deeper", -2, "x"])]
    fn set_failure_leaves_document_untouched(#[case] path: Path) {
        let mut document = document(indoc! {"
            name: demo
            cloudProvider:
              aws: {}
            hosts:
            - a
            settings: null
        "});
        let original = document.clone();

        document.set(&path, "value").expect_err("write must be rejected");
        assert_eq!(document, original);
    }

    #[test]
    fn set_error_names_offending_path() {
        let mut document = document("cloudProvider:\n  aws: {}\n");
        let err = document
            .set(&path!["cloudProvider", "aws", 1], "x")
            .expect_err("index into mapping is rejected");

        assert_eq!(
            err,
            Error::ExpectedSequence {
                path: "cloudProvider.aws".to_owned(),
                index: 1,
                kind: "mapping",
            }
        );
    }

    #[test]
    fn set_root_only_accepts_mappings() {
        let mut document = document("a: 1\n");

        assert!(document.set_root(Node::from(vec![1, 2])).is_err());
        assert_eq!(document.get_int(&path!["a"]), Some(1));

        document
            .set_root(Mapping::from([("b", 2)]))
            .expect("mapping is a valid root");
        assert_eq!(keys(&document, &path![]), ["b"]);
    }

    #[rstest]
    #[case::existing("hosts: [x, y]\n", Node::from(vec!["x", "y", "v"]))]
    #[case::absent("other: 1\n", Node::from(vec!["v"]))]
    fn append(#[case] input: &str, #[case] expected: Node) {
        let mut document = document(input);
        document
            .append(&path!["hosts"], "v")
            .expect("value can be appended");

        assert_eq!(document.get(&path!["hosts"]), Some(&expected));
    }

    #[rstest]
    #[case::scalar("hosts: single\n", "scalar")]
    #[case::null("hosts: ~\n", "null")]
    #[case::mapping("hosts:\n  a: 1\n", "mapping")]
    fn append_to_non_sequence_fails(#[case] input: &str, #[case] kind: &'static str) {
        let mut document = document(input);
        let original = document.clone();

        assert_eq!(
            document.append(&path!["hosts"], "v"),
            Err(Error::AppendToNonSequence {
                path: "hosts".to_owned(),
                kind,
            })
        );
        assert_eq!(document, original);
    }

    #[test]
    fn remove_key_preserves_order() {
        let mut document = document("a: 1\nb: 2\nc: 3\n");

        assert_eq!(document.remove(&path!["b"]), Some(Node::from(2)));
        assert_eq!(keys(&document, &path![]), ["a", "c"]);
    }

    #[test]
    fn remove_index_shifts_elements() {
        let mut document = document("items: [a, b, c]\n");

        assert_eq!(document.remove(&path!["items", 0]), Some(Node::from("a")));
        assert_eq!(
            document.get(&path!["items"]),
            Some(&Node::from(vec!["b", "c"]))
        );
    }

    #[rstest]
    #[case(path!["missing"])]
    #[case(path!["missing", "deeper"])]
    #[case(path!["items", 5])]
    #[case(path!["items", -1])]
    #[case(path!["items", "key"])]
    #[case(path!["name", "key"])]
    fn remove_absent_is_noop(#[case] path: Path) {
        let mut document = document("name: demo\nitems: [a]\n");
        let original = document.clone();

        assert_eq!(document.remove(&path), None);
        assert_eq!(document.remove(&path), None);
        assert_eq!(document, original);
    }

    #[test]
    fn remove_root_resets_to_empty_mapping() {
        let mut document = document("a: 1\n");
        document.remove(&path![]);

        assert_eq!(document, Document::new());
    }

    #[test]
    fn fill_appends_new_keys_after_existing_ones() {
        let mut document = document("b: 2\n");
        document
            .fill(&path![], Mapping::from([("a", 1)]))
            .expect("root can be filled");

        assert_eq!(keys(&document, &path![]), ["b", "a"]);
    }

    #[test]
    fn fill_merges_deeply_and_keeps_existing_values() {
        let mut document = document(indoc! {"
            clusterNetwork:
              podSubnet: 10.0.0.0/16
              cni:
                cilium: {}
            versions:
              kubernetes: 1.29.4
        "});

        let defaults: Node = serde_yaml::from_str(indoc! {"
            clusterNetwork:
              podSubnet: 10.244.0.0/16
              serviceSubnet: 10.96.0.0/12
              cni:
                canal:
                  mtu: 1450
            versions: legacy
            machineController:
              deploy: true
        "})
        .expect("test YAML is valid");

        document.fill(&path![], defaults).expect("root can be filled");

        assert_eq!(
            document.get_str(&path!["clusterNetwork", "podSubnet"]),
            Some("10.0.0.0/16")
        );
        assert_eq!(
            document.get_str(&path!["clusterNetwork", "serviceSubnet"]),
            Some("10.96.0.0/12")
        );
        assert_eq!(
            keys(&document, &path!["clusterNetwork", "cni"]),
            ["cilium", "canal"]
        );
        assert_eq!(
            document.get_str(&path!["versions", "kubernetes"]),
            Some("1.29.4")
        );
        assert_eq!(
            keys(&document, &path![]),
            ["clusterNetwork", "versions", "machineController"]
        );
    }

    #[rstest]
    #[case::scalar("value: keep\n")]
    #[case::sequence("value: [keep]\n")]
    #[case::null("value: ~\n")]
    fn fill_never_replaces_non_mappings(#[case] input: &str) {
        let mut document = document(input);
        let before = document.get(&path!["value"]).cloned();

        document
            .fill(&path!["value"], Mapping::from([("a", 1)]))
            .expect("fill succeeds");
        assert_eq!(document.get(&path!["value"]).cloned(), before);
    }

    #[test]
    fn fill_missing_path_sets_value() {
        let mut document = Document::new();
        document
            .fill(&path!["containerRuntime", "containerd"], Mapping::new())
            .expect("missing path is created");

        assert_eq!(
            document.get(&path!["containerRuntime", "containerd"]),
            Some(&Node::empty_mapping())
        );
    }

    #[test]
    fn deserialize_rejects_non_mapping_root() {
        assert!(serde_yaml::from_str::<Document>("- a\n- b\n").is_err());
        assert!(serde_yaml::from_str::<Document>("just a string").is_err());
        assert_eq!(
            Document::from_node(Node::Scalar(Scalar::Int(1))),
            Err(Error::RootNotMapping { kind: "scalar" })
        );
    }
}
