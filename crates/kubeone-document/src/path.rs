use std::fmt::Display;

/// A single step of a [`Path`], either a mapping key or a sequence index.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Step {
    /// Looks up a key in a mapping.
    Key(String),

    /// Addresses an element of a sequence. Negative indices never resolve.
    Index(i64),
}

impl Step {
    /// Returns the key if this is a [`Step::Key`].
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the index if this is a [`Step::Index`].
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Self::Key(_) => None,
            Self::Index(index) => Some(*index),
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(key) if key.contains('.') => write!(f, "{key:?}"),
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Step {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for Step {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<&String> for Step {
    fn from(value: &String) -> Self {
        Self::Key(value.clone())
    }
}

impl From<i32> for Step {
    fn from(value: i32) -> Self {
        Self::Index(value.into())
    }
}

impl From<i64> for Step {
    fn from(value: i64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for Step {
    fn from(value: usize) -> Self {
        // Indices beyond i64::MAX can never resolve, so saturating keeps them out of range.
        Self::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// An address into a document tree, made up of an ordered list of [`Step`]s.
///
/// The empty path addresses the root of the tree. Paths are plain values and
/// carry no reference to the tree they are used with.
///
/// ```
/// use kubeone_document::{Path, Step, path};
///
/// let path = path!["controlPlane", "hosts", 0, "sshUsername"];
///
/// assert_eq!(path.to_string(), "controlPlane.hosts.0.sshUsername");
/// assert_eq!(path.tail(), Some(&Step::Key("sshUsername".to_owned())));
/// assert_eq!(path.parent(), path!["controlPlane", "hosts", 0]);
/// ```
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Path(Vec<Step>);

impl Path {
    /// Creates the empty path, which addresses the root.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.0.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Returns the path without its last step. The parent of the empty path
    /// is the empty path.
    pub fn parent(&self) -> Self {
        match self.0.split_last() {
            Some((_, parent)) => Self(parent.to_vec()),
            None => Self::new(),
        }
    }

    /// Returns the last step, or [`None`] for the empty path.
    pub fn tail(&self) -> Option<&Step> {
        self.0.last()
    }

    /// Splits the path into its parent and its last step.
    pub fn split_last(&self) -> Option<(Self, &Step)> {
        self.0
            .split_last()
            .map(|(tail, parent)| (Self(parent.to_vec()), tail))
    }

    /// Returns a new path with `step` appended.
    pub fn join(&self, step: impl Into<Step>) -> Self {
        let mut steps = self.0.clone();
        steps.push(step.into());
        Self(steps)
    }

    pub fn push(&mut self, step: impl Into<Step>) {
        self.0.push(step.into());
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, step) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

impl From<Vec<Step>> for Path {
    fn from(value: Vec<Step>) -> Self {
        Self(value)
    }
}

impl FromIterator<Step> for Path {
    fn from_iter<T: IntoIterator<Item = Step>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type IntoIter = std::slice::Iter<'a, Step>;
    type Item = &'a Step;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Builds a [`Path`] from a list of keys and indices.
///
/// Every element is converted with [`Step::from`], so string-like values
/// become keys and integers become indices.
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($step:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::Step::from($step)),+])
    };
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(path![], path![])]
    #[case(path!["a"], path![])]
    #[case(path!["a", 1, "b"], path!["a", 1])]
    fn parent(#[case] input: Path, #[case] expected: Path) {
        assert_eq!(input.parent(), expected);
    }

    #[rstest]
    #[case(path![], None)]
    #[case(path!["a"], Some(Step::Key("a".to_owned())))]
    #[case(path!["a", 3], Some(Step::Index(3)))]
    fn tail(#[case] input: Path, #[case] expected: Option<Step>) {
        assert_eq!(input.tail(), expected.as_ref());
    }

    #[rstest]
    #[case(path![], "")]
    #[case(path!["apiVersion"], "apiVersion")]
    #[case(path!["controlPlane", "hosts", 0, "sshUsername"], "controlPlane.hosts.0.sshUsername")]
    #[case(path!["metadata", "labels", "app.kubernetes.io/name"], r#"metadata.labels."app.kubernetes.io/name""#)]
    #[case(path!["items", -1], "items.-1")]
    fn display(#[case] input: Path, #[case] expected: &str) {
        assert_eq!(input.to_string(), expected);
    }

    #[test]
    fn join_leaves_original_untouched() {
        let base = path!["cloudProvider"];
        let child = base.join("packet");

        assert_eq!(base, path!["cloudProvider"]);
        assert_eq!(child, path!["cloudProvider", "packet"]);
    }

    #[test]
    fn split_last() {
        let path = path!["a", "b"];
        let (parent, tail) = path.split_last().expect("path is not empty");

        assert_eq!(parent, path!["a"]);
        assert_eq!(tail, &Step::Key("b".to_owned()));
        assert!(path![].split_last().is_none());
    }

    #[test]
    fn usize_indices_saturate() {
        assert_eq!(Step::from(usize::MAX), Step::Index(i64::MAX));
        assert_eq!(Step::from(7_usize), Step::Index(7));
    }
}
