use derive_more::{Deref, From, IntoIterator};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// IndexPath
///
/// Field positions from the root record down to one leaf, one step per
/// embedding level. Renders as `0.2.1`.
///

#[derive(
    Clone,
    Debug,
    Default,
    Deref,
    Deserialize,
    Eq,
    From,
    Hash,
    IntoIterator,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct IndexPath(Vec<usize>);

impl IndexPath {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of embedding levels crossed to reach the leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub(crate) fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    pub(crate) fn pop(&mut self) {
        self.0.pop();
    }
}

impl From<&[usize]> for IndexPath {
    fn from(steps: &[usize]) -> Self {
        Self(steps.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for IndexPath {
    fn from(steps: [usize; N]) -> Self {
        Self(steps.to_vec())
    }
}

impl Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{step}")?;
        }

        Ok(())
    }
}
