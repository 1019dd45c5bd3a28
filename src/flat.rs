//! Flat encoding of a forest as a pre-order list of parent references.
//!
//! A [`FlatList`] stores every node once, in pre-order, together with the ID
//! of its parent. Tree shape is derived from the parent references only; the
//! list order decides the order of siblings. Editing operations keep both in
//! sync, so the list stays in pre-order:
//!
//! ```text
//! Forest:              Flat list:
//!
//! about                about        (root)
//! collections          collections  (root)
//! |-- spring           spring       -> collections
//! `-- summer           summer       -> collections
//! ```

mod rebuild;
mod reorder;

use std::collections::HashSet;

use crate::forest::traverse::DftEvent;
use crate::{Forest, NodeId};

pub use self::reorder::ReorderPolicy;

/// A node projected with an explicit parent reference.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatEntry<T> {
    /// Node ID.
    pub id: NodeId,
    /// Display data, opaque to the engine.
    pub label: T,
    /// Parent node ID, `None` for roots.
    #[cfg_attr(feature = "serde", serde(rename = "parentId", default))]
    pub parent: Option<NodeId>,
}

impl<T> FlatEntry<T> {
    /// Creates an entry for a root node.
    #[inline]
    #[must_use]
    pub fn root(id: impl Into<NodeId>, label: T) -> Self {
        Self {
            id: id.into(),
            label,
            parent: None,
        }
    }

    /// Creates an entry for a child of `parent`.
    #[inline]
    #[must_use]
    pub fn child(id: impl Into<NodeId>, label: T, parent: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            label,
            parent: Some(parent.into()),
        }
    }

    /// Returns true if the entry is a root.
    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Pre-order list of flat entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FlatList<T> {
    /// Entries.
    entries: Vec<FlatEntry<T>>,
}

impl<T> FlatList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entries.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[FlatEntry<T>] {
        &self.entries
    }

    /// Consumes the list and returns the entries.
    #[inline]
    #[must_use]
    pub fn into_entries(self) -> Vec<FlatEntry<T>> {
        self.entries
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator of the entries.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, FlatEntry<T>> {
        self.entries.iter()
    }

    /// Returns the index of the first entry with the given ID.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == *id)
    }

    /// Returns the first entry with the given ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FlatEntry<T>> {
        self.entries.iter().find(|entry| entry.id == *id)
    }
}

impl<T: Clone> Forest<T> {
    /// Flattens the forest into a pre-order list of parent references.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::TreeBuilder;
    ///
    /// let forest = TreeBuilder::new("about", ())
    ///     .sibling("collections", ())
    ///     .child("spring", ())
    ///     .build();
    /// let flat = forest.flatten();
    ///
    /// let pairs = flat
    ///     .iter()
    ///     .map(|entry| (entry.id.as_str(), entry.parent.as_ref().map(|p| p.as_str())))
    ///     .collect::<Vec<_>>();
    /// assert_eq!(
    ///     pairs,
    ///     [("about", None), ("collections", None), ("spring", Some("collections"))]
    /// );
    /// ```
    #[must_use]
    pub fn flatten(&self) -> FlatList<T> {
        let mut entries = Vec::new();
        let mut parents: Vec<&NodeId> = Vec::new();
        for ev in self.depth_first_traverse() {
            match ev {
                DftEvent::Open(node) => {
                    entries.push(FlatEntry {
                        id: node.id.clone(),
                        label: node.label.clone(),
                        parent: parents.last().map(|&parent| parent.clone()),
                    });
                    parents.push(&node.id);
                }
                DftEvent::Close(_) => {
                    parents.pop();
                }
            }
        }
        FlatList { entries }
    }
}

/// Returns the end (exclusive) of the subtree block starting at `start`.
///
/// The block is the entry at `start` followed by the contiguous entries that
/// descend from it.
fn block_end<T>(entries: &[FlatEntry<T>], start: usize) -> usize {
    let mut members: HashSet<&str> = HashSet::new();
    members.insert(entries[start].id.as_str());
    let mut end = start + 1;
    while let Some(entry) = entries.get(end) {
        match &entry.parent {
            Some(parent) if members.contains(parent.as_str()) => {
                members.insert(entry.id.as_str());
                end += 1;
            }
            _ => break,
        }
    }
    end
}

impl<T> Default for FlatList<T> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
        }
    }
}

impl<T> From<Vec<FlatEntry<T>>> for FlatList<T> {
    #[inline]
    fn from(entries: Vec<FlatEntry<T>>) -> Self {
        Self { entries }
    }
}

impl<T> FromIterator<FlatEntry<T>> for FlatList<T> {
    fn from_iter<I: IntoIterator<Item = FlatEntry<T>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for FlatList<T> {
    type Item = FlatEntry<T>;
    type IntoIter = std::vec::IntoIter<FlatEntry<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FlatList<T> {
    type Item = &'a FlatEntry<T>;
    type IntoIter = core::slice::Iter<'a, FlatEntry<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
