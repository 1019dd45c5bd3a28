//! Reordering, promoting, and demoting flat entries.
//!
//! Each operation moves an entry together with its subtree block (the entry
//! and its contiguous descendants), and rewrites the parent reference in the
//! same step, so the list stays in pre-order.

use tracing::{debug, trace};

use crate::flat::{block_end, FlatList};
use crate::Position;

/// How [`FlatList::reorder`] treats a drop next to an entry of another parent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ReorderPolicy {
    /// The dragged entry adopts the parent of the target.
    #[default]
    Reparent,
    /// The drop is ignored unless both entries have the same parent.
    SiblingsOnly,
}

impl<T: Clone> FlatList<T> {
    /// Moves the dragged entry directly above or below the target entry.
    ///
    /// The dragged entry moves with its descendants. [`Position::Above`]
    /// puts it directly before the target; [`Position::Below`] puts it after
    /// the target and the target's descendants, so it becomes the target's
    /// next sibling.
    ///
    /// Returns an unchanged copy if either ID is missing, if both IDs are the
    /// same, if the target is inside the dragged subtree, or if the policy
    /// refuses the drop.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::{Position, ReorderPolicy, TreeBuilder};
    ///
    /// let flat = TreeBuilder::new("about", ())
    ///     .sibling("collections", ())
    ///     .child("spring", ())
    ///     .build()
    ///     .flatten();
    ///
    /// // Drag "spring" above "about": it leaves "collections" for the root level.
    /// let moved = flat.reorder("spring", "about", Position::Above, ReorderPolicy::Reparent);
    /// let forest = moved.rebuild().expect("parents stay consistent");
    /// let roots = forest.roots().iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
    /// assert_eq!(roots, ["spring", "about", "collections"]);
    ///
    /// // The same drop is refused when only sibling reordering is allowed.
    /// let kept = flat.reorder("spring", "about", Position::Above, ReorderPolicy::SiblingsOnly);
    /// assert_eq!(kept, flat);
    /// ```
    #[must_use]
    pub fn reorder(
        &self,
        dragged: &str,
        target: &str,
        position: Position,
        policy: ReorderPolicy,
    ) -> Self {
        if dragged == target {
            debug!(dragged, "reorder onto itself ignored");
            return self.clone();
        }
        let (from, to) = match (self.position(dragged), self.position(target)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                debug!(dragged, target_id = target, "reorder with missing entry ignored");
                return self.clone();
            }
        };
        let end = block_end(&self.entries, from);
        if (from..end).contains(&to) || self.has_ancestor(target, dragged) {
            debug!(dragged, target_id = target, "reorder into own subtree ignored");
            return self.clone();
        }
        let new_parent = self.entries[to].parent.clone();
        if policy == ReorderPolicy::SiblingsOnly && self.entries[from].parent != new_parent {
            debug!(dragged, target_id = target, "reorder across parents ignored");
            return self.clone();
        }

        let mut entries = self.entries.clone();
        let mut block: Vec<_> = entries.drain(from..end).collect();
        block[0].parent = new_parent;
        // Index of the target once the block is gone.
        let to = if to > from { to - (end - from) } else { to };
        let at = match position {
            Position::Above => to,
            Position::Below => block_end(&entries, to),
        };
        entries.splice(at..at, block);
        trace!(dragged, target_id = target, ?position, "reordered entry");
        Self { entries }
    }

    /// Moves the entry up one level, making it the next sibling of its parent.
    ///
    /// Returns an unchanged copy if the entry is missing or is a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::TreeBuilder;
    ///
    /// let flat = TreeBuilder::new("a", ()).child("b", ()).build().flatten();
    /// let forest = flat.promote("b").rebuild().expect("parents stay consistent");
    /// let roots = forest.roots().iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
    /// assert_eq!(roots, ["a", "b"]);
    /// ```
    #[must_use]
    pub fn promote(&self, id: &str) -> Self {
        let index = match self.position(id) {
            Some(v) => v,
            None => {
                debug!(id, "entry to promote not found");
                return self.clone();
            }
        };
        let parent = match &self.entries[index].parent {
            Some(v) => v.clone(),
            None => {
                trace!(id, "root entry cannot be promoted");
                return self.clone();
            }
        };
        let grandparent = match self.get(parent.as_str()) {
            Some(entry) => entry.parent.clone(),
            None => {
                debug!(id, parent = %parent, "parent of entry to promote not found");
                return self.clone();
            }
        };

        let mut entries = self.entries.clone();
        let end = block_end(&entries, index);
        let mut block: Vec<_> = entries.drain(index..end).collect();
        block[0].parent = grandparent;
        let at = match entries.iter().position(|entry| entry.id == parent) {
            Some(parent_index) => block_end(&entries, parent_index),
            None => index,
        };
        entries.splice(at..at, block);
        trace!(id, "promoted entry");
        Self { entries }
    }

    /// Moves the entry down one level, making it the last child of its
    /// previous sibling.
    ///
    /// The new parent is the nearest earlier entry with the same parent, which
    /// is not necessarily the entry right before it in the list: descendants
    /// of the previous sibling are skipped. An entry whose parent comes right
    /// before it has no previous sibling and stays where it is.
    ///
    /// Returns an unchanged copy if the entry is missing or has no previous
    /// sibling (in particular, if it is the first entry).
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::TreeBuilder;
    ///
    /// let flat = TreeBuilder::new("a", ()).sibling("b", ()).build().flatten();
    /// let forest = flat.demote("b").rebuild().expect("parents stay consistent");
    /// assert_eq!(forest.parent("b").map(|n| n.id.as_str()), Some("a"));
    /// ```
    #[must_use]
    pub fn demote(&self, id: &str) -> Self {
        let index = match self.position(id) {
            Some(v) => v,
            None => {
                debug!(id, "entry to demote not found");
                return self.clone();
            }
        };
        let parent = self.entries[index].parent.as_ref();
        let prev_sibling = self.entries[..index]
            .iter()
            .rev()
            .take_while(|entry| Some(&entry.id) != parent)
            .find(|entry| entry.parent.as_ref() == parent);
        let new_parent = match prev_sibling {
            Some(entry) => entry.id.clone(),
            None => {
                trace!(id, "entry without previous sibling cannot be demoted");
                return self.clone();
            }
        };

        let mut entries = self.entries.clone();
        entries[index].parent = Some(new_parent);
        trace!(id, "demoted entry");
        Self { entries }
    }

    /// Returns true if `ancestor` is reached by following parent references
    /// up from `id`.
    ///
    /// Works on lists that are not in pre-order, and stops after as many
    /// steps as there are entries if the references form a loop.
    fn has_ancestor(&self, id: &str, ancestor: &str) -> bool {
        let mut current = self.get(id).and_then(|entry| entry.parent.as_ref());
        for _ in 0..self.entries.len() {
            match current {
                Some(parent) if *parent == *ancestor => return true,
                Some(parent) => {
                    current = self
                        .get(parent.as_str())
                        .and_then(|entry| entry.parent.as_ref());
                }
                None => return false,
            }
        }
        false
    }
}
