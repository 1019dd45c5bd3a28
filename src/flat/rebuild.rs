//! Rebuilding a forest from a flat list.

use core::mem;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::flat::FlatList;
use crate::{Forest, Node, NodeId, RebuildError};

/// Childless copies of the entries with the child links between them.
struct Shells<'a, T> {
    /// ID of each shell.
    ids: Vec<&'a NodeId>,
    /// Label of each shell.
    labels: Vec<&'a T>,
    /// Child shells of each shell, in list order.
    children: Vec<Vec<usize>>,
}

impl<T: Clone> Shells<'_, T> {
    /// Creates the node for the shell and its descendants.
    ///
    /// Returns `None` for a shell that has already been emitted.
    fn assemble(&self, shell: usize, visited: &mut [bool]) -> Option<Node<T>> {
        if mem::replace(&mut visited[shell], true) {
            return None;
        }
        let children = self.children[shell]
            .iter()
            .filter_map(|&child| self.assemble(child, visited))
            .collect();
        Some(Node {
            id: self.ids[shell].clone(),
            label: self.labels[shell].clone(),
            children,
        })
    }
}

impl<T: Clone> FlatList<T> {
    /// Rebuilds the forest from the list.
    ///
    /// Every entry becomes a node. Entries without a parent become roots, and
    /// other entries become children of their parent; in both cases the list
    /// order gives the sibling order.
    ///
    /// If an ID occurs more than once, the node gets the label of the last
    /// occurrence and is placed at its first reachable position.
    ///
    /// # Errors
    ///
    /// * [`RebuildError::DanglingParent`]
    ///     + In case an entry refers to a parent that is not in the list.
    /// * [`RebuildError::Unreachable`]
    ///     + In case some entries are not descendants of any root, i.e. the
    ///       parent references form a loop.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::{FlatEntry, FlatList, RebuildError};
    ///
    /// let flat = FlatList::from(vec![
    ///     FlatEntry::root("about", "About"),
    ///     FlatEntry::child("spring", "Spring", "collections"),
    ///     FlatEntry::root("collections", "Collections"),
    /// ]);
    /// let forest = flat.rebuild().expect("every parent exists");
    /// assert_eq!(forest.debug_print().to_string(), "About\nCollections\n`-- Spring");
    ///
    /// let dangling = FlatList::from(vec![FlatEntry::child("spring", "Spring", "winter")]);
    /// assert!(matches!(
    ///     dangling.rebuild(),
    ///     Err(RebuildError::DanglingParent { .. })
    /// ));
    /// ```
    pub fn rebuild(&self) -> Result<Forest<T>, RebuildError> {
        // Step 1: one shell per unique ID.
        let mut slots: HashMap<&str, usize> = HashMap::with_capacity(self.entries.len());
        let mut shells = Shells {
            ids: Vec::with_capacity(self.entries.len()),
            labels: Vec::with_capacity(self.entries.len()),
            children: Vec::new(),
        };
        for entry in &self.entries {
            match slots.get(entry.id.as_str()) {
                Some(&slot) => shells.labels[slot] = &entry.label,
                None => {
                    slots.insert(entry.id.as_str(), shells.ids.len());
                    shells.ids.push(&entry.id);
                    shells.labels.push(&entry.label);
                }
            }
        }
        shells.children = vec![Vec::new(); shells.ids.len()];

        // Step 2: link children to parents in list order.
        let mut roots = Vec::new();
        for entry in &self.entries {
            let slot = slots[entry.id.as_str()];
            match &entry.parent {
                None => roots.push(slot),
                Some(parent) => {
                    let parent_slot = match slots.get(parent.as_str()) {
                        Some(&v) => v,
                        None => {
                            debug!(id = %entry.id, parent = %parent, "dangling parent reference");
                            return Err(RebuildError::DanglingParent {
                                id: entry.id.clone(),
                                parent: parent.clone(),
                            });
                        }
                    };
                    shells.children[parent_slot].push(slot);
                }
            }
        }

        // Step 3: assemble the roots.
        let mut visited = vec![false; shells.ids.len()];
        let roots: Vec<_> = roots
            .into_iter()
            .filter_map(|slot| shells.assemble(slot, &mut visited))
            .collect();
        if let Some(slot) = visited.iter().position(|&done| !done) {
            debug!(id = %shells.ids[slot], "entry unreachable from any root");
            return Err(RebuildError::Unreachable {
                id: shells.ids[slot].clone(),
            });
        }

        trace!(nodes = shells.ids.len(), "rebuilt forest");
        Ok(Forest::from(roots))
    }
}
