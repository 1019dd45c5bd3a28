//! Forest.

pub mod builder;
mod debug_print;
mod edit;
pub mod traverse;

use tracing::{debug, trace};

use crate::node::find_in;
use crate::{Node, NodeId, Relation, StructureError};

pub use self::builder::TreeBuilder;
pub use self::debug_print::DebugPrint;
use self::traverse::{DepthFirstTraverse, DftEvent};

/// Forest: an ordered sequence of root nodes.
///
/// Every node ID must be unique across all roots and all descendants. The
/// engine does not verify this on each call; operations on a forest with
/// duplicate IDs act on the first match in pre-order.
///
/// Every editing method borrows the forest and returns a new one, so the
/// current forest stays valid for other readers and discarding the result
/// cancels the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Forest<T> {
    /// Root nodes.
    roots: Vec<Node<T>>,
}

impl<T> Forest<T> {
    /// Creates a new empty forest.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the root nodes.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[Node<T>] {
        &self.roots
    }

    /// Consumes the forest and returns the root nodes.
    #[inline]
    #[must_use]
    pub fn into_roots(self) -> Vec<Node<T>> {
        self.roots
    }

    /// Returns the number of nodes in the forest, at any depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Returns true if the forest has no nodes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the first node with the given ID, in pre-order.
    #[inline]
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Node<T>> {
        find_in(&self.roots, id)
    }

    /// Returns true if a node with the given ID exists.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Returns the parent of the node with the given ID.
    ///
    /// Returns `None` if the node is a root or is not in the forest.
    #[must_use]
    pub fn parent(&self, id: &str) -> Option<&Node<T>> {
        edit::parent_in(&self.roots, id)
    }

    /// Returns true if `candidate` is a strict descendant of `ancestor`.
    ///
    /// A node is not its own descendant. Returns `false` if `ancestor` is
    /// not in the forest.
    ///
    /// Hosts use this as the precondition of [`insert`][`Self::insert`]:
    /// dropping a node onto anything inside its own subtree must be refused.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::TreeBuilder;
    ///
    /// let forest = TreeBuilder::new("a", ()).child("b", ()).child("c", ()).build();
    ///
    /// assert!(forest.is_descendant("a", "c"));
    /// assert!(!forest.is_descendant("c", "a"));
    /// assert!(!forest.is_descendant("a", "a"));
    /// ```
    #[must_use]
    pub fn is_descendant(&self, ancestor: &str, candidate: &str) -> bool {
        self.find(ancestor)
            .map_or(false, |node| find_in(&node.children, candidate).is_some())
    }

    /// Returns a depth-first traverser over the whole forest.
    #[inline]
    #[must_use]
    pub fn depth_first_traverse(&self) -> DepthFirstTraverse<'_, T> {
        DepthFirstTraverse::with_toplevel(&self.roots)
    }

    /// Returns an iterator of node IDs in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.depth_first_traverse().filter_map(|ev| match ev {
            DftEvent::Open(node) => Some(&node.id),
            DftEvent::Close(_) => None,
        })
    }

    /// Returns the forest printer for debugging.
    ///
    /// The output format is not guaranteed to be stable.
    #[inline]
    #[must_use]
    pub fn debug_print(&self) -> DebugPrint<'_, T> {
        DebugPrint::new(&self.roots)
    }
}

impl<T: Clone> Forest<T> {
    /// Detaches the node with the given ID together with its subtree.
    ///
    /// Returns the detached node and the forest without it. If the node does
    /// not exist, returns `None` and a forest equal to `self`.
    ///
    /// The detached node keeps its children untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::TreeBuilder;
    ///
    /// let forest = TreeBuilder::new("root", ())
    ///     .child("0", ())
    ///     .child("0-0", ())
    ///     .parent()
    ///     .sibling("1", ())
    ///     .build();
    ///
    /// let (removed, rest) = forest.remove("0");
    /// let removed = removed.expect("`0` exists");
    /// assert_eq!(removed.children.len(), 1);
    /// assert_eq!(rest.ids().map(|id| id.as_str()).collect::<Vec<_>>(), ["root", "1"]);
    /// ```
    #[must_use]
    pub fn remove(&self, id: &str) -> (Option<Node<T>>, Self) {
        let mut roots = self.roots.clone();
        let removed = edit::detach(&mut roots, id);
        match &removed {
            Some(_) => trace!(id, "detached subtree"),
            None => debug!(id, "node to detach not found"),
        }
        (removed, Self { roots })
    }

    /// Removes the node with the given ID together with its subtree.
    ///
    /// This is the delete action of a tree view. Returns a forest equal to
    /// `self` if the node does not exist.
    #[inline]
    #[must_use]
    pub fn prune(&self, id: &str) -> Self {
        self.remove(id).1
    }

    /// Detaches the node with the given ID alone, splicing its children up.
    ///
    /// The children take the place of the node in its former sibling list,
    /// in order. The returned node has no children.
    ///
    /// ```text
    /// Before `remove_single("1")`:
    ///
    /// root
    /// |-- 0
    /// |-- 1
    /// |   |-- 1-0
    /// |   `-- 1-1
    /// `-- 2
    ///
    /// After:
    ///
    /// root
    /// |-- 0
    /// |-- 1-0
    /// |-- 1-1
    /// `-- 2
    /// ```
    #[must_use]
    pub fn remove_single(&self, id: &str) -> (Option<Node<T>>, Self) {
        let mut roots = self.roots.clone();
        let removed = edit::detach_single(&mut roots, id);
        match &removed {
            Some(_) => trace!(id, "detached single node"),
            None => debug!(id, "node to detach not found"),
        }
        (removed, Self { roots })
    }

    /// Inserts the node at the given place relative to the target.
    ///
    /// * [`Relation::Before`] and [`Relation::After`] put the node next to
    ///   the target, in the target's sibling list.
    /// * [`Relation::Inside`] appends the node as the last child of the target.
    ///
    /// If the target does not exist, the node is dropped and the returned
    /// forest equals `self`.
    ///
    /// This method does not check that the node's ID is new to the forest;
    /// detach it first (see [`remove`][`Self::remove`]) or use
    /// [`move_node`][`Self::move_node`], which does both.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::{Forest, Node, Relation};
    ///
    /// let forest = Forest::from(vec![Node::new("about", ()), Node::new("collections", ())]);
    /// let forest = forest.insert(Node::new("x", ()), "about", Relation::After);
    ///
    /// let ids = forest.ids().map(|id| id.as_str()).collect::<Vec<_>>();
    /// assert_eq!(ids, ["about", "x", "collections"]);
    /// ```
    #[must_use]
    pub fn insert(&self, node: Node<T>, target: &str, relation: Relation) -> Self {
        let mut roots = self.roots.clone();
        match edit::place(&mut roots, node, target, relation) {
            Ok(()) => trace!(target_id = target, ?relation, "inserted node"),
            Err(node) => debug!(id = %node.id, target_id = target, "drop target not found, insertion skipped"),
        }
        Self { roots }
    }

    /// Moves the node with the given ID to the given place relative to the target.
    ///
    /// This is [`remove`][`Self::remove`] followed by
    /// [`insert`][`Self::insert`], guarded by the ancestry check.
    /// A missing node or a missing target is not an error: the returned
    /// forest equals `self` and no node is lost.
    ///
    /// # Errors
    ///
    /// * [`StructureError::AncestorDescendantLoop`]
    ///     + In case `relation` is `Inside` and `target` is `id` itself.
    ///     + In case `target` is a descendant of `id`.
    /// * [`StructureError::UnorderableSiblings`]
    ///     + In case `relation` is `Before` or `After` and `target` is `id` itself.
    pub fn move_node(
        &self,
        id: &str,
        target: &str,
        relation: Relation,
    ) -> Result<Self, StructureError> {
        if id == target {
            debug!(id, ?relation, "refused to drop a node onto itself");
            return Err(if relation.is_sibling() {
                StructureError::UnorderableSiblings
            } else {
                StructureError::AncestorDescendantLoop
            });
        }
        if self.is_descendant(id, target) {
            debug!(id, target_id = target, "refused to drop a node into its own subtree");
            return Err(StructureError::AncestorDescendantLoop);
        }
        if !self.contains(target) {
            debug!(id, target_id = target, "drop target not found, move skipped");
            return Ok(self.clone());
        }

        let (node, forest) = self.remove(id);
        Ok(match node {
            Some(node) => forest.insert(node, target, relation),
            None => forest,
        })
    }
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self {
            roots: Default::default(),
        }
    }
}

impl<T> From<Vec<Node<T>>> for Forest<T> {
    #[inline]
    fn from(roots: Vec<Node<T>>) -> Self {
        Self { roots }
    }
}

impl<T> FromIterator<Node<T>> for Forest<T> {
    fn from_iter<I: IntoIterator<Item = Node<T>>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Forest<T> {
    type Item = Node<T>;
    type IntoIter = std::vec::IntoIter<Node<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Forest<T> {
    type Item = &'a Node<T>;
    type IntoIter = core::slice::Iter<'a, Node<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
