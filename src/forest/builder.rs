//! Tree and forest builder.

use crate::{Forest, Node, NodeId};

/// Tree builder.
///
/// `TreeBuilder` remembers "the current node".
///
/// * [`TreeBuilder::child()`][`TreeBuilder::child`] creates a new child node
///   (as the last child) of the current node.
/// * [`TreeBuilder::sibling()`][`TreeBuilder::sibling`] creates a new next
///   sibling of the current node. Siblings of a root are new roots.
/// * [`TreeBuilder::parent()`][`TreeBuilder::parent`] makes the parent the new current node.
///
/// [`TreeBuilder::build()`][`TreeBuilder::build`] closes every open node and
/// returns the forest.
///
/// # Examples
///
/// ```
/// use treemove::TreeBuilder;
///
/// let forest = TreeBuilder::new("root", "root")
///     .child("0", "0")
///     .child("0-0", "0-0")
///     .sibling("0-1", "0-1")
///     .parent()
///     .sibling("1", "1")
///     .build();
///
/// let expected = "\
/// root
/// |-- 0
/// |   |-- 0-0
/// |   `-- 0-1
/// `-- 1";
/// assert_eq!(forest.debug_print().to_string(), expected);
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder<T> {
    /// Completed roots.
    roots: Vec<Node<T>>,
    /// Open nodes from the root to the current node.
    open: Vec<Node<T>>,
}

impl<T> TreeBuilder<T> {
    /// Creates a root node and the tree builder for the root node.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: T) -> Self {
        Self {
            roots: Vec::new(),
            open: vec![Node::new(id, label)],
        }
    }

    /// Appends a child node to the current node, and changes the current node to it.
    #[must_use]
    pub fn child(mut self, id: impl Into<NodeId>, label: T) -> Self {
        self.open.push(Node::new(id, label));
        self
    }

    /// Adds a next sibling node to the current node, and changes the current node to it.
    #[must_use]
    pub fn sibling(mut self, id: impl Into<NodeId>, label: T) -> Self {
        self.close_current();
        self.open.push(Node::new(id, label));
        self
    }

    /// Changes the current node to the parent of the current node.
    ///
    /// # Panics
    ///
    /// Panics if the current node is a root.
    #[must_use]
    pub fn parent(mut self) -> Self {
        if self.open.len() < 2 {
            panic!("[precondition] the current node should not be a root");
        }
        self.close_current();
        self
    }

    /// Returns the ID of the current node.
    #[must_use]
    pub fn current_id(&self) -> &NodeId {
        &self
            .open
            .last()
            .expect("[consistency] the builder always has a current node")
            .id
    }

    /// Closes all open nodes and returns the forest.
    #[must_use]
    pub fn build(mut self) -> Forest<T> {
        while !self.open.is_empty() {
            self.close_current();
        }
        Forest::from(self.roots)
    }

    /// Attaches the current node to its parent, or to the roots.
    fn close_current(&mut self) {
        if let Some(node) = self.open.pop() {
            match self.open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.roots.push(node),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_of_root_is_root() {
        let forest = TreeBuilder::new("a", ())
            .child("a-0", ())
            .parent()
            .sibling("b", ())
            .build();
        let roots: Vec<_> = forest.roots().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(roots, ["a", "b"]);
    }

    #[test]
    fn current_id_tracks_cursor() {
        let builder = TreeBuilder::new("a", ()).child("a-0", ());
        assert_eq!(builder.current_id(), "a-0");
        let builder = builder.parent();
        assert_eq!(builder.current_id(), "a");
    }

    #[test]
    #[should_panic(expected = "should not be a root")]
    fn parent_of_root_panics() {
        let _ = TreeBuilder::new("a", ()).parent();
    }
}
