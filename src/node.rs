//! Node.

use crate::NodeId;

/// A tree node owning its children.
///
/// A node without children holds an empty `Vec`. This is the only "no
/// children" representation; every operation of this crate keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: serde::Deserialize<'de>"
    ))
)]
pub struct Node<T> {
    /// Node ID.
    pub id: NodeId,
    /// Display data, opaque to the engine.
    pub label: T,
    /// Children in display order.
    ///
    /// A missing or `null` list deserializes to the empty `Vec`.
    #[cfg_attr(
        feature = "serde",
        serde(
            default = "Vec::new",
            deserialize_with = "deserialize_children",
            skip_serializing_if = "Vec::is_empty"
        )
    )]
    pub children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Creates a leaf node.
    ///
    /// # Examples
    ///
    /// ```
    /// use treemove::Node;
    ///
    /// let node = Node::new("about", "About");
    /// assert_eq!(node.id, "about");
    /// assert!(node.is_leaf());
    /// ```
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<NodeId>, label: T) -> Self {
        Self {
            id: id.into(),
            label,
            children: Vec::new(),
        }
    }

    /// Replaces the children and returns the node.
    #[inline]
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node<T>>) -> Self {
        self.children = children;
        self
    }

    /// Appends a child as the last child and returns the node.
    #[inline]
    #[must_use]
    pub fn child(mut self, child: Node<T>) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the node ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns true if the node has at least one child.
    #[inline]
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns true if the node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in the subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Returns the first node with the given ID in the subtree, in pre-order.
    ///
    /// The node itself is included in the search.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Node<T>> {
        if self.id == *id {
            return Some(self);
        }
        find_in(&self.children, id)
    }
}

/// Deserializes a child list, mapping `null` to the empty `Vec`.
#[cfg(feature = "serde")]
fn deserialize_children<'de, D, T>(deserializer: D) -> Result<Vec<Node<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    use serde::Deserialize;

    Ok(Option::<Vec<Node<T>>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Returns the first node with the given ID among the nodes and their
/// descendants, in pre-order.
pub(crate) fn find_in<'a, T>(nodes: &'a [Node<T>], id: &str) -> Option<&'a Node<T>> {
    nodes.iter().find_map(|node| node.find(id))
}
