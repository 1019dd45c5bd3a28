//! Tree traversal.

use core::iter;
use core::slice;

use crate::Node;

/// Depth-first traversal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DftEvent<T> {
    /// Node open.
    Open(T),
    /// Node close.
    Close(T),
}

impl<T> DftEvent<T> {
    /// Converts the internal value.
    pub fn map<F, U>(self, f: F) -> DftEvent<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Open(v) => DftEvent::Open(f(v)),
            Self::Close(v) => DftEvent::Close(f(v)),
        }
    }

    /// Returns the internal value.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> T {
        match self {
            Self::Open(v) | Self::Close(v) => v,
        }
    }
}

/// Iterator for depth-first traversal.
///
/// Every node is reported twice: [`DftEvent::Open`] before its descendants
/// and [`DftEvent::Close`] after them. `Open` events alone are the pre-order.
#[derive(Debug, Clone)]
pub struct DepthFirstTraverse<'a, T> {
    /// Opened nodes paired with the iterator of their remaining children.
    ///
    /// The bottom frame iterates the toplevel nodes and has no owner.
    stack: Vec<(Option<&'a Node<T>>, slice::Iter<'a, Node<T>>)>,
}

impl<'a, T> DepthFirstTraverse<'a, T> {
    /// Creates a new iterator over the given toplevel nodes and their descendants.
    ///
    /// The toplevel nodes do not need to be roots of the forest.
    #[inline]
    #[must_use]
    pub fn with_toplevel(nodes: &'a [Node<T>]) -> Self {
        Self {
            stack: vec![(None, nodes.iter())],
        }
    }
}

impl<'a, T> Iterator for DepthFirstTraverse<'a, T> {
    type Item = DftEvent<&'a Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (owner, children) = self.stack.last_mut()?;
        match children.next() {
            Some(child) => {
                self.stack.push((Some(child), child.children.iter()));
                Some(DftEvent::Open(child))
            }
            None => {
                let owner = *owner;
                self.stack.pop();
                owner.map(DftEvent::Close)
            }
        }
    }
}

impl<T> iter::FusedIterator for DepthFirstTraverse<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_forest_has_no_events() {
        let nodes: Vec<Node<()>> = Vec::new();
        let mut traverse = DepthFirstTraverse::with_toplevel(&nodes);
        assert_eq!(traverse.next(), None);
        assert_eq!(traverse.next(), None);
    }

    #[test]
    fn close_follows_descendants() {
        let nodes = vec![Node::new("a", ()).child(Node::new("b", ()))];
        let mut traverse = DepthFirstTraverse::with_toplevel(&nodes);

        assert!(matches!(traverse.next(), Some(DftEvent::Open(n)) if n.id == "a"));
        assert!(matches!(traverse.next(), Some(DftEvent::Open(n)) if n.id == "b"));
        assert!(matches!(traverse.next(), Some(DftEvent::Close(n)) if n.id == "b"));
        assert!(matches!(traverse.next(), Some(DftEvent::Close(n)) if n.id == "a"));
        assert_eq!(traverse.next(), None);
    }
}
