//! Structural edits on sibling lists.
//!
//! Functions here edit an owned copy of a forest in place. Searches run in
//! pre-order and stop at the first match.
//!
//! Insertions hand the node back as `Err(node)` when no anchor was found, so
//! callers learn whether the node was placed without comparing trees.

use core::mem;

use crate::{Node, Relation};

/// Returns the parent of the first node with the given ID.
pub(super) fn parent_in<'a, T>(nodes: &'a [Node<T>], id: &str) -> Option<&'a Node<T>> {
    nodes.iter().find_map(|node| {
        if node.children.iter().any(|child| child.id == *id) {
            Some(node)
        } else {
            parent_in(&node.children, id)
        }
    })
}

/// Detaches the first node with the given ID together with its subtree.
pub(super) fn detach<T>(nodes: &mut Vec<Node<T>>, id: &str) -> Option<Node<T>> {
    for i in 0..nodes.len() {
        if nodes[i].id == *id {
            return Some(nodes.remove(i));
        }
        if let Some(found) = detach(&mut nodes[i].children, id) {
            return Some(found);
        }
    }
    None
}

/// Detaches the first node with the given ID and puts its children where it was.
pub(super) fn detach_single<T>(nodes: &mut Vec<Node<T>>, id: &str) -> Option<Node<T>> {
    for i in 0..nodes.len() {
        if nodes[i].id == *id {
            let mut node = nodes.remove(i);
            let children = mem::take(&mut node.children);
            nodes.splice(i..i, children);
            return Some(node);
        }
        if let Some(found) = detach_single(&mut nodes[i].children, id) {
            return Some(found);
        }
    }
    None
}

/// Places the node relative to the target.
pub(super) fn place<T>(
    nodes: &mut Vec<Node<T>>,
    node: Node<T>,
    target: &str,
    relation: Relation,
) -> Result<(), Node<T>> {
    match relation {
        Relation::Before => insert_adjacent(nodes, node, target, false),
        Relation::After => insert_adjacent(nodes, node, target, true),
        Relation::Inside => append_child(nodes, node, target),
    }
}

/// Appends the node as the last child of the first node with the ID `parent`.
fn append_child<T>(nodes: &mut [Node<T>], node: Node<T>, parent: &str) -> Result<(), Node<T>> {
    let mut node = node;
    for candidate in nodes.iter_mut() {
        if candidate.id == *parent {
            candidate.children.push(node);
            return Ok(());
        }
        node = match append_child(&mut candidate.children, node, parent) {
            Ok(()) => return Ok(()),
            Err(node) => node,
        };
    }
    Err(node)
}

/// Inserts the node next to the sibling with the given ID.
///
/// The whole sibling list is checked before descending into children.
fn insert_adjacent<T>(
    nodes: &mut Vec<Node<T>>,
    node: Node<T>,
    sibling: &str,
    after: bool,
) -> Result<(), Node<T>> {
    if let Some(pos) = nodes.iter().position(|candidate| candidate.id == *sibling) {
        let index = if after { pos + 1 } else { pos };
        nodes.insert(index, node);
        return Ok(());
    }

    let mut node = node;
    for candidate in nodes.iter_mut() {
        node = match insert_adjacent(&mut candidate.children, node, sibling, after) {
            Ok(()) => return Ok(()),
            Err(node) => node,
        };
    }
    Err(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: &str) -> Node<()> {
        Node::new(id, ())
    }

    #[test]
    fn detach_prefers_preorder_first_match() {
        // A duplicated ID: the nested occurrence precedes the later root.
        let mut nodes = vec![
            leaf("a").child(leaf("dup").child(leaf("inner"))),
            leaf("dup"),
        ];
        let found = detach(&mut nodes, "dup").expect("present");
        assert_eq!(found.children.len(), 1);
        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].is_leaf());
    }

    #[test]
    fn place_hands_node_back_when_missing() {
        let mut nodes = vec![leaf("a").child(leaf("b"))];
        let back = place(&mut nodes, leaf("x"), "zzz", Relation::Before)
            .expect_err("no anchor named `zzz`");
        assert_eq!(back.id, "x");
        assert_eq!(nodes, vec![leaf("a").child(leaf("b"))]);
    }

    #[test]
    fn detach_single_at_root_level() {
        let mut nodes = vec![leaf("a").child(leaf("a0")).child(leaf("a1")), leaf("b")];
        let found = detach_single(&mut nodes, "a").expect("present");
        assert!(found.is_leaf());
        let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a0", "a1", "b"]);
    }
}
