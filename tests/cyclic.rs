//! Tests to ensure moves never nest a node inside itself.

use treemove::{Forest, Relation, StructureError, TreeBuilder};

/// ```text
/// a
/// `-- b
///     `-- c
/// d
/// ```
fn chain() -> Forest<&'static str> {
    TreeBuilder::new("a", "a")
        .child("b", "b")
        .child("c", "c")
        .parent()
        .parent()
        .sibling("d", "d")
        .build()
}

#[test]
fn descendant_is_strict() {
    let forest = chain();

    assert!(forest.is_descendant("a", "b"));
    assert!(forest.is_descendant("a", "c"));
    assert!(!forest.is_descendant("c", "a"));
    assert!(!forest.is_descendant("a", "a"));
    assert!(!forest.is_descendant("a", "d"));
}

#[test]
fn descendant_of_missing_or_leaf() {
    let forest = chain();

    assert!(!forest.is_descendant("zz", "c"));
    assert!(!forest.is_descendant("c", "zz"));
    assert!(!forest.is_descendant("d", "a"));
}

/// Drop a node as the last child of itself.
#[test]
fn inside_itself() {
    let forest = chain();

    assert_eq!(
        forest.move_node("b", "b", Relation::Inside),
        Err(StructureError::AncestorDescendantLoop)
    );
}

/// Drop a node as the sibling of itself.
#[test]
fn next_to_itself() {
    let forest = chain();

    assert_eq!(
        forest.move_node("b", "b", Relation::After),
        Err(StructureError::UnorderableSiblings)
    );
    assert_eq!(
        forest.move_node("b", "b", Relation::Before),
        Err(StructureError::UnorderableSiblings)
    );
}

/// Drop an ancestor into a descendant.
#[test]
fn inside_descendant() {
    let forest = chain();

    assert_eq!(
        forest.move_node("a", "c", Relation::Inside),
        Err(StructureError::AncestorDescendantLoop)
    );
}

/// Drop an ancestor next to a descendant, which would nest it under itself.
#[test]
fn next_to_descendant() {
    let forest = chain();

    assert_eq!(
        forest.move_node("a", "c", Relation::Before),
        Err(StructureError::AncestorDescendantLoop)
    );
    assert_eq!(
        forest.move_node("a", "b", Relation::After),
        Err(StructureError::AncestorDescendantLoop)
    );
}

/// Drop a descendant onto its ancestor: allowed.
#[test]
fn descendant_onto_ancestor() {
    let forest = chain();

    let moved = forest
        .move_node("c", "a", Relation::Before)
        .expect("`a` is not inside `c`");
    let expected = "\
c
a
`-- b
d";
    assert_eq!(moved.debug_print().to_string(), expected);

    let moved = forest
        .move_node("c", "a", Relation::Inside)
        .expect("`a` is not inside `c`");
    let expected = "\
a
|-- b
`-- c
d";
    assert_eq!(moved.debug_print().to_string(), expected);
}

/// Rejected moves leave the forest as is.
#[test]
fn rejection_keeps_forest() {
    let forest = chain();
    let snapshot = forest.clone();

    let _ = forest.move_node("a", "c", Relation::Inside);

    assert_eq!(forest, snapshot);
}

/// The flat encoding refuses the same loops.
#[test]
fn flat_reorder_into_descendant() {
    let flat = chain().flatten();

    let moved = flat.reorder(
        "a",
        "c",
        treemove::Position::Below,
        treemove::ReorderPolicy::Reparent,
    );

    assert_eq!(moved, flat);
}
