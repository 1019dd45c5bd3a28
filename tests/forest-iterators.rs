//! Tests for iterators of forest.

use treemove::{DftEvent, Forest, TreeBuilder};

/// Returns the sample forest.
///
/// Forest to be built:
///
/// ```text
/// root
/// |-- 0
/// |   |-- 0-0
/// |   |-- 0-1
/// |   |   |-- 0-1-0
/// |   |   `-- 0-1-1
/// |   `-- 0-2
/// |-- 1
/// `-- 2
///     `-- 2-0
/// other
/// ```
fn sample_forest() -> Forest<&'static str> {
    TreeBuilder::new("root", "root")
        .child("0", "0")
        .child("0-0", "0-0")
        .sibling("0-1", "0-1")
        .child("0-1-0", "0-1-0")
        .sibling("0-1-1", "0-1-1")
        .parent()
        .sibling("0-2", "0-2")
        .parent()
        .sibling("1", "1")
        .sibling("2", "2")
        .child("2-0", "2-0")
        .parent()
        .parent()
        .sibling("other", "other")
        .build()
}

const SAMPLE_FOREST_DFT_EVENTS: &[DftEvent<&str>] = &[
    DftEvent::Open("root"),
    DftEvent::Open("0"),
    DftEvent::Open("0-0"),
    DftEvent::Close("0-0"),
    DftEvent::Open("0-1"),
    DftEvent::Open("0-1-0"),
    DftEvent::Close("0-1-0"),
    DftEvent::Open("0-1-1"),
    DftEvent::Close("0-1-1"),
    DftEvent::Close("0-1"),
    DftEvent::Open("0-2"),
    DftEvent::Close("0-2"),
    DftEvent::Close("0"),
    DftEvent::Open("1"),
    DftEvent::Close("1"),
    DftEvent::Open("2"),
    DftEvent::Open("2-0"),
    DftEvent::Close("2-0"),
    DftEvent::Close("2"),
    DftEvent::Close("root"),
    DftEvent::Open("other"),
    DftEvent::Close("other"),
];

#[test]
fn dft_forward() {
    let forest = sample_forest();

    let actual = forest
        .depth_first_traverse()
        .map(|ev| ev.map(|node| node.label))
        .collect::<Vec<_>>();

    assert_eq!(actual, SAMPLE_FOREST_DFT_EVENTS);
}

#[test]
fn ids_are_preorder() {
    let forest = sample_forest();

    let actual = forest.ids().map(|id| id.as_str()).collect::<Vec<_>>();
    let expected = SAMPLE_FOREST_DFT_EVENTS
        .iter()
        .filter_map(|ev| match ev {
            DftEvent::Open(label) => Some(*label),
            DftEvent::Close(_) => None,
        })
        .collect::<Vec<_>>();

    assert_eq!(actual, expected);
    assert_eq!(forest.len(), expected.len());
}

#[test]
fn flatten_follows_dft_open_events() {
    let forest = sample_forest();

    let flat = forest.flatten();
    let flat_ids = flat.iter().map(|entry| entry.id.as_str()).collect::<Vec<_>>();
    let dft_ids = forest.ids().map(|id| id.as_str()).collect::<Vec<_>>();

    assert_eq!(flat_ids, dft_ids);
}

#[test]
fn debug_print_sample() {
    let expected = "\
root
|-- 0
|   |-- 0-0
|   |-- 0-1
|   |   |-- 0-1-0
|   |   `-- 0-1-1
|   `-- 0-2
|-- 1
`-- 2
    `-- 2-0
other";
    assert_eq!(sample_forest().debug_print().to_string(), expected);
}
