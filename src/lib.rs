//! Move, insert, and remove operations for reorderable nested trees.
//!
//! This crate is the structural engine behind drag-and-drop tree views: the
//! host decides *where* a dragged entry was dropped, and the engine computes
//! the new tree. All operations are pure; they take the current tree by
//! reference and return a new one.
//!
//! Two formulations are provided.
//!
//! * Nested surgery on a [`Forest`]: [`Forest::remove`], [`Forest::insert`],
//!   [`Forest::is_descendant`], and the checked [`Forest::move_node`].
//! * Flatten and rebuild over a [`FlatList`] of parent references:
//!   [`Forest::flatten`], [`FlatList::rebuild`], [`FlatList::reorder`],
//!   [`FlatList::promote`], and [`FlatList::demote`].
//!
//! # Examples
//!
//! ```
//! use treemove::{Forest, Node, Relation};
//!
//! let forest: Forest<&str> = Forest::from(vec![
//!     Node::new("about", "About"),
//!     Node::new("collections", "Collections")
//!         .with_children(vec![Node::new("spring", "Spring"), Node::new("summer", "Summer")]),
//! ]);
//!
//! // Drag "summer" and drop it before "about".
//! let moved = forest
//!     .move_node("summer", "about", Relation::Before)
//!     .expect("`about` is not inside `summer`");
//!
//! let expected = "\
//! Summer
//! About
//! Collections
//! `-- Spring";
//! assert_eq!(moved.debug_print().to_string(), expected);
//!
//! // The input forest is untouched.
//! assert_eq!(forest.len(), 4);
//! assert_eq!(forest.roots().len(), 2);
//! ```
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

mod anchor;
mod error;
pub mod flat;
pub mod forest;
mod id;
mod node;

pub use self::anchor::{Position, Relation};
pub use self::error::{RebuildError, StructureError};
pub use self::flat::{FlatEntry, FlatList, ReorderPolicy};
pub use self::forest::traverse::DftEvent;
pub use self::forest::{Forest, TreeBuilder};
pub use self::id::NodeId;
pub use self::node::Node;
