//! Anchors.

/// Relation of the dropped node to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Relation {
    /// As the previous sibling.
    Before,
    /// As the next sibling.
    After,
    /// As the last child.
    Inside,
}

impl Relation {
    /// Returns true if the relation places the node next to the target.
    #[inline]
    #[must_use]
    pub fn is_sibling(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }
}

/// Position of a reordered entry relative to the target entry in a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Position {
    /// Directly before the target.
    Above,
    /// Directly after the target and its descendants.
    Below,
}

impl From<Position> for Relation {
    #[inline]
    fn from(pos: Position) -> Self {
        match pos {
            Position::Above => Self::Before,
            Position::Below => Self::After,
        }
    }
}
