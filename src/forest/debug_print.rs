//! Debug printer.

use core::fmt;

use crate::Node;

/// Forest printer for debugging.
///
/// Roots are printed at the left edge, one after another; descendants are
/// drawn with ASCII guides. Labels spanning several lines are indented under
/// their own guide.
///
/// This is provided mainly for debugging purpose. Note that the output format
/// is not guaranteed to be stable, and any format changes won't be considered
/// as breaking changes.
pub struct DebugPrint<'a, T> {
    /// Toplevel nodes to print.
    nodes: &'a [Node<T>],
}

impl<'a, T> DebugPrint<'a, T> {
    /// Creates a new `DebugPrint` object for the nodes.
    pub(crate) fn new(nodes: &'a [Node<T>]) -> Self {
        Self { nodes }
    }
}

/// Guide for an item at some depth.
#[derive(Clone, Copy)]
struct Guide {
    /// Whether this is the last sibling.
    is_last_item: bool,
}

impl Guide {
    /// Returns the guide for the first line of the item.
    fn head(self) -> &'static str {
        if self.is_last_item {
            "`-- "
        } else {
            "|-- "
        }
    }

    /// Returns the guide for lines below the first line of the item.
    fn tail(self) -> &'static str {
        if self.is_last_item {
            "    "
        } else {
            "|   "
        }
    }
}

/// Writes the items and their descendants.
///
/// `label` formats a label into the buffer.
fn write_items<T>(
    f: &mut fmt::Formatter<'_>,
    nodes: &[Node<T>],
    guides: &mut Vec<Guide>,
    is_toplevel: bool,
    is_first_line: &mut bool,
    label: &dyn Fn(&T) -> String,
) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        let guide = Guide {
            is_last_item: i + 1 == nodes.len(),
        };
        let text = label(&node.label);
        for (line_no, line) in text.split('\n').enumerate() {
            if !*is_first_line {
                f.write_str("\n")?;
            }
            *is_first_line = false;

            let mut prefix = String::new();
            for outer in guides.iter() {
                prefix.push_str(outer.tail());
            }
            if !is_toplevel {
                prefix.push_str(if line_no == 0 {
                    guide.head()
                } else {
                    guide.tail()
                });
            }
            if line.is_empty() {
                f.write_str(prefix.trim_end())?;
            } else {
                f.write_str(&prefix)?;
                f.write_str(line)?;
            }
        }

        if !node.children.is_empty() {
            // Toplevel items have no guide column of their own.
            if !is_toplevel {
                guides.push(guide);
            }
            write_items(f, &node.children, guides, false, is_first_line, label)?;
            if !is_toplevel {
                guides.pop();
            }
        }
    }
    Ok(())
}

/// Writes the guides and labels for the whole forest.
fn write_forest<T>(
    f: &mut fmt::Formatter<'_>,
    nodes: &[Node<T>],
    label: &dyn Fn(&T) -> String,
) -> fmt::Result {
    let mut is_first_line = true;
    for root in nodes {
        write_items(
            f,
            core::slice::from_ref(root),
            &mut Vec::new(),
            true,
            &mut is_first_line,
            label,
        )?;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Display for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, self.nodes, &|label: &T| label.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_forest(f, self.nodes, &|label: &T| format!("{:?}", label))
    }
}

#[cfg(test)]
mod tests {
    use crate::TreeBuilder;

    #[test]
    fn nested_guides() {
        let forest = TreeBuilder::new("root", "root")
            .child("0", "0")
            .child("0-0", "0-0")
            .sibling("0-1", "0-1")
            .parent()
            .sibling("1", "1")
            .child("1-0", "1-0")
            .build();
        let expected = "\
root
|-- 0
|   |-- 0-0
|   `-- 0-1
`-- 1
    `-- 1-0";
        assert_eq!(forest.debug_print().to_string(), expected);
    }

    #[test]
    fn multiline_labels() {
        let forest = TreeBuilder::new("root", "root")
            .child("0", "first\n\nsecond")
            .sibling("1", "last\nline")
            .build();
        let expected = "\
root
|-- first
|
|   second
`-- last
    line";
        assert_eq!(forest.debug_print().to_string(), expected);
    }

    #[test]
    fn debug_format_quotes_labels() {
        let forest = TreeBuilder::new("a", "A").sibling("b", "B").build();
        assert_eq!(format!("{:?}", forest.debug_print()), "\"A\"\n\"B\"");
    }
}
