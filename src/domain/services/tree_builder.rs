//! Tree construction from parsed records.
//!
//! Records arrive in stream order. Each one either continues the menu the
//! previous record went into, closes back up to an ancestor at the same
//! level, or opens a submenu under the previous item.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::domain::entities::{MenuId, MenuRecord, MenuTree};
use crate::error::{PieMenuError, PieResult};

/// Incremental builder holding the "current menu" between records
pub struct TreeBuilder {
    tree: MenuTree,
    current: Option<MenuId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: MenuTree::new(),
            current: None,
        }
    }

    /// Menu the last record was appended to
    pub fn current(&self) -> Option<MenuId> {
        self.current
    }

    /// Add one record and return the root menu
    pub fn add_record(&mut self, record: MenuRecord) -> PieResult<MenuId> {
        let MenuRecord {
            level,
            label,
            output,
            icon,
            line,
        } = record;
        let (label, output) = share_output(label, output);

        let Some(current) = self.current else {
            if level != 0 {
                return Err(PieMenuError::FirstItemIndented { line });
            }
            let root = self.tree.push_menu(None, None, 0);
            self.tree.push_item(root, label, output, icon);
            self.current = Some(root);
            return Ok(root);
        };

        let current_level = self.tree.menu(current).level();
        let target = match level.cmp(&current_level) {
            Ordering::Equal => current,
            Ordering::Greater => {
                if level != current_level + 1 {
                    return Err(PieMenuError::IndentationJump {
                        line,
                        from: current_level,
                        to: level,
                    });
                }
                let caller = self
                    .tree
                    .menu(current)
                    .last_item()
                    .ok_or(PieMenuError::UnresolvedLevel { line, level })?;
                if self.tree.item(caller).is_separator() {
                    return Err(PieMenuError::SeparatorWithSubmenu { line });
                }
                self.tree.push_menu(Some(current), Some(caller), level)
            }
            Ordering::Less => self
                .tree
                .ancestors(current)
                .find(|&menu| self.tree.menu(menu).level() == level)
                .ok_or(PieMenuError::UnresolvedLevel { line, level })?,
        };

        self.tree.push_item(target, label, output, icon);
        self.current = Some(target);
        Ok(self.tree.root())
    }

    /// Finish building; fails if no record was ever added
    pub fn finish(self) -> PieResult<MenuTree> {
        if self.tree.is_empty() {
            return Err(PieMenuError::EmptyMenu);
        }
        Ok(self.tree)
    }
}

/// Build a whole tree from a record stream
pub fn build_tree(records: impl IntoIterator<Item = MenuRecord>) -> PieResult<MenuTree> {
    let mut builder = TreeBuilder::new();
    for record in records {
        builder.add_record(record)?;
    }
    let tree = builder.finish()?;
    log::info!(
        "built {} menus with {} items",
        tree.menu_count(),
        tree.item_count()
    );
    Ok(tree)
}

/// Convert label and output to shared strings. A missing output, or one equal
/// to the label, reuses the label's allocation. Separators carry no output.
fn share_output(
    label: Option<String>,
    output: Option<String>,
) -> (Option<Rc<str>>, Option<Rc<str>>) {
    let Some(label) = label else {
        return (None, None);
    };
    let label: Rc<str> = Rc::from(label);
    let output = match output {
        Some(output) if output != *label => Rc::from(output),
        _ => Rc::clone(&label),
    };
    (Some(label), Some(output))
}
