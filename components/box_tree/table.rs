/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Structural rules for table-internal boxes.
//!
//! The anonymous-table-box rules of CSS 2.1
//! (<https://www.w3.org/TR/CSS21/tables.html#anonymous-boxes>) are defined in
//! terms of three per-variant constants and a proper-parent relation; the
//! tree builder uses them to decide where anonymous wrappers are needed, and
//! layout relies on the resulting invariants holding.

use std::error::Error;
use std::fmt;

use html5ever::LocalName;
use log::warn;

use crate::base::BoxFlags;
use crate::boxes::{BoxKind, LayoutBox};

impl BoxKind {
    /// Whether this variant may only appear under one of its proper
    /// parents (row groups, rows, column groups, columns, captions).
    pub fn proper_table_child(&self) -> bool {
        matches!(
            self,
            BoxKind::TableRowGroup { .. } |
                BoxKind::TableRow { .. } |
                BoxKind::TableColumnGroup { .. } |
                BoxKind::TableColumn { .. } |
                BoxKind::TableCaption { .. }
        )
    }

    /// Whether this variant is internal to a table: proper table children
    /// plus cells.
    pub fn internal_table_or_caption(&self) -> bool {
        self.proper_table_child() || matches!(self, BoxKind::TableCell { .. })
    }

    /// Whether this variant contains table-internal boxes: tables, row
    /// groups and rows.
    pub fn tabular_container(&self) -> bool {
        matches!(
            self,
            BoxKind::Table { .. } |
                BoxKind::InlineTable { .. } |
                BoxKind::TableRowGroup { .. } |
                BoxKind::TableRow { .. }
        )
    }

    /// The proper-parent relation: whether a non-anonymous box of this
    /// variant may legally appear as a direct child of `parent`.
    ///
    /// Variants that are not proper table children may appear anywhere.
    pub fn is_proper_child_of(&self, parent: &BoxKind) -> bool {
        match self {
            BoxKind::TableRowGroup { .. } |
            BoxKind::TableColumnGroup { .. } |
            BoxKind::TableCaption { .. } => {
                matches!(parent, BoxKind::Table { .. } | BoxKind::InlineTable { .. })
            },
            BoxKind::TableRow { .. } => matches!(
                parent,
                BoxKind::Table { .. } |
                    BoxKind::InlineTable { .. } |
                    BoxKind::TableRowGroup { .. }
            ),
            BoxKind::TableColumn { .. } => matches!(
                parent,
                BoxKind::Table { .. } |
                    BoxKind::InlineTable { .. } |
                    BoxKind::TableColumnGroup { .. }
            ),
            _ => true,
        }
    }
}

impl LayoutBox {
    /// The table box wrapped by this table-wrapper box.
    ///
    /// Only valid on boxes flagged [`BoxFlags::IS_TABLE_WRAPPER`]. A wrapper
    /// is constructed if and only if it wraps exactly one table box, so a
    /// missing table child is a builder defect upstream and is surfaced as
    /// a structural-integrity error.
    pub fn wrapped_table(&self) -> Result<&LayoutBox, BoxTreeError> {
        debug_assert!(
            self.base.flags.contains(BoxFlags::IS_TABLE_WRAPPER),
            "wrapped_table called on a box that is not a table wrapper"
        );
        self.children()
            .iter()
            .find(|child| {
                matches!(
                    child.kind,
                    BoxKind::Table { .. } | BoxKind::InlineTable { .. }
                )
            })
            .ok_or(BoxTreeError::TableWrapperWithoutTable)
    }
}

/// A tree invariant the box tree relies on was broken upstream.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BoxTreeError {
    /// A table-wrapper box has no table child.
    TableWrapperWithoutTable,
}

impl fmt::Display for BoxTreeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoxTreeError::TableWrapperWithoutTable => {
                write!(f, "table wrapper without a table child")
            },
        }
    }
}

impl Error for BoxTreeError {}

/// A table-structural box found as a direct child of a box that is not one
/// of its proper parents.
#[derive(Clone, Debug)]
pub struct TableStructureViolation {
    pub element_tag: Option<LocalName>,
    pub source_line: Option<u64>,
}

/// Walk the tree under `root` and collect every non-anonymous
/// table-structural box whose direct parent is not one of its proper
/// parents. Anonymous boxes are exempt: the builder generates them exactly
/// to repair such structures.
///
/// Violations mean the builder's table fixup missed a case; they are
/// reported so that table layout bugs can be traced back here.
pub fn check_table_structure(root: &LayoutBox) -> Vec<TableStructureViolation> {
    let mut violations = Vec::new();
    collect_violations(root, &mut violations);
    violations
}

fn collect_violations(parent: &LayoutBox, violations: &mut Vec<TableStructureViolation>) {
    for child in parent.all_children() {
        if child.kind.proper_table_child() &&
            !child.base.style.anonymous &&
            !child.kind.is_proper_child_of(&parent.kind)
        {
            warn!(
                "table-structural box {:?} (line {:?}) under improper parent",
                child.base.element_tag, child.base.source_line
            );
            violations.push(TableStructureViolation {
                element_tag: child.base.element_tag.clone(),
                source_line: child.base.source_line,
            });
        }
        collect_violations(child, violations);
    }
}
