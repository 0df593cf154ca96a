/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Table-structural flags, proper parents, wrapper lookup.

use box_tree::{check_table_structure, BoxFlags, BoxKind, BoxTreeError, LayoutBox};
use html5ever::local_name;

use crate::{anonymous_style, block_box, style, table_box, text_box};

fn row_group(children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("tbody")),
        Some(1),
        style(),
        BoxKind::TableRowGroup {
            children,
            is_header: false,
            is_footer: false,
        },
    )
}

fn row(children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("tr")),
        Some(1),
        style(),
        BoxKind::TableRow { children },
    )
}

fn cell(children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("td")),
        Some(1),
        style(),
        BoxKind::TableCell {
            children,
            colspan: 1,
            rowspan: 1,
        },
    )
}

fn wrapper(children: Vec<LayoutBox>) -> LayoutBox {
    let mut wrapper = LayoutBox::new(
        Some(local_name!("table")),
        Some(1),
        anonymous_style(),
        BoxKind::Block {
            children,
            outside_list_marker: None,
        },
    );
    wrapper.base.flags.insert(BoxFlags::IS_TABLE_WRAPPER);
    wrapper
}

#[test]
fn wrapped_table_finds_the_table_child() {
    let caption = LayoutBox::new(
        Some(local_name!("caption")),
        Some(1),
        style(),
        BoxKind::TableCaption {
            children: vec![],
            outside_list_marker: None,
        },
    );
    let wrapper = wrapper(vec![caption, table_box(vec![], vec![])]);

    let table = wrapper.wrapped_table().unwrap();
    assert!(matches!(table.kind, BoxKind::Table { .. }));
}

#[test]
fn wrapped_table_without_table_is_a_structural_error() {
    let wrapper = wrapper(vec![block_box(vec![])]);
    assert_eq!(
        wrapper.wrapped_table().unwrap_err(),
        BoxTreeError::TableWrapperWithoutTable
    );
}

#[test]
fn table_structural_constants() {
    let row_group = row_group(vec![]);
    assert!(row_group.kind.proper_table_child());
    assert!(row_group.kind.internal_table_or_caption());
    assert!(row_group.kind.tabular_container());

    let cell = cell(vec![]);
    assert!(!cell.kind.proper_table_child());
    assert!(cell.kind.internal_table_or_caption());
    assert!(!cell.kind.tabular_container());

    let table = table_box(vec![], vec![]);
    assert!(!table.kind.proper_table_child());
    assert!(table.kind.tabular_container());

    let block = block_box(vec![]);
    assert!(!block.kind.proper_table_child());
    assert!(!block.kind.internal_table_or_caption());
    assert!(!block.kind.tabular_container());
}

#[test]
fn proper_parent_relation() {
    let table = table_box(vec![], vec![]);
    let group = row_group(vec![]);
    let the_row = row(vec![]);
    let block = block_box(vec![]);

    assert!(group.kind.is_proper_child_of(&table.kind));
    assert!(!group.kind.is_proper_child_of(&block.kind));
    assert!(!group.kind.is_proper_child_of(&group.kind));

    assert!(the_row.kind.is_proper_child_of(&table.kind));
    assert!(the_row.kind.is_proper_child_of(&group.kind));
    assert!(!the_row.kind.is_proper_child_of(&block.kind));

    let column = LayoutBox::new(
        Some(local_name!("col")),
        Some(1),
        style(),
        BoxKind::TableColumn {
            children: vec![],
            span: 1,
        },
    );
    let column_group = LayoutBox::new(
        Some(local_name!("colgroup")),
        Some(1),
        style(),
        BoxKind::TableColumnGroup {
            children: vec![],
            span: 1,
        },
    );
    assert!(column.kind.is_proper_child_of(&column_group.kind));
    assert!(column.kind.is_proper_child_of(&table.kind));
    assert!(!column.kind.is_proper_child_of(&group.kind));

    // Boxes that are not proper table children may appear anywhere.
    assert!(block.kind.is_proper_child_of(&block.kind));
    assert!(cell(vec![]).kind.is_proper_child_of(&the_row.kind));
}

#[test]
fn check_table_structure_reports_misparented_boxes() {
    // A non-anonymous row directly inside a block box.
    let tree = block_box(vec![row(vec![cell(vec![text_box("x")])])]);
    let violations = check_table_structure(&tree);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].element_tag,
        Some(local_name!("tr"))
    );

    // A well-formed table produces no violations.
    let tree = block_box(vec![table_box(vec![row_group(vec![row(vec![])])], vec![])]);
    assert!(check_table_structure(&tree).is_empty());
}

#[test]
fn check_table_structure_exempts_anonymous_boxes() {
    // Anonymously generated structure is exactly what the builder inserts
    // to repair trees, so it is never reported.
    let anonymous_row = LayoutBox::new(
        Some(local_name!("tr")),
        Some(1),
        anonymous_style(),
        BoxKind::TableRow { children: vec![] },
    );
    let tree = block_box(vec![anonymous_row]);
    assert!(check_table_structure(&tree).is_empty());
}
