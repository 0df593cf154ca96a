/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Tree traversal: child enumeration, descendants, translation.

use app_units::Au;
use box_tree::{BoxKind, LayoutBox, PhysicalPoint, PhysicalVector};
use html5ever::local_name;

use crate::{anonymous_style, block_box, inline_box, style, table_box, text_box};

fn marker_box() -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("li")),
        Some(1),
        anonymous_style(),
        BoxKind::Text {
            text: "1. ".to_owned(),
        },
    )
}

fn block_with_marker(children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("li")),
        Some(1),
        style(),
        BoxKind::Block {
            children,
            outside_list_marker: Some(Box::new(marker_box())),
        },
    )
}

fn column_group() -> LayoutBox {
    LayoutBox::new(
        Some(local_name!("colgroup")),
        Some(1),
        style(),
        BoxKind::TableColumnGroup {
            children: vec![],
            span: 1,
        },
    )
}

#[test]
fn enumerate_skip_preserves_indices() {
    let children: Vec<_> = ["a", "b", "c", "d"].iter().map(|t| text_box(t)).collect();
    let line = LayoutBox::new(
        Some(local_name!("p")),
        Some(1),
        anonymous_style(),
        BoxKind::Line { children },
    );

    let skipped: Vec<_> = line.enumerate_skip(2).collect();
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].0, 2);
    assert_eq!(skipped[0].1.text(), "c");
    assert_eq!(skipped[1].0, 3);
    assert_eq!(skipped[1].1.text(), "d");

    assert_eq!(line.enumerate_skip(10).count(), 0);
    assert_eq!(line.enumerate_skip(0).count(), 4);
}

#[test]
fn descendants_walks_in_pre_order() {
    let tree = block_box(vec![
        inline_box(vec![text_box("first")]),
        text_box("second"),
    ]);

    let tags: Vec<_> = tree
        .descendants()
        .map(|b| b.base.element_tag.clone().unwrap().to_string())
        .collect();
    assert_eq!(tags, ["div", "span", "p", "p"]);

    // Restartable: a fresh call re-walks from scratch.
    assert_eq!(tree.descendants().count(), 4);
    assert_eq!(tree.descendants().count(), 4);

    // A leaf yields just itself.
    assert_eq!(text_box("leaf").descendants().count(), 1);
}

#[test]
fn all_children_appends_the_outside_list_marker() {
    let item = block_with_marker(vec![text_box("content")]);

    assert_eq!(item.children().len(), 1);
    let all: Vec<_> = item.all_children().collect();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].text(), "1. ");
}

#[test]
fn all_children_appends_column_groups_after_regular_children() {
    let row = LayoutBox::new(
        Some(local_name!("tr")),
        Some(1),
        style(),
        BoxKind::TableRow { children: vec![] },
    );
    let table = table_box(vec![row], vec![column_group()]);

    assert_eq!(table.children().len(), 1);
    let all: Vec<_> = table.all_children().collect();
    assert_eq!(all.len(), 2);
    assert!(matches!(all[0].kind, BoxKind::TableRow { .. }));
    assert!(matches!(all[1].kind, BoxKind::TableColumnGroup { .. }));
}

#[test]
fn translate_moves_the_whole_subtree() {
    let mut item = block_with_marker(vec![inline_box(vec![text_box("x")])]);
    let delta = PhysicalVector::new(Au::from_px(13), Au::from_px(-7));
    item.translate(delta);

    assert_eq!(
        item.base.position,
        PhysicalPoint::new(Au::from_px(13), Au::from_px(-7))
    );
    for child in item.all_children() {
        assert_eq!(
            child.base.position,
            PhysicalPoint::new(Au::from_px(13), Au::from_px(-7))
        );
        for grandchild in child.all_children() {
            assert_eq!(
                grandchild.base.position,
                PhysicalPoint::new(Au::from_px(13), Au::from_px(-7))
            );
        }
    }
}

#[test]
fn translate_reaches_column_groups() {
    let mut table = table_box(vec![], vec![column_group()]);
    table.translate(PhysicalVector::new(Au::from_px(5), Au::from_px(5)));

    let all: Vec<_> = table.all_children().collect();
    assert_eq!(
        all[0].base.position,
        PhysicalPoint::new(Au::from_px(5), Au::from_px(5))
    );
}

#[test]
fn translate_round_trips_exactly() {
    let mut item = block_with_marker(vec![text_box("x")]);
    item.base.position = PhysicalPoint::new(Au::from_px(3), Au::from_px(4));

    let delta = PhysicalVector::new(Au::from_f32_px(1.25), Au::from_f32_px(-2.5));
    item.translate(delta);
    item.translate(-delta);

    assert_eq!(
        item.base.position,
        PhysicalPoint::new(Au::from_px(3), Au::from_px(4))
    );
    for child in item.all_children() {
        assert_eq!(child.base.position, PhysicalPoint::zero());
    }
}
