/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The box variant taxonomy and the tree operations over it.

use app_units::Au;
use html5ever::LocalName;
use serde::Serialize;

use crate::base::BoxBase;
use crate::geom::{PhysicalRect, PhysicalSide, PhysicalSides, PhysicalVector};
use crate::page::PageType;
use crate::replaced::ReplacedContent;
use crate::style::{Direction, Style};
use crate::text;

/// How a box participates in its parent's formatting context.
/// <https://drafts.csswg.org/css-display/#outer-role>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayOutside {
    /// Participates in a block formatting context.
    BlockLevel,
    /// Participates in an inline formatting context.
    InlineLevel,
}

/// The kind of formatting context a box establishes for its contents.
/// <https://drafts.csswg.org/css-display/#inner-model>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisplayInside {
    /// Contains only block-level boxes or only line boxes.
    BlockContainer,
    /// Content stays in the same inline formatting context.
    InlineContent,
    /// Content is opaque to layout and rendered externally.
    Replaced,
    /// Contains table-internal boxes.
    Table,
}

/// The per-variant payload of a box.
///
/// Each variant encodes one legal outside/inside combination of the CSS
/// visual formatting model, plus the table-internal roles and the page
/// roots. Children are owned; a box tree is a strict tree.
#[derive(Clone, Debug, Serialize)]
pub enum BoxKind {
    /// Block-level block container (`display: block`, `list-item`).
    Block {
        children: Vec<LayoutBox>,
        /// A `list-style-position: outside` marker, laid out out-of-band.
        outside_list_marker: Option<Box<LayoutBox>>,
    },
    /// Block-level replaced box (e.g. a block `<img>`).
    BlockReplaced { replacement: ReplacedContent },
    /// Inline box with inline content; may be split across lines.
    Inline { children: Vec<LayoutBox> },
    /// Atomic inline-level block container (`display: inline-block`).
    InlineBlock { children: Vec<LayoutBox> },
    /// Atomic inline-level replaced box.
    InlineReplaced { replacement: ReplacedContent },
    /// One line of an inline formatting context. Anonymous by construction;
    /// the builder creates a single line box per block container and layout
    /// splits it into one box per actual line.
    Line { children: Vec<LayoutBox> },
    /// A leaf holding document text. Anonymous, never empty.
    Text { text: String },
    /// `display: table`. Column groups are owned here, out-of-band from the
    /// regular children.
    Table {
        children: Vec<LayoutBox>,
        column_groups: Vec<LayoutBox>,
    },
    /// `display: inline-table`.
    InlineTable {
        children: Vec<LayoutBox>,
        column_groups: Vec<LayoutBox>,
    },
    /// `display: table-row-group`, `table-header-group`, `table-footer-group`.
    TableRowGroup {
        children: Vec<LayoutBox>,
        is_header: bool,
        is_footer: bool,
    },
    /// `display: table-row`.
    TableRow { children: Vec<LayoutBox> },
    /// `display: table-column-group`. Never carries margin or padding.
    TableColumnGroup { children: Vec<LayoutBox>, span: u32 },
    /// `display: table-column`. Not really a container, but pretending it is
    /// one removes corner cases from traversal. Never carries margin or
    /// padding.
    TableColumn { children: Vec<LayoutBox>, span: u32 },
    /// `display: table-cell`.
    TableCell {
        children: Vec<LayoutBox>,
        colspan: u32,
        rowspan: u32,
    },
    /// `display: table-caption`. A block box that is also table-structural.
    TableCaption {
        children: Vec<LayoutBox>,
        outside_list_marker: Option<Box<LayoutBox>>,
    },
    /// The box for one page. Initially the whole document lives in the box
    /// for the root element; layout creates a new page box after every page
    /// break. Owns the boxes fixed-positioned relative to this page.
    Page {
        page_type: PageType,
        children: Vec<LayoutBox>,
        fixed_boxes: Vec<LayoutBox>,
    },
    /// A box in a page margin area, as defined in CSS Paged Media.
    Margin {
        at_keyword: String,
        children: Vec<LayoutBox>,
    },
}

impl BoxKind {
    /// The outside behavior of this box, if it is block- or inline-level.
    /// Line, page and margin boxes are roots of their own contexts and
    /// return `None`, as do table-internal boxes other than captions.
    pub fn outside(&self) -> Option<DisplayOutside> {
        match self {
            BoxKind::Block { .. } |
            BoxKind::BlockReplaced { .. } |
            BoxKind::Table { .. } |
            BoxKind::TableCaption { .. } => Some(DisplayOutside::BlockLevel),
            BoxKind::Inline { .. } |
            BoxKind::InlineBlock { .. } |
            BoxKind::InlineReplaced { .. } |
            BoxKind::InlineTable { .. } |
            BoxKind::Text { .. } => Some(DisplayOutside::InlineLevel),
            _ => None,
        }
    }

    /// The inside behavior of this box. Table-internal boxes other than
    /// cells and captions have no inside behavior of their own.
    pub fn inside(&self) -> Option<DisplayInside> {
        match self {
            BoxKind::Block { .. } |
            BoxKind::InlineBlock { .. } |
            BoxKind::TableCell { .. } |
            BoxKind::TableCaption { .. } |
            BoxKind::Margin { .. } => Some(DisplayInside::BlockContainer),
            BoxKind::Inline { .. } | BoxKind::Text { .. } => Some(DisplayInside::InlineContent),
            BoxKind::BlockReplaced { .. } | BoxKind::InlineReplaced { .. } => {
                Some(DisplayInside::Replaced)
            },
            BoxKind::Table { .. } | BoxKind::InlineTable { .. } => Some(DisplayInside::Table),
            _ => None,
        }
    }

    /// Whether this is an inline-level box that cannot be split across
    /// lines: inline-block, inline replaced, inline table.
    pub fn is_atomic_inline_level(&self) -> bool {
        matches!(
            self,
            BoxKind::InlineBlock { .. } |
                BoxKind::InlineReplaced { .. } |
                BoxKind::InlineTable { .. }
        )
    }

    /// Whether this variant owns a child sequence at all. Text and replaced
    /// boxes are pure leaves.
    pub fn has_children(&self) -> bool {
        !matches!(
            self,
            BoxKind::Text { .. } | BoxKind::BlockReplaced { .. } | BoxKind::InlineReplaced { .. }
        )
    }

    fn is_column_or_column_group(&self) -> bool {
        matches!(
            self,
            BoxKind::TableColumn { .. } | BoxKind::TableColumnGroup { .. }
        )
    }

    /// The same variant with the regular child sequence replaced. Scalar
    /// payloads, markers and column groups are cloned from `self`.
    fn with_children(&self, new_children: Vec<LayoutBox>) -> BoxKind {
        match self {
            BoxKind::Block {
                outside_list_marker,
                ..
            } => BoxKind::Block {
                children: new_children,
                outside_list_marker: outside_list_marker.clone(),
            },
            BoxKind::Inline { .. } => BoxKind::Inline {
                children: new_children,
            },
            BoxKind::InlineBlock { .. } => BoxKind::InlineBlock {
                children: new_children,
            },
            BoxKind::Line { .. } => BoxKind::Line {
                children: new_children,
            },
            BoxKind::Table { column_groups, .. } => BoxKind::Table {
                children: new_children,
                column_groups: column_groups.clone(),
            },
            BoxKind::InlineTable { column_groups, .. } => BoxKind::InlineTable {
                children: new_children,
                column_groups: column_groups.clone(),
            },
            BoxKind::TableRowGroup {
                is_header,
                is_footer,
                ..
            } => BoxKind::TableRowGroup {
                children: new_children,
                is_header: *is_header,
                is_footer: *is_footer,
            },
            BoxKind::TableRow { .. } => BoxKind::TableRow {
                children: new_children,
            },
            BoxKind::TableColumnGroup { span, .. } => BoxKind::TableColumnGroup {
                children: new_children,
                span: *span,
            },
            BoxKind::TableColumn { span, .. } => BoxKind::TableColumn {
                children: new_children,
                span: *span,
            },
            BoxKind::TableCell {
                colspan, rowspan, ..
            } => BoxKind::TableCell {
                children: new_children,
                colspan: *colspan,
                rowspan: *rowspan,
            },
            BoxKind::TableCaption {
                outside_list_marker,
                ..
            } => BoxKind::TableCaption {
                children: new_children,
                outside_list_marker: outside_list_marker.clone(),
            },
            BoxKind::Page {
                page_type,
                fixed_boxes,
                ..
            } => BoxKind::Page {
                page_type: page_type.clone(),
                children: new_children,
                fixed_boxes: fixed_boxes.clone(),
            },
            BoxKind::Margin { at_keyword, .. } => BoxKind::Margin {
                at_keyword: at_keyword.clone(),
                children: new_children,
            },
            BoxKind::Text { .. } | BoxKind::BlockReplaced { .. } | BoxKind::InlineReplaced { .. } => {
                unreachable!("leaf boxes have no child sequence to replace")
            },
        }
    }
}

/// A node of the box tree: the per-variant payload plus the fields shared by
/// all variants.
#[derive(Clone, Debug, Serialize)]
pub struct LayoutBox {
    pub base: BoxBase,
    pub kind: BoxKind,
}

impl LayoutBox {
    /// Construct a box for a source element.
    ///
    /// Line and text boxes require a style flagged anonymous, and text boxes
    /// require non-empty text; violating either is a builder defect and
    /// panics. Text is transformed here, once, according to the style's
    /// `text-transform` and `hyphens`.
    pub fn new(
        element_tag: Option<LocalName>,
        source_line: Option<u64>,
        style: Style,
        kind: BoxKind,
    ) -> LayoutBox {
        let mut kind = kind;
        match &mut kind {
            BoxKind::Line { .. } => {
                assert!(style.anonymous, "line boxes require an anonymous style");
            },
            BoxKind::Text { text } => {
                assert!(style.anonymous, "text boxes require an anonymous style");
                assert!(!text.is_empty(), "text boxes require non-empty text");
                *text = text::transform(text, &style);
            },
            _ => {},
        }
        LayoutBox {
            base: BoxBase::new(element_tag, source_line, style),
            kind,
        }
    }

    /// Construct an anonymous box of the given variant: element identity and
    /// source line are taken from `parent`, the style is inherited from
    /// `parent`'s style rather than copied verbatim.
    pub fn anonymous_from(parent: &LayoutBox, kind: BoxKind) -> LayoutBox {
        LayoutBox::new(
            parent.base.element_tag.clone(),
            parent.base.source_line,
            parent.base.style.inherit_from(),
            kind,
        )
    }

    // Box model arithmetic. Computed from the current field values on every
    // call: layout mutates the fields repeatedly, so nothing here may be
    // cached.

    /// The effective margin of this box. Column and column-group boxes never
    /// have margins, whatever their style or fields say.
    pub fn margin(&self) -> PhysicalSides<Au> {
        if self.kind.is_column_or_column_group() {
            PhysicalSides::zero()
        } else {
            self.base.margin
        }
    }

    /// The effective padding of this box. Column and column-group boxes
    /// never have padding.
    pub fn padding(&self) -> PhysicalSides<Au> {
        if self.kind.is_column_or_column_group() {
            PhysicalSides::zero()
        } else {
            self.base.padding
        }
    }

    pub fn border_widths(&self) -> PhysicalSides<Au> {
        self.base.border_widths
    }

    /// Width of the padding box.
    pub fn padding_width(&self) -> Au {
        self.base.size.width + self.padding().horizontal()
    }

    /// Height of the padding box.
    pub fn padding_height(&self) -> Au {
        self.base.size.height + self.padding().vertical()
    }

    /// Width of the border box.
    pub fn border_width(&self) -> Au {
        self.padding_width() + self.border_widths().horizontal()
    }

    /// Height of the border box.
    pub fn border_height(&self) -> Au {
        self.padding_height() + self.border_widths().vertical()
    }

    /// Width of the margin box, aka the outer box.
    pub fn margin_width(&self) -> Au {
        self.border_width() + self.margin().horizontal()
    }

    /// Height of the margin box, aka the outer box.
    pub fn margin_height(&self) -> Au {
        self.border_height() + self.margin().vertical()
    }

    /// Absolute horizontal position of the content box.
    pub fn content_box_x(&self) -> Au {
        self.base.position.x + self.margin().left + self.border_widths().left +
            self.padding().left
    }

    /// Absolute vertical position of the content box.
    pub fn content_box_y(&self) -> Au {
        self.base.position.y + self.margin().top + self.border_widths().top + self.padding().top
    }

    /// Absolute horizontal position of the padding box.
    pub fn padding_box_x(&self) -> Au {
        self.base.position.x + self.margin().left + self.border_widths().left
    }

    /// Absolute vertical position of the padding box.
    pub fn padding_box_y(&self) -> Au {
        self.base.position.y + self.margin().top + self.border_widths().top
    }

    /// Absolute horizontal position of the border box.
    pub fn border_box_x(&self) -> Au {
        self.base.position.x + self.margin().left
    }

    /// Absolute vertical position of the border box.
    pub fn border_box_y(&self) -> Au {
        self.base.position.y + self.margin().top
    }

    /// The rectangle hit-testing is done on. The border area for most
    /// boxes; inline boxes use the line height (margin height) instead of
    /// the border height so that the whole line reacts.
    pub fn hit_area(&self) -> PhysicalRect {
        match self.kind {
            BoxKind::Inline { .. } => PhysicalRect::new(
                euclid::default::Point2D::new(self.border_box_x(), self.base.position.y),
                euclid::default::Size2D::new(self.border_width(), self.margin_height()),
            ),
            _ => PhysicalRect::new(
                euclid::default::Point2D::new(self.border_box_x(), self.border_box_y()),
                euclid::default::Size2D::new(self.border_width(), self.border_height()),
            ),
        }
    }

    // Tree traversal.

    /// The regular child sequence. Empty for leaves. Does not include
    /// out-of-band children; see [`LayoutBox::all_children`].
    pub fn children(&self) -> &[LayoutBox] {
        self.child_parts().0
    }

    /// Every box this node owns for traversal and translation purposes: the
    /// regular children, then the outside list marker if any, then for
    /// tables the owned column groups.
    pub fn all_children(&self) -> impl Iterator<Item = &LayoutBox> {
        let (children, marker, column_groups) = self.child_parts();
        children.iter().chain(marker).chain(column_groups.iter())
    }

    pub fn all_children_mut(&mut self) -> impl Iterator<Item = &mut LayoutBox> {
        let (children, marker, column_groups) = self.child_parts_mut();
        children
            .iter_mut()
            .chain(marker)
            .chain(column_groups.iter_mut())
    }

    fn child_parts(&self) -> (&[LayoutBox], Option<&LayoutBox>, &[LayoutBox]) {
        match &self.kind {
            BoxKind::Block {
                children,
                outside_list_marker,
            } |
            BoxKind::TableCaption {
                children,
                outside_list_marker,
            } => (children, outside_list_marker.as_deref(), &[]),
            BoxKind::Table {
                children,
                column_groups,
            } |
            BoxKind::InlineTable {
                children,
                column_groups,
            } => (children, None, column_groups),
            BoxKind::Inline { children } |
            BoxKind::InlineBlock { children } |
            BoxKind::Line { children } |
            BoxKind::TableRowGroup { children, .. } |
            BoxKind::TableRow { children } |
            BoxKind::TableColumnGroup { children, .. } |
            BoxKind::TableColumn { children, .. } |
            BoxKind::TableCell { children, .. } |
            BoxKind::Page { children, .. } |
            BoxKind::Margin { children, .. } => (children, None, &[]),
            BoxKind::Text { .. } | BoxKind::BlockReplaced { .. } | BoxKind::InlineReplaced { .. } => {
                (&[], None, &[])
            },
        }
    }

    fn child_parts_mut(
        &mut self,
    ) -> (
        &mut [LayoutBox],
        Option<&mut LayoutBox>,
        &mut [LayoutBox],
    ) {
        match &mut self.kind {
            BoxKind::Block {
                children,
                outside_list_marker,
            } |
            BoxKind::TableCaption {
                children,
                outside_list_marker,
            } => (children, outside_list_marker.as_deref_mut(), &mut []),
            BoxKind::Table {
                children,
                column_groups,
            } |
            BoxKind::InlineTable {
                children,
                column_groups,
            } => (children, None, column_groups),
            BoxKind::Inline { children } |
            BoxKind::InlineBlock { children } |
            BoxKind::Line { children } |
            BoxKind::TableRowGroup { children, .. } |
            BoxKind::TableRow { children } |
            BoxKind::TableColumnGroup { children, .. } |
            BoxKind::TableColumn { children, .. } |
            BoxKind::TableCell { children, .. } |
            BoxKind::Page { children, .. } |
            BoxKind::Margin { children, .. } => (children, None, &mut []),
            BoxKind::Text { .. } | BoxKind::BlockReplaced { .. } | BoxKind::InlineReplaced { .. } => {
                (&mut [], None, &mut [])
            },
        }
    }

    /// `(index, child)` pairs, skipping the first `skip_num` children.
    /// Skipping past the end yields nothing.
    pub fn enumerate_skip(
        &self,
        skip_num: usize,
    ) -> impl Iterator<Item = (usize, &LayoutBox)> {
        self.children().iter().enumerate().skip(skip_num)
    }

    /// This box followed by all of its descendants, in pre-order. The
    /// walk is restarted by calling this again; it must not race with
    /// structural mutation of the tree.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Move this box by `delta`, and every box reachable through
    /// [`LayoutBox::all_children`] with it, outside list markers and column
    /// groups included.
    pub fn translate(&mut self, delta: PhysicalVector) {
        self.base.position += delta;
        for child in self.all_children_mut() {
            child.translate(delta);
        }
    }

    // Fragmentation.

    /// A copy of this box with the child sequence replaced.
    ///
    /// `is_start` and `is_end` say whether the copy is the first and last
    /// fragment of the original box. A continuation fragment (`!is_start`)
    /// loses its outside list marker and its bookmark level, and split
    /// fragments only keep their outer decoration on the true start and end:
    /// the other edges get margin, padding and border-width forced to zero,
    /// in the resolved fields and in the style both.
    pub fn copy_with_children(
        &self,
        new_children: Vec<LayoutBox>,
        is_start: bool,
        is_end: bool,
    ) -> LayoutBox {
        assert!(
            self.kind.has_children(),
            "cannot replace children of a leaf box"
        );
        let mut new_box = LayoutBox {
            base: self.base.clone(),
            kind: self.kind.with_children(new_children),
        };
        if !is_start {
            new_box.base.bookmark_level = None;
            if let BoxKind::Block {
                outside_list_marker,
                ..
            } |
            BoxKind::TableCaption {
                outside_list_marker,
                ..
            } = &mut new_box.kind
            {
                *outside_list_marker = None;
            }
        }
        new_box.remove_decoration(!is_start, !is_end);
        new_box
    }

    /// Zero the margin, padding and border of the leading and/or trailing
    /// edge. Boxes split along the block axis strip physical top/bottom;
    /// inline-level boxes split along the inline axis strip the logical
    /// start/end side per the direction in effect when the split happens.
    fn remove_decoration(&mut self, strip_leading: bool, strip_trailing: bool) {
        let (leading, trailing) =
            if self.kind.outside() == Some(DisplayOutside::InlineLevel) {
                match self.base.style.direction {
                    Direction::Ltr => (PhysicalSide::Left, PhysicalSide::Right),
                    Direction::Rtl => (PhysicalSide::Right, PhysicalSide::Left),
                }
            } else {
                (PhysicalSide::Top, PhysicalSide::Bottom)
            };
        if strip_leading {
            self.reset_spacing(leading);
        }
        if strip_trailing {
            self.reset_spacing(trailing);
        }
    }

    fn reset_spacing(&mut self, side: PhysicalSide) {
        self.base.margin.set(side, Au(0));
        self.base.padding.set(side, Au(0));
        self.base.border_widths.set(side, Au(0));

        self.base.style.margin.set(side, Au(0));
        self.base.style.padding.set(side, Au(0));
        self.base.style.border_width.set(side, Au(0));
    }
}

/// Pre-order iterator over a box and its descendants.
/// See [`LayoutBox::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a LayoutBox>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a LayoutBox;

    fn next(&mut self) -> Option<&'a LayoutBox> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children().iter().rev());
        Some(next)
    }
}
