/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Fields common to every box, regardless of variant.

use app_units::Au;
use bitflags::bitflags;
use euclid::default::Transform3D;
use html5ever::LocalName;
use serde::{Serialize, Serializer};

use crate::geom::{PhysicalPoint, PhysicalSides, PhysicalSize};
use crate::style::Style;

bitflags! {
    /// Per-instance classification flags, set by the tree builder.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct BoxFlags: u8 {
        /// This block box was generated to wrap a table together with its
        /// captions.
        const IS_TABLE_WRAPPER = 1 << 0;
        /// This box was generated for the document's root element.
        const IS_FOR_ROOT_ELEMENT = 1 << 1;
    }
}

/// The data every box carries: identity, style, and the geometry slots that
/// layout fills in.
#[derive(Clone, Debug, Serialize)]
pub struct BoxBase {
    /// The local name of the source element, or `None` for boxes with no
    /// source element (pages, page-margin boxes).
    #[serde(serialize_with = "serialize_element_tag")]
    pub element_tag: Option<LocalName>,

    /// Source line of the element, for debugging only.
    pub source_line: Option<u64>,

    /// This box's own computed style. Always an independent value; see the
    /// module documentation of [`crate::style`].
    #[serde(skip_serializing)]
    pub style: Style,

    /// Absolute position of the margin box, set by layout. Zero until
    /// layout runs.
    pub position: PhysicalPoint,

    /// Content box size, set by layout. Zero until layout runs.
    pub size: PhysicalSize,

    pub margin: PhysicalSides<Au>,
    pub border_widths: PhysicalSides<Au>,
    pub padding: PhysicalSides<Au>,

    /// Extra spacing above the top margin introduced by `clear`, set by
    /// layout. Only ever set on block-level boxes.
    pub clearance: Option<Au>,

    /// Document-outline label, set by the tree builder when the style
    /// requests a bookmark.
    pub bookmark_label: Option<String>,

    /// Document-outline level. Populated from the style at construction;
    /// cleared on continuation fragments.
    pub bookmark_level: Option<u32>,

    /// The accumulated CSS transform for this box, set by layout.
    pub transformation_matrix: Option<Transform3D<f32>>,

    #[serde(serialize_with = "serialize_flags")]
    pub flags: BoxFlags,
}

impl BoxBase {
    pub fn new(element_tag: Option<LocalName>, source_line: Option<u64>, style: Style) -> Self {
        let bookmark_level = style.bookmark_level;
        Self {
            element_tag,
            source_line,
            style,
            position: PhysicalPoint::zero(),
            size: PhysicalSize::zero(),
            margin: PhysicalSides::zero(),
            border_widths: PhysicalSides::zero(),
            padding: PhysicalSides::zero(),
            clearance: None,
            bookmark_label: None,
            bookmark_level,
            transformation_matrix: None,
            flags: BoxFlags::empty(),
        }
    }

    /// Whether this box is taken out of normal flow by `float`.
    pub fn is_floated(&self) -> bool {
        self.style.float != crate::style::Float::None
    }

    /// Whether this box is in the absolute positioning scheme.
    pub fn is_absolutely_positioned(&self) -> bool {
        matches!(
            self.style.position,
            crate::style::Position::Absolute | crate::style::Position::Fixed
        )
    }

    /// Whether this box is in normal flow. Exactly one positioning scheme
    /// applies to a box at a time.
    pub fn is_in_normal_flow(&self) -> bool {
        !(self.is_floated() || self.is_absolutely_positioned())
    }
}

fn serialize_element_tag<S: Serializer>(
    tag: &Option<LocalName>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match tag {
        Some(name) => serializer.serialize_some::<str>(&**name),
        None => serializer.serialize_none(),
    }
}

fn serialize_flags<S: Serializer>(flags: &BoxFlags, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(flags.bits())
}
