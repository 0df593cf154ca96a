/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The box tree: the CSS visual formatting structure of a document, built by
//! an external tree builder and consumed by layout.
//!
//! Names follow CSS 2.1 with the exception of text boxes: any document text
//! ends up in a [`BoxKind::Text`] leaf, whether or not CSS would call the
//! surrounding box an anonymous inline box.
//!
//! Every box combines an "outside" behavior (block-level or inline-level,
//! see [`DisplayOutside`]) with an "inside" behavior (block container,
//! inline content, replaced or tabular, see [`DisplayInside`]). The
//! combinations are encoded as variants of [`BoxKind`], which also carries
//! the table-internal roles and the page and page-margin roots used by
//! paged media.
//!
//! Boxes never change variant once built. Layout mutates the geometry slots
//! of [`BoxBase`] in place, and models fragmentation by producing copies
//! ([`LayoutBox::copy_with_children`], [`LayoutBox::copy_with_text`]) rather
//! than splitting boxes destructively.

pub mod base;
pub mod boxes;
pub mod geom;
pub mod page;
pub mod replaced;
pub mod style;
pub mod table;
pub mod text;

pub use crate::base::{BoxBase, BoxFlags};
pub use crate::boxes::{BoxKind, DisplayInside, DisplayOutside, LayoutBox};
pub use crate::geom::{
    PhysicalPoint, PhysicalRect, PhysicalSide, PhysicalSides, PhysicalSize, PhysicalVector,
};
pub use crate::page::{PageSide, PageType};
pub use crate::replaced::{IntrinsicSizes, ReplacedContent};
pub use crate::style::{Direction, Float, Hyphens, Position, Style, TextTransform};
pub use crate::table::{check_table_structure, BoxTreeError, TableStructureViolation};
