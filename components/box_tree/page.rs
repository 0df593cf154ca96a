/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Page and page-margin boxes, per CSS Paged Media.

use serde::Serialize;

use crate::base::BoxBase;
use crate::boxes::{BoxKind, LayoutBox};
use crate::style::Style;

/// Which side of the spread a page falls on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum PageSide {
    Left,
    Right,
}

/// The page selector a page box was generated for, used to match `@page`
/// rules.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PageType {
    pub side: PageSide,
    /// The first page of the document.
    pub first: bool,
    /// A blank page inserted to satisfy a `page-break-before: left/right`.
    pub blank: bool,
}

impl LayoutBox {
    /// The box for one page. Page boxes are not linked to any element, and
    /// each one owns fresh, initially empty child and fixed-box sequences.
    pub fn for_page(page_type: PageType, style: Style) -> LayoutBox {
        LayoutBox {
            base: BoxBase::new(None, None, style),
            kind: BoxKind::Page {
                page_type,
                children: Vec::new(),
                fixed_boxes: Vec::new(),
            },
        }
    }

    /// A box filling one page-margin area (`@top-center`, ...). Margin
    /// boxes are not linked to any element.
    pub fn margin_box(at_keyword: &str, style: Style, children: Vec<LayoutBox>) -> LayoutBox {
        LayoutBox {
            base: BoxBase::new(None, None, style),
            kind: BoxKind::Margin {
                at_keyword: at_keyword.to_owned(),
                children,
            },
        }
    }
}
