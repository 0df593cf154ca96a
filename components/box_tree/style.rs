/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The computed-style collaborator consumed by the box tree.
//!
//! The cascade itself lives elsewhere; the box tree only depends on the
//! handful of computed properties below plus the [`Style::inherit_from`]
//! operation used when synthesizing anonymous boxes. A box always owns its
//! style as an independent value: cloning a box clones its style, and no two
//! boxes ever alias the same style storage.

use app_units::Au;

use crate::geom::PhysicalSides;

/// <https://drafts.csswg.org/css-writing-modes/#direction>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

/// <https://drafts.csswg.org/css2/#float-position>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Float {
    #[default]
    None,
    Left,
    Right,
}

/// <https://drafts.csswg.org/css-position/#position-property>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

/// <https://drafts.csswg.org/css-text/#text-transform-property>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

/// <https://drafts.csswg.org/css-text/#hyphenation>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Hyphens {
    None,
    #[default]
    Manual,
    Auto,
}

/// The computed values a box reads from its element's style.
///
/// Properties are split the way the cascade splits them: the inherited ones
/// propagate through [`Style::inherit_from`], the reset ones go back to
/// their initial values. Lengths are used values in app units; percentages
/// and `auto` are resolved by the cascade before the style reaches this
/// layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// True for styles synthesized for anonymous boxes. Line and text boxes
    /// may only be constructed from anonymous styles.
    pub anonymous: bool,

    // Inherited properties.
    pub direction: Direction,
    pub text_transform: TextTransform,
    pub hyphens: Hyphens,

    // Reset properties.
    pub float: Float,
    pub position: Position,
    /// `bookmark-level: none` is `None`; levels start at 1.
    pub bookmark_level: Option<u32>,
    pub bookmark_label: Option<String>,
    pub margin: PhysicalSides<Au>,
    pub padding: PhysicalSides<Au>,
    pub border_width: PhysicalSides<Au>,
}

impl Default for Style {
    /// The initial value of every property.
    fn default() -> Style {
        Style {
            anonymous: false,
            direction: Direction::default(),
            text_transform: TextTransform::default(),
            hyphens: Hyphens::default(),
            float: Float::default(),
            position: Position::default(),
            bookmark_level: None,
            bookmark_label: None,
            margin: PhysicalSides::zero(),
            padding: PhysicalSides::zero(),
            border_width: PhysicalSides::zero(),
        }
    }
}

impl Style {
    /// The style for an anonymous box generated inside an element with this
    /// style: inherited properties carry over, reset properties return to
    /// their initial values.
    pub fn inherit_from(&self) -> Style {
        Style {
            anonymous: true,
            direction: self.direction,
            text_transform: self.text_transform,
            hyphens: self.hyphens,
            ..Style::default()
        }
    }
}
