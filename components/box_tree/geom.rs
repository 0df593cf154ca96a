/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Physical (writing-mode independent) geometry used by the box tree.
//!
//! All lengths are [`Au`], the fixed-point app unit, so that translating a
//! subtree and translating it back restores positions exactly.

use app_units::Au;
use serde::Serialize;

pub type PhysicalPoint = euclid::default::Point2D<Au>;
pub type PhysicalSize = euclid::default::Size2D<Au>;
pub type PhysicalRect = euclid::default::Rect<Au>;
pub type PhysicalVector = euclid::default::Vector2D<Au>;

/// One of the four physical edges of a box.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhysicalSide {
    Top,
    Right,
    Bottom,
    Left,
}

/// A value for each of the four physical edges of a box.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PhysicalSides<T> {
    pub top: T,
    pub right: T,
    pub bottom: T,
    pub left: T,
}

impl<T> PhysicalSides<T> {
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn get(&self, side: PhysicalSide) -> &T {
        match side {
            PhysicalSide::Top => &self.top,
            PhysicalSide::Right => &self.right,
            PhysicalSide::Bottom => &self.bottom,
            PhysicalSide::Left => &self.left,
        }
    }

    pub fn set(&mut self, side: PhysicalSide, value: T) {
        match side {
            PhysicalSide::Top => self.top = value,
            PhysicalSide::Right => self.right = value,
            PhysicalSide::Bottom => self.bottom = value,
            PhysicalSide::Left => self.left = value,
        }
    }
}

impl PhysicalSides<Au> {
    pub fn zero() -> Self {
        Self::new(Au(0), Au(0), Au(0), Au(0))
    }

    pub fn horizontal(&self) -> Au {
        self.left + self.right
    }

    pub fn vertical(&self) -> Au {
        self.top + self.bottom
    }
}
