/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Replaced content: rendered externally, opaque to layout.

use app_units::Au;
use serde::Serialize;

/// Intrinsic sizing information advertised by a piece of replaced content.
/// Any of the three may be missing (e.g. SVG with only a ratio).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct IntrinsicSizes {
    pub width: Option<Au>,
    pub height: Option<Au>,
    pub ratio: Option<f32>,
}

/// The payload of a replaced box, supplied by the embedder when the tree is
/// built. Layout only ever looks at the intrinsic sizes; what the content
/// *is* stays opaque to this crate.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReplacedContent {
    pub intrinsic: IntrinsicSizes,
}

impl ReplacedContent {
    pub fn new(intrinsic: IntrinsicSizes) -> Self {
        Self { intrinsic }
    }
}
