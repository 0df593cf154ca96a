/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Text handling for text boxes.

use crate::boxes::{BoxKind, LayoutBox};
use crate::style::{Hyphens, Style, TextTransform};

/// U+00AD SOFT HYPHEN (SHY).
const SOFT_HYPHEN: char = '\u{00AD}';

/// Apply the style's `text-transform` to a whole text unit in one pass,
/// then strip soft hyphens if hyphenation is disabled.
pub(crate) fn transform(text: &str, style: &Style) -> String {
    let text = match style.text_transform {
        TextTransform::None => text.to_owned(),
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::Lowercase => text.to_lowercase(),
        TextTransform::Capitalize => title_case(text),
    };
    if style.hyphens == Hyphens::None {
        text.replace(SOFT_HYPHEN, "")
    } else {
        text
    }
}

/// Title-case: uppercase the first letter of each alphabetic run, lowercase
/// the rest of the run.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut inside_word = false;
    for character in text.chars() {
        if character.is_alphabetic() {
            if inside_word {
                result.extend(character.to_lowercase());
            } else {
                result.extend(character.to_uppercase());
            }
            inside_word = true;
        } else {
            result.push(character);
            inside_word = false;
        }
    }
    result
}

impl LayoutBox {
    /// The text of this box. Valid only on text boxes.
    pub fn text(&self) -> &str {
        match &self.kind {
            BoxKind::Text { text } => text,
            _ => panic!("text() called on a non-text box"),
        }
    }

    /// A copy of this text box with only the text replaced. The replacement
    /// is used verbatim; empty text is a precondition violation.
    pub fn copy_with_text(&self, new_text: &str) -> LayoutBox {
        assert!(!new_text.is_empty(), "text boxes require non-empty text");
        let mut new_box = self.clone();
        match &mut new_box.kind {
            BoxKind::Text { text } => *text = new_text.to_owned(),
            _ => panic!("copy_with_text called on a non-text box"),
        }
        new_box
    }
}
