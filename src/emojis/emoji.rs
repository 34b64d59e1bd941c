/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */
//! The main data struct for single emoji entries.

use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::emojis::emoji_status::EmojiStatus;
use crate::utf8::{encode_to_string, EncodingError};

/// One entry of an `emoji-test.txt`-like file, e.g.
/// `1F600 ; fully-qualified # 😀 E1.0 grinning face`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmojiRecord {
    /// The sequence of Unicode® codepoints that represents this emoji.
    pub code_points: Vec<u32>,
    /// The group this emoji was listed under (e.g. `Smileys & Emotion`)
    pub group: String,
    /// The subgroup this emoji was listed under (e.g. `face-smiling`)
    pub sub_group: String,
    /// The emoji version this emoji was introduced in (e.g. `E1.0`).
    /// Might be empty.
    pub unicode_version: String,
    /// The name of the emoji. Might be empty.
    pub text_description: String,
    /// The qualification status (if it could be read)
    pub status: Option<EmojiStatus>,
}

impl EmojiRecord {
    /// Encodes the codepoints of this emoji into a fresh string.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::EmojiRecord;
    ///
    /// let rainbow_flag = EmojiRecord {
    ///     code_points: vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308],
    ///     ..EmojiRecord::default()
    /// };
    ///
    /// assert_eq!(rainbow_flag.emoji().unwrap(), "🏳️‍🌈");
    /// ```
    pub fn emoji(&self) -> Result<String, EncodingError> {
        encode_to_string(&self.code_points)
    }

    /// Returns the emoji itself or an empty string if it contains codepoints that cannot be
    /// encoded.
    pub fn display_emoji(&self) -> String {
        self.emoji().unwrap_or_else(|err| {
            warn!("Cannot encode {}: {}", self.code_point_string(), err);
            String::new()
        })
    }

    /// The codepoints in the notation of the data files, e.g. `1F3F3 FE0F 200D 1F308`
    pub fn code_point_string(&self) -> String {
        self.code_points.iter()
            .map(|code_point| format!("{:04X}", code_point))
            .join(" ")
    }

    /// A single, newline-terminated line that lists all the metadata of this emoji.
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::EmojiRecord;
    ///
    /// let grinning = EmojiRecord {
    ///     code_points: vec![0x1f600],
    ///     group: String::from("Smileys & Emotion"),
    ///     sub_group: String::from("face-smiling"),
    ///     unicode_version: String::from("E1.0"),
    ///     text_description: String::from("grinning face"),
    ///     status: None
    /// };
    ///
    /// assert_eq!(
    ///     grinning.describe(),
    ///     "Emoji: 😀\t Group: Smileys & Emotion | Subgroup: face-smiling | \
    ///      Description: grinning face | Unicode version: E1.0\n"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        format!("Emoji: {}\t Group: {} | Subgroup: {} | Description: {} | Unicode version: {}\n",
                self.display_emoji(),
                self.group,
                self.sub_group,
                self.text_description,
                self.unicode_version)
    }
}

impl From<Vec<u32>> for EmojiRecord {
    fn from(code_points: Vec<u32>) -> Self {
        Self {
            code_points,
            ..Self::default()
        }
    }
}

impl Display for EmojiRecord {
    /// Shows the description if there is one, otherwise the code sequence in square brackets
    /// (e.g. `[1F3F3-FE0F-200D-1F308]`).
    /// # Examples
    /// ```
    /// use emoji_catalog::emojis::emoji::EmojiRecord;
    ///
    /// let thinking = EmojiRecord::from(vec![0x1f914]);
    /// assert_eq!("[1F914]", format!("{}", thinking));
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.text_description.is_empty() {
            write!(f, "{}", self.text_description)
        } else {
            write!(f, "[{}]", self.code_points.iter()
                .map(|codepoint| format!("{:X}", codepoint))
                .join("-"))
        }
    }
}
