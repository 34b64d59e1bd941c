/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
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
 *
 */


use regex::Regex;

pub const GROUP_MARKER: &str = "# group:";
pub const SUBGROUP_MARKER: &str = "# subgroup:";

/// Matches the emoji version inside the trailing comment, e.g. `E13.1`
pub fn version_regex() -> &'static Regex {
    lazy_static! {
        static ref VERSION_REGEX: Regex = Regex::new(r"E[0-9]+\.[0-9]+").unwrap();
    }
    &*VERSION_REGEX
}

fn non_hex_regex() -> &'static Regex {
    lazy_static! {
        static ref NON_HEX: Regex = Regex::new(r"[^a-fA-F0-9]").unwrap();
    }
    &*NON_HEX
}

/// A raw data line, split into its parts but not interpreted yet.
///
/// The syntax of these lines is:
/// `Codepoints ; Status # Emoji "E"Version Emoji name`
#[derive(Debug, PartialEq, Eq)]
pub struct EmojiLine<'a> {
    pub sequence: &'a str,
    pub status: Option<&'a str>,
    pub annotation: &'a str
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Comment,
    Group(&'a str),
    SubGroup(&'a str),
    Data(EmojiLine<'a>),
    /// Neither a comment nor a line with a trailing annotation
    Unrecognized
}

/// Sorts a single line of an `emoji-test.txt`-like file into one of the [LineKind]s.
/// # Examples
/// ```
/// use emoji_catalog::tables::regexes::{match_line, LineKind};
///
/// assert_eq!(match_line("# group: Smileys & Emotion"), LineKind::Group("Smileys & Emotion"));
/// assert_eq!(match_line("# Status Counts"), LineKind::Comment);
/// assert_eq!(match_line("   "), LineKind::Blank);
/// ```
pub fn match_line(line: &str) -> LineKind {
    if line.trim().is_empty() {
        LineKind::Blank
    } else if line.starts_with('#') {
        if let Some(position) = line.find(SUBGROUP_MARKER) {
            LineKind::SubGroup(line[position + SUBGROUP_MARKER.len()..].trim())
        } else if let Some(position) = line.find(GROUP_MARKER) {
            LineKind::Group(line[position + GROUP_MARKER.len()..].trim())
        } else {
            LineKind::Comment
        }
    } else if let Some(hash) = line.find('#') {
        let annotation = &line[hash + 1..];
        let head = &line[..hash];
        let (sequence, status) = match head.find(';') {
            Some(semicolon) => (&head[..semicolon], Some(head[semicolon + 1..].trim())),
            None => (head, None)
        };
        LineKind::Data(EmojiLine {
            sequence,
            status: status.filter(|status| !status.is_empty()),
            annotation
        })
    } else {
        LineKind::Unrecognized
    }
}

/// Strips everything that is not a hexadecimal digit from a token.
pub fn clean_hex_token(token: &str) -> std::borrow::Cow<str> {
    non_hex_regex().replace_all(token, "")
}

/// Extracts the emoji version and the text that follows it from the trailing annotation.
/// Exactly one character (usually a space) between the version and the description is skipped.
/// # Examples
/// ```
/// use emoji_catalog::tables::regexes::split_annotation;
///
/// assert_eq!(split_annotation(" 🫠 E14.0 melting face"), Some(("E14.0", "melting face")));
/// assert_eq!(split_annotation(" no version here"), None);
/// ```
pub fn split_annotation(annotation: &str) -> Option<(&str, &str)> {
    let version = version_regex().find(annotation)?;
    let rest = &annotation[version.end()..];
    let description = match rest.chars().next() {
        Some(skipped) => &rest[skipped.len_utf8()..],
        None => rest
    };
    Some((version.as_str(), description))
}
