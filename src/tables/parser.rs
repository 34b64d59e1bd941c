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
//! A permissive, line-oriented parser for `emoji-test.txt`-like files.
//!
//! Group and subgroup headers only change the parser state; every data line after them
//! inherits the latest ones. Malformed content is skipped and logged, never rejected.

use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

use crate::emojis::emoji::EmojiRecord;
use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::regexes::{clean_hex_token, match_line, split_annotation, EmojiLine, LineKind};

/// The state that is carried from one line to the next.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParserContext {
    pub group: String,
    pub sub_group: String,
    /// The version of the last data line that had one
    pub unicode_version: String,
    /// The description of the last data line that had a version
    pub text_description: String,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line into the parser and returns the record it describes (if any).
    pub fn parse_line(&mut self, line: &str) -> Option<EmojiRecord> {
        let line = line.trim_end_matches('\r');
        match match_line(line) {
            LineKind::Blank | LineKind::Comment => None,
            LineKind::Group(group) => {
                debug!("Group: {}", group);
                self.group = group.to_owned();
                None
            }
            LineKind::SubGroup(sub_group) => {
                debug!("Subgroup: {}", sub_group);
                self.sub_group = sub_group.to_owned();
                None
            }
            LineKind::Data(data) => self.parse_data(line, data),
            LineKind::Unrecognized => {
                warn!("Malformed line in emoji-test.txt: {}", line);
                None
            }
        }
    }

    fn parse_data(&mut self, line: &str, data: EmojiLine) -> Option<EmojiRecord> {
        let code_points = parse_code_points(data.sequence);
        if code_points.is_empty() {
            warn!("No codepoints found in line: {}", line);
            return None;
        }

        // Lines without a version keep the previous version and description
        if let Some((version, description)) = split_annotation(data.annotation) {
            self.unicode_version = version.to_owned();
            self.text_description = description.to_owned();
        } else {
            debug!("No emoji version in line: {}", line);
        }

        let status = data.status.and_then(|status| EmojiStatus::from_str(status)
            .map_err(|unknown| debug!("Unknown emoji status: {}", unknown))
            .ok());

        let record = EmojiRecord {
            code_points,
            group: self.group.clone(),
            sub_group: self.sub_group.clone(),
            unicode_version: self.unicode_version.clone(),
            text_description: self.text_description.clone(),
            status
        };
        debug!("Parsed: {:?}", record);
        Some(record)
    }
}

/// Parses a whitespace-separated list of hexadecimal codepoints.
/// Non-hex characters are removed from each token first; tokens that end up empty or that are
/// too large for a `u32` are skipped.
/// # Examples
/// ```
/// use emoji_catalog::tables::parser::parse_code_points;
///
/// assert_eq!(parse_code_points("1F3F3 FE0F 200D 1F308 "), vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
/// assert_eq!(parse_code_points("U+1F600 -- zz"), vec![0x1f600]);
/// ```
pub fn parse_code_points(sequence: &str) -> Vec<u32> {
    sequence.split_whitespace()
        .filter_map(|token| {
            let cleaned = clean_hex_token(token);
            if cleaned.is_empty() {
                warn!("Skipping token without hex digits: {:?}", token);
                return None;
            }
            u32::from_str_radix(&cleaned, 16)
                .map_err(|err| warn!("Skipping invalid codepoint {:?}: {}", token, err))
                .ok()
        })
        .collect()
}

/// Reads all lines from `reader` and returns the records in file order.
/// Lines that are not valid UTF-8 are skipped; any other I/O error ends the parsing.
pub fn parse_records<R: BufRead>(reader: R) -> Vec<EmojiRecord> {
    let mut context = ParserContext::new();
    let mut records = Vec::new();
    for line in reader.lines() {
        match line {
            Ok(line) => records.extend(context.parse_line(&line)),
            Err(err) if err.kind() == ErrorKind::InvalidData => warn!("Cannot read line: {}", err),
            Err(err) => {
                error!("Stopped reading the emoji table: {}", err);
                break;
            }
        }
    }
    records
}
