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
//! A module that allows to parse [Unicode® emoji test files][unicode]
//! (or files in a similar format) into an ordered table and query it by group and subgroup.
//!
//! [unicode]: https://unicode.org/Public/emoji/15.0/emoji-test.txt

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use itertools::Itertools;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::emojis::emoji::EmojiRecord;
use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::errors::EmojiTableError;
use crate::tables::parser::parse_records;

/// The key of an entry; entries are numbered in file order, starting at 0
pub type EmojiTableKey = usize;

/// The groups [EmojiTable::random_any] chooses from
pub const RANDOM_GROUPS: [&str; 6] = [
    "Smileys & Emotion",
    "Animals & Nature",
    "Food & Drink",
    "Activities",
    "Travel & Places",
    "Objects"
];

/// An internal representation of an `emoji-test.txt` file.
/// The entries keep the order of the file and are immutable once the table has been built.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct EmojiTable {
    records: Vec<EmojiRecord>
}

impl EmojiTable {
    /// Creates a new, empty emoji table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `emoji-test.txt`-like file.
    ///
    /// _Please note that this parser is extremely **permissive**: lines it doesn't understand
    /// will be skipped._
    ///
    /// The syntax of these files is:
    /// ```text
    /// # group: Smileys & Emotion
    /// # subgroup: face-smiling
    /// 1F600 ; fully-qualified # 😀 E1.0 grinning face
    /// ```
    /// # Examples
    /// ```
    /// use emoji_catalog::tables::emoji_tables::EmojiTable;
    ///
    /// let definition = "# group: Smileys & Emotion\n\
    ///                   # subgroup: face-smiling\n\
    ///                   1F600 ; fully-qualified # 😀 E1.0 grinning face\n";
    /// let table = EmojiTable::from_reader(definition.as_bytes());
    ///
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.group_names(), vec!["Smileys & Emotion"]);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from(parse_records(reader))
    }

    /// Opens and parses an `emoji-test.txt`-like file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EmojiTableError> {
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Returns the entry with the given key
    pub fn get(&self, key: EmojiTableKey) -> Option<&EmojiRecord> {
        self.records.get(key)
    }

    /// Iterates over all entries together with their keys in file order
    pub fn iter(&self) -> impl Iterator<Item=(EmojiTableKey, &EmojiRecord)> {
        self.records.iter().enumerate()
    }

    /// Returns the size of the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A table is populated as soon as at least one data line has been parsed
    pub fn is_populated(&self) -> bool {
        !self.is_empty()
    }

    /// All distinct group names in the order they first appear
    pub fn group_names(&self) -> Vec<&str> {
        self.records.iter()
            .map(|record| record.group.as_str())
            .unique()
            .collect()
    }

    /// All distinct subgroup names in the order they first appear
    pub fn sub_group_names(&self) -> Vec<&str> {
        self.records.iter()
            .map(|record| record.sub_group.as_str())
            .unique()
            .collect()
    }

    pub fn count_in_group(&self, group: &str) -> usize {
        self.records.iter().filter(|record| record.group == group).count()
    }

    pub fn count_in_sub_group(&self, sub_group: &str) -> usize {
        self.records.iter().filter(|record| record.sub_group == sub_group).count()
    }

    /// Returns the `index`-th entry (starting at 0) of a group
    pub fn record_at_group(&self, group: &str, index: usize) -> Option<&EmojiRecord> {
        self.records.iter().filter(|record| record.group == group).nth(index)
    }

    /// Returns the `index`-th entry (starting at 0) of a subgroup
    pub fn record_at_sub_group(&self, sub_group: &str, index: usize) -> Option<&EmojiRecord> {
        self.records.iter().filter(|record| record.sub_group == sub_group).nth(index)
    }

    pub fn all_in_group(&self, group: &str) -> Vec<&EmojiRecord> {
        self.records.iter().filter(|record| record.group == group).collect()
    }

    pub fn all_in_sub_group(&self, sub_group: &str) -> Vec<&EmojiRecord> {
        self.records.iter().filter(|record| record.sub_group == sub_group).collect()
    }

    /// Chooses one entry of a group, each with the same probability.
    /// Returns `None` if there is no such group.
    pub fn random_in_group<R: Rng + ?Sized>(&self, group: &str, rng: &mut R) -> Option<&EmojiRecord> {
        self.all_in_group(group).choose(rng).copied()
    }

    /// Chooses one entry of a subgroup, each with the same probability.
    pub fn random_in_sub_group<R: Rng + ?Sized>(&self, sub_group: &str, rng: &mut R) -> Option<&EmojiRecord> {
        self.all_in_sub_group(sub_group).choose(rng).copied()
    }

    /// Chooses one of the [RANDOM_GROUPS] and then a random entry in it.
    pub fn random_any<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&EmojiRecord> {
        let group = RANDOM_GROUPS.choose(rng)?;
        self.random_in_group(group, rng)
    }

    /// All emojis of a group, concatenated to a single string
    pub fn emojis_in_group(&self, group: &str) -> String {
        self.records.iter()
            .filter(|record| record.group == group)
            .map(EmojiRecord::display_emoji)
            .collect()
    }

    /// All emojis of a subgroup, concatenated to a single string
    pub fn emojis_in_sub_group(&self, sub_group: &str) -> String {
        self.records.iter()
            .filter(|record| record.sub_group == sub_group)
            .map(EmojiRecord::display_emoji)
            .collect()
    }

    /// One line per emoji in this group as created by [EmojiRecord::describe]
    pub fn describe_group(&self, group: &str) -> String {
        self.records.iter()
            .filter(|record| record.group == group)
            .map(EmojiRecord::describe)
            .collect()
    }

    /// One line per emoji in this subgroup as created by [EmojiRecord::describe]
    pub fn describe_sub_group(&self, sub_group: &str) -> String {
        self.records.iter()
            .filter(|record| record.sub_group == sub_group)
            .map(EmojiRecord::describe)
            .collect()
    }

    fn export_rows(&self) -> impl Iterator<Item=ExportRow<'_>> + '_ {
        self.iter().map(|(key, record)| ExportRow {
            key,
            emoji: record.display_emoji(),
            code_points: record.code_point_string(),
            group: &record.group,
            sub_group: &record.sub_group,
            status: record.status,
            unicode_version: &record.unicode_version,
            text_description: &record.text_description
        })
    }

    /// Writes all entries as a JSON array
    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), EmojiTableError> {
        let rows = self.export_rows().collect_vec();
        serde_json::to_writer_pretty(writer, &rows)?;
        Ok(())
    }

    /// Writes all entries as CSV (with a header)
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), EmojiTableError> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in self.export_rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    key: EmojiTableKey,
    emoji: String,
    code_points: String,
    group: &'a str,
    sub_group: &'a str,
    status: Option<EmojiStatus>,
    unicode_version: &'a str,
    text_description: &'a str
}

impl From<Vec<EmojiRecord>> for EmojiTable {
    fn from(records: Vec<EmojiRecord>) -> Self {
        Self {
            records
        }
    }
}
