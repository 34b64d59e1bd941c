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
//! The public entry point: an emoji table together with a random number generator.

use std::fs;
use std::io::BufRead;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::CatalogConfig;
use crate::emojis::emoji::EmojiRecord;
use crate::tables::emoji_tables::EmojiTable;
use crate::utf8::{encode_to_string, EncodingError};

/// A trimmed down `emoji-test.txt` that is used whenever the definition file cannot be opened
pub const EMBEDDED_DEFINITION: &str = include_str!("../assets/emoji-test.txt");

/// An emoji table that can be queried for (random) emojis and their descriptions.
///
/// All queries degrade to empty results if no definition has been loaded.
/// # Examples
/// ```
/// use emoji_catalog::catalog::EmojiCatalog;
///
/// let catalog = EmojiCatalog::from_reader(
///     "# group: Animals & Nature\n\
///      # subgroup: animal-mammal\n\
///      1F98A ; fully-qualified # 🦊 E3.0 fox\n".as_bytes()
/// );
///
/// assert!(catalog.is_populated());
/// assert_eq!(catalog.random_emoji_from_group("Animals & Nature"), "🦊");
/// assert_eq!(catalog.random_emoji_from_group("Objects"), "");
/// ```
#[derive(Debug)]
pub struct EmojiCatalog {
    table: EmojiTable,
    rng: Mutex<StdRng>
}

impl EmojiCatalog {
    /// Looks for `emoji-test.txt` in `assets_path`.
    ///
    /// If the path is empty, the catalog stays empty. If the file cannot be opened,
    /// the embedded definition is used instead.
    pub fn new<P: AsRef<Path>>(assets_path: P) -> Self {
        Self::from_config(&CatalogConfig::new(assets_path.as_ref()))
    }

    /// Like [EmojiCatalog::new], but with reproducible random choices
    pub fn with_seed<P: AsRef<Path>>(assets_path: P, seed: u64) -> Self {
        Self::from_config(&CatalogConfig {
            seed: Some(seed),
            ..CatalogConfig::new(assets_path.as_ref())
        })
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let table = match config.definition_path() {
            None => {
                debug!("Assets path is empty");
                EmojiTable::new()
            }
            // Files that open but cannot be read (e.g. directories) fall back as well
            Some(path) => match fs::read(&path) {
                Ok(content) => {
                    info!("Emoji definition file found: {:?}", path);
                    EmojiTable::from_reader(content.as_slice())
                }
                Err(err) => {
                    error!("Emoji definition file {:?} cannot be read ({}). Loading embedded definition.",
                           path,
                           err);
                    Self::embedded_table()
                }
            }
        };
        debug!("Loaded {} emojis in {} groups", table.len(), table.group_names().len());
        Self::from_table_with_seed(table, config.seed)
    }

    /// Parses the definition compiled into this crate
    pub fn embedded_table() -> EmojiTable {
        EmojiTable::from_reader(EMBEDDED_DEFINITION.as_bytes())
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from_table(EmojiTable::from_reader(reader))
    }

    pub fn from_table(table: EmojiTable) -> Self {
        Self::from_table_with_seed(table, None)
    }

    /// Uses a fixed seed for the random choices if one is given, entropy otherwise
    pub fn from_table_with_seed(table: EmojiTable, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        };
        Self {
            table,
            rng: Mutex::new(rng)
        }
    }

    fn rng(&self) -> MutexGuard<StdRng> {
        // The generator state is always valid, even if another thread panicked
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn table(&self) -> &EmojiTable {
        &self.table
    }

    pub fn is_populated(&self) -> bool {
        self.table.is_populated()
    }

    /// A random emoji out of one of the main groups (see
    /// [crate::tables::emoji_tables::RANDOM_GROUPS])
    pub fn random_emoji(&self) -> String {
        let mut rng = self.rng();
        self.table.random_any(&mut *rng)
            .map(EmojiRecord::display_emoji)
            .unwrap_or_default()
    }

    pub fn random_emoji_from_group(&self, group: &str) -> String {
        self.random_record_from_group(group)
            .map(EmojiRecord::display_emoji)
            .unwrap_or_default()
    }

    pub fn random_emoji_from_sub_group(&self, sub_group: &str) -> String {
        self.random_record_from_sub_group(sub_group)
            .map(EmojiRecord::display_emoji)
            .unwrap_or_default()
    }

    pub fn random_record_from_group(&self, group: &str) -> Option<&EmojiRecord> {
        let mut rng = self.rng();
        self.table.random_in_group(group, &mut *rng)
    }

    pub fn random_record_from_sub_group(&self, sub_group: &str) -> Option<&EmojiRecord> {
        let mut rng = self.rng();
        self.table.random_in_sub_group(sub_group, &mut *rng)
    }

    /// All emojis of a group as one string
    pub fn emojis_from_group(&self, group: &str) -> String {
        self.table.emojis_in_group(group)
    }

    /// All emojis of a subgroup as one string
    pub fn emojis_from_sub_group(&self, sub_group: &str) -> String {
        self.table.emojis_in_sub_group(sub_group)
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.table.group_names()
    }

    pub fn sub_group_names(&self) -> Vec<&str> {
        self.table.sub_group_names()
    }

    pub fn size_of_group(&self, group: &str) -> usize {
        self.table.count_in_group(group)
    }

    pub fn size_of_sub_group(&self, sub_group: &str) -> usize {
        self.table.count_in_sub_group(sub_group)
    }

    /// The `index`-th emoji (starting at 0) of a group
    pub fn emoji_at_group(&self, group: &str, index: usize) -> Option<String> {
        self.table.record_at_group(group, index).map(EmojiRecord::display_emoji)
    }

    /// The `index`-th emoji (starting at 0) of a subgroup
    pub fn emoji_at_sub_group(&self, sub_group: &str, index: usize) -> Option<String> {
        self.table.record_at_sub_group(sub_group, index).map(EmojiRecord::display_emoji)
    }

    pub fn group_description(&self, group: &str) -> String {
        self.table.describe_group(group)
    }

    pub fn sub_group_description(&self, sub_group: &str) -> String {
        self.table.describe_sub_group(sub_group)
    }

    /// Encodes arbitrary codepoints, independent of the loaded definition
    pub fn encode(&self, code_points: &[u32]) -> Result<String, EncodingError> {
        encode_to_string(code_points)
    }

    pub fn encode_scalar(&self, code_point: u32) -> Result<String, EncodingError> {
        encode_to_string(&[code_point])
    }
}

impl Default for EmojiCatalog {
    fn default() -> Self {
        Self::from_table(EmojiTable::new())
    }
}
