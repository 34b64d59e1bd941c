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


use std::collections::HashMap;
use std::sync::RwLock;

use crate::tables::emoji_tables::EmojiTable;
use crate::tables::errors::ExpansionError;

pub const EMOJI_TEST: &str = "emoji-test.txt";

/// Downloads `emoji-test.txt` for the given version (e.g. `(15, 0)`) and parses it.
pub fn load_online_table(version: (u32, u32)) -> Result<EmojiTable, ExpansionError> {
    let client = reqwest::blocking::ClientBuilder::new().build()?;
    let reader = get_test_file_online(&client, version)?;
    Ok(EmojiTable::from_reader(reader))
}

/// A simple helper function to build the URL for a version.
/// Starting with Emoji 16.0, the emoji files moved into the UCD directory.
#[inline]
fn build_url(version: (u32, u32)) -> String {
    if version.0 >= 16 {
        format!("https://unicode.org/Public/{}.{}.0/emoji/{}", version.0, version.1, EMOJI_TEST)
    } else {
        format!("https://unicode.org/Public/emoji/{}.{}/{}", version.0, version.1, EMOJI_TEST)
    }
}

pub fn get_test_file_online(client: &reqwest::blocking::Client, version: (u32, u32)) -> Result<std::io::Cursor<bytes::Bytes>, reqwest::Error> {
    // Check if we can return the file from the cache already
    if let Ok(cache) = (&*TABLE_CACHE as &TableCache).read() {
        if let Some(cached) = cache.get(&version) {
            debug!("Using cached {} for Emoji {}.{}", EMOJI_TEST, version.0, version.1);
            return Ok(std::io::Cursor::new(cached.clone()));
        }
    }
    let url = build_url(version);
    info!("Downloading {}", url);
    let bytes = client.get(&url).send()?
        .error_for_status()?
        .bytes()?;

    if let Ok(mut cache) = (&*TABLE_CACHE as &TableCache).write() {
        // Someone else might have been faster while we didn't hold the lock
        cache.entry(version).or_insert_with(|| bytes.clone());
    }

    Ok(std::io::Cursor::new(bytes))
}

type TableCache = RwLock<HashMap<(u32, u32), bytes::Bytes>>;

lazy_static! {
    static ref TABLE_CACHE: TableCache =
        RwLock::new(HashMap::with_capacity(4));
}
