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

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::loadable::{normalize_path, Loadable, LoadableImpl, LoadingError};

/// The name of the definition file inside the assets directory
pub const DEFINITION_FILE: &str = "emoji-test.txt";

/// Settings for building an [crate::catalog::EmojiCatalog].
///
/// A configuration file might look like this:
/// ```json
/// {
///     "assets_path": "assets",
///     "definition_file": "emoji-test.txt",
///     "seed": 42
/// }
/// ```
/// Every field is optional.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    /// The directory to look for the definition file in.
    /// `None` (or an empty path) results in an empty catalog.
    pub assets_path: Option<PathBuf>,
    /// The file name of the definition file inside `assets_path`
    pub definition_file: String,
    /// Makes random choices reproducible
    pub seed: Option<u64>
}

impl CatalogConfig {
    pub fn new<P: Into<PathBuf>>(assets_path: P) -> Self {
        Self {
            assets_path: Some(assets_path.into()),
            ..Self::default()
        }
    }

    /// The full path of the definition file (if there is an assets path)
    pub fn definition_path(&self) -> Option<PathBuf> {
        self.assets_path.as_ref()
            .filter(|path| !path.as_os_str().is_empty())
            .map(|path| path.join(&self.definition_file))
    }

    fn normalize_paths(&mut self, root_dir: &Path) {
        if let Some(assets_path) = &mut self.assets_path {
            if !assets_path.as_os_str().is_empty() {
                normalize_path(assets_path, root_dir);
            }
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            assets_path: None,
            definition_file: String::from(DEFINITION_FILE),
            seed: None
        }
    }
}

impl Loadable for CatalogConfig {
    /// Loads a JSON or YAML file (depending on the extension).
    /// A relative `assets_path` is interpreted relative to the directory of that file.
    fn from_file(file: &Path) -> Result<Self, LoadingError> {
        let mut config = Self::from_file_impl(file)?;
        if let Some(parent) = file.parent() {
            config.normalize_paths(parent);
        }
        Ok(config)
    }

    fn from_reader<R>(reader: R) -> Result<Self, LoadingError> where R: Read {
        Self::from_reader_impl(reader)
    }
}
