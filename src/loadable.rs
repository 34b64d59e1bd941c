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

//! Loading of settings files that can be written in any of the supported [FileFormat]s.

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// The extension that is assumed for files without a known one
pub const DEFAULT_EXTENSION: &str = "json";

/// A format a [Loadable] can be read from, chosen by the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml
}

impl FileFormat {
    pub fn for_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" | "yml" => Some(FileFormat::Yaml),
            _ => None
        }
    }

    pub fn for_file(file: &Path) -> Option<Self> {
        file.extension()
            .and_then(|extension| Self::for_extension(extension.to_string_lossy().as_ref()))
    }

    pub fn deserialize<T, R>(self, reader: R) -> Result<T, LoadingError>
        where T: DeserializeOwned, R: Read {
        match self {
            FileFormat::Json => Ok(serde_json::from_reader(reader)?),
            FileFormat::Yaml => Ok(serde_yaml::from_reader(reader)?)
        }
    }
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::Json
    }
}

pub trait Loadable: Sized {
    fn from_file(file: &Path) -> Result<Self, LoadingError>;

    /// Reads JSON from any reader
    fn from_reader<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read;
}

/// The plain deserialization that [Loadable]s can build on
pub trait LoadableImpl: Sized {
    fn from_file_impl(file: &Path) -> Result<Self, LoadingError>;

    fn from_reader_impl<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read;
}

impl<T> LoadableImpl for T
    where T: DeserializeOwned {
    fn from_file_impl(file: &Path) -> Result<Self, LoadingError> {
        let format = FileFormat::for_file(file).unwrap_or_else(|| {
            warn!("Unknown file format for {:?}. Assuming {}", file, DEFAULT_EXTENSION);
            FileFormat::default()
        });
        debug!("Loading {:?} as {:?}", file, format);
        let reader = BufReader::new(File::open(file)?);
        format.deserialize(reader)
    }

    fn from_reader_impl<R>(reader: R) -> Result<Self, LoadingError>
        where R: Read {
        FileFormat::Json.deserialize(reader)
    }
}

#[derive(Debug)]
pub enum LoadingError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl Display for LoadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadingError::Io(err) => write!(f, "I/O error: {}", err),
            LoadingError::Json(err) => write!(f, "Invalid JSON: {}", err),
            LoadingError::Yaml(err) => write!(f, "Invalid YAML: {}", err),
        }
    }
}

impl std::error::Error for LoadingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadingError::Io(err) => Some(err),
            LoadingError::Json(err) => Some(err),
            LoadingError::Yaml(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for LoadingError {
    fn from(err: std::io::Error) -> Self {
        LoadingError::Io(err)
    }
}

impl From<serde_json::Error> for LoadingError {
    fn from(err: serde_json::Error) -> Self {
        LoadingError::Json(err)
    }
}

impl From<serde_yaml::Error> for LoadingError {
    fn from(err: serde_yaml::Error) -> Self {
        LoadingError::Yaml(err)
    }
}

/// Resolves a relative path against `root_dir`; absolute paths stay untouched.
pub fn normalize_path(target_path: &mut PathBuf, root_dir: &Path) {
    // has_root instead of is_absolute, so that \file on Windows isn't treated like .\file
    if !target_path.has_root() {
        *target_path = root_dir.join(&target_path);
    }
}
