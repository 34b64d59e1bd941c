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
//! The main crate for emoji_catalog: parses `emoji-test.txt` into a catalog of emojis
//! that can be queried by group and subgroup.

#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

/// The facade that loads a definition and answers queries
pub mod catalog;
/// Settings for building a catalog
pub mod config;
/// Handling for single emoji entries
pub mod emojis;
/// Loading of JSON/YAML files
pub mod loadable;
/// Tables that contain the parsed entries
pub mod tables;
/// Encoding of codepoints into UTF-8
pub mod utf8;


#[cfg(test)]
mod tests;
