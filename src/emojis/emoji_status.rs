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

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// The qualification status of an emoji according to `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmojiStatus {
    /// A building block of other sequences, e.g. a skin tone modifier
    Component,
    /// It is a regular, RGI emoji
    FullyQualified,
    /// Some, but not all of the required `FE0F` are present
    MinimallyQualified,
    /// Not actually displayed as an emoji/not RGI
    Unqualified
}

impl EmojiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Unqualified => "unqualified",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified"
        }
    }
}

impl Display for EmojiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string())
        }
    }
}
