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
//! Manual UTF-8 encoding of single code points and code point sequences.
//!
//! The tables store raw `u32` sequences as they were read from the definition file,
//! so nothing guarantees that they are valid `char`s. Encoding happens lazily per query
//! and reports anything that cannot be represented instead of producing garbage bytes.

use std::fmt::{Display, Formatter};

const CONTINUATION: u32 = 0b1000_0000;
const CONTINUATION_MASK: u32 = 0b0011_1111;

/// The highest code point that UTF-8 can represent.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// An error that occurs if a code point has no UTF-8 representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// The value is larger than `U+10FFFF`
    OutOfRange(u32),
    /// The value is a UTF-16 surrogate (`U+D800..=U+DFFF`)
    Surrogate(u32),
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodingError::OutOfRange(scalar) =>
                write!(f, "U+{:X} is beyond U+{:X} and cannot be encoded", scalar, MAX_SCALAR),
            EncodingError::Surrogate(scalar) =>
                write!(f, "U+{:X} is a surrogate and cannot be encoded", scalar),
        }
    }
}

impl std::error::Error for EncodingError {}

/// Returns the number of bytes `scalar` occupies in UTF-8.
/// # Examples
/// ```
/// use emoji_catalog::utf8::encoded_len;
///
/// assert_eq!(encoded_len(0x41), Ok(1));
/// assert_eq!(encoded_len(0x1f600), Ok(4));
/// assert!(encoded_len(0x110000).is_err());
/// ```
pub fn encoded_len(scalar: u32) -> Result<usize, EncodingError> {
    match scalar {
        0xD800..=0xDFFF => Err(EncodingError::Surrogate(scalar)),
        0..=0x7F => Ok(1),
        0x80..=0x7FF => Ok(2),
        0x800..=0xFFFF => Ok(3),
        0x1_0000..=MAX_SCALAR => Ok(4),
        _ => Err(EncodingError::OutOfRange(scalar)),
    }
}

/// Appends the UTF-8 bytes of one code point to `buffer`.
/// Nothing is written if the code point cannot be encoded.
pub fn encode_scalar_into(scalar: u32, buffer: &mut Vec<u8>) -> Result<(), EncodingError> {
    // Every shifted value below fits into 8 bits once the range has been checked
    let byte = |value: u32| value as u8;

    match encoded_len(scalar)? {
        1 => buffer.push(byte(scalar)),
        2 => {
            buffer.push(byte(0b1100_0000 | (scalar >> 6)));
            buffer.push(byte(CONTINUATION | (scalar & CONTINUATION_MASK)));
        }
        3 => {
            buffer.push(byte(0b1110_0000 | (scalar >> 12)));
            buffer.push(byte(CONTINUATION | ((scalar >> 6) & CONTINUATION_MASK)));
            buffer.push(byte(CONTINUATION | (scalar & CONTINUATION_MASK)));
        }
        _ => {
            buffer.push(byte(0b1111_0000 | (scalar >> 18)));
            buffer.push(byte(CONTINUATION | ((scalar >> 12) & CONTINUATION_MASK)));
            buffer.push(byte(CONTINUATION | ((scalar >> 6) & CONTINUATION_MASK)));
            buffer.push(byte(CONTINUATION | (scalar & CONTINUATION_MASK)));
        }
    }
    Ok(())
}

/// Encodes a single code point into its 1 to 4 UTF-8 bytes.
/// # Examples
/// ```
/// use emoji_catalog::utf8::encode_scalar;
///
/// assert_eq!(encode_scalar(0xe9).unwrap(), vec![0xc3, 0xa9]);
/// assert_eq!(encode_scalar(0x1f600).unwrap(), "😀".as_bytes());
/// ```
pub fn encode_scalar(scalar: u32) -> Result<Vec<u8>, EncodingError> {
    let mut buffer = Vec::with_capacity(4);
    encode_scalar_into(scalar, &mut buffer)?;
    Ok(buffer)
}

/// Encodes a whole code point sequence (e.g. a flag or a ZWJ sequence) in order.
/// The first code point that cannot be encoded aborts the whole sequence.
pub fn encode_sequence(scalars: &[u32]) -> Result<Vec<u8>, EncodingError> {
    let mut buffer = Vec::with_capacity(scalars.len() * 4);
    for scalar in scalars {
        encode_scalar_into(*scalar, &mut buffer)?;
    }
    Ok(buffer)
}

/// Like [encode_sequence], but returns the emoji as a `String`
/// # Examples
/// ```
/// use emoji_catalog::utf8::encode_to_string;
///
/// // Flag: Germany
/// assert_eq!(encode_to_string(&[0x1f1e9, 0x1f1ea]).unwrap(), "🇩🇪");
/// assert_eq!(encode_to_string(&[]).unwrap(), "");
/// ```
pub fn encode_to_string(scalars: &[u32]) -> Result<String, EncodingError> {
    let bytes = encode_sequence(scalars)?;
    // Surrogates and out of range values have already been rejected
    Ok(String::from_utf8(bytes)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()))
}
