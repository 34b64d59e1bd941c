use std::fmt::{Display, Formatter};

/// A representation of errors encountered while reading or exporting emoji tables.
#[derive(Debug)]
pub enum EmojiTableError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error),
    /// Wrapper for [csv::Error]
    Csv(csv::Error),
}

impl Display for EmojiTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EmojiTableError::Io(err) => write!(f, "I/O error: {}", err),
            EmojiTableError::Json(err) => write!(f, "JSON error: {}", err),
            EmojiTableError::Csv(err) => write!(f, "CSV error: {}", err),
        }
    }
}

impl std::error::Error for EmojiTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EmojiTableError::Io(err) => Some(err),
            EmojiTableError::Json(err) => Some(err),
            EmojiTableError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for EmojiTableError {
    fn from(err: std::io::Error) -> Self {
        EmojiTableError::Io(err)
    }
}

impl From<serde_json::Error> for EmojiTableError {
    fn from(err: serde_json::Error) -> Self {
        EmojiTableError::Json(err)
    }
}

impl From<csv::Error> for EmojiTableError {
    fn from(err: csv::Error) -> Self {
        EmojiTableError::Csv(err)
    }
}

#[cfg(feature = "online")]
#[derive(Debug)]
/// An error that occurs while loading an [crate::tables::emoji_tables::EmojiTable] from the web
pub enum ExpansionError {
    /// Wrapper for [reqwest::Error]
    Reqwest(reqwest::Error),
}

#[cfg(feature = "online")]
impl Display for ExpansionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpansionError::Reqwest(err) => write!(f, "Download failed: {}", err),
        }
    }
}

#[cfg(feature = "online")]
impl std::error::Error for ExpansionError {}

#[cfg(feature = "online")]
impl From<reqwest::Error> for ExpansionError {
    fn from(err: reqwest::Error) -> Self {
        ExpansionError::Reqwest(err)
    }
}
