/// A single entry of an emoji table
pub mod emoji;
/// The qualification status of an entry
pub mod emoji_status;
