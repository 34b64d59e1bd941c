/// Tables that contain the entries of `emoji-test.txt`-like files, grouped and in file order
pub mod emoji_tables;
pub mod errors;
/// The line-by-line parser that builds the tables
pub mod parser;
pub mod regexes;
#[cfg(feature = "online")]
pub mod online;
#[cfg(test)]
mod tests;
