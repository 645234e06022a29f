use std::io;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Custom error types for the language generator
#[derive(Error, Debug)]
pub enum LanguageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot choose from an empty {0}")]
    EmptyInventory(String),

    #[error("Pronoun '{word}' is glossed '{gloss}', which has no case forms")]
    UnknownPronoun { word: String, gloss: String },

    #[error("Invalid phonotactic pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for language operations
pub type Result<T> = std::result::Result<T, LanguageError>;

/// Trait extension for Option<T> to convert to LanguageError
pub trait OptionExt<T> {
    fn ok_or_empty(self, what: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_empty(self, what: &str) -> Result<T> {
        self.ok_or_else(|| LanguageError::EmptyInventory(what.to_string()))
    }
}

/// Pick one element uniformly at random, failing instead of panicking on an
/// empty slice
pub fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T], what: &str) -> Result<&'a T> {
    items.choose(rng).ok_or_empty(what)
}

/// Upper-case the first character of `text`, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Render words as a capitalized, period-terminated sentence
pub fn sentence_case(words: &[&str]) -> String {
    capitalize(&format!("{}.", words.join(" ")))
}
