//! Custom error types for the cedict-reader crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum DictError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A dictionary source line does not match the
    /// `TRAD SIMP [PINYIN] /gloss/.../` structure.
    #[error("Malformed dictionary line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    /// A frequency table row is structurally invalid (missing columns or an
    /// unparseable number).
    #[error("Malformed {table} frequency row {line_number}: {line:?}")]
    MalformedFrequencyRow {
        table: &'static str,
        line_number: usize,
        line: String,
    },

    /// The word frequency table header does not declare a usable total
    /// corpus token count.
    #[error("Word frequency header is missing a total token count: {line:?}")]
    MissingTotalCount { line: String },

    /// An HSK character list references a character with no dictionary
    /// entry. Character lists are curated against the dictionary, so this
    /// is a build-aborting precondition failure, not a skippable miss.
    #[error("HSK level {level} character {character:?} has no dictionary entry")]
    UnknownLevelCharacter { character: String, level: u8 },

    /// A tone-numbered syllable contains no vowel to carry the diacritic.
    #[error("No nucleus vowel in tone-numbered syllable {syllable:?}")]
    MissingToneVowel { syllable: String },
}

/// A convenience `Result` type alias using the crate's `DictError` type.
pub type Result<T> = std::result::Result<T, DictError>;
