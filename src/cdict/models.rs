//! Data structures representing dictionary entries and load results.

use std::path::{Path, PathBuf};

use super::error::Result;
use super::pinyin;

/// Conventional file name of the CC-CEDICT source inside a data directory.
pub const CEDICT_FILE: &str = "cedict_ts.u8";
/// Conventional file name of the character frequency table.
pub const CHAR_FREQUENCY_FILE: &str = "characters_by_frequency.txt";
/// Conventional file name of the word frequency table.
pub const WORD_FREQUENCY_FILE: &str = "words_by_frequency.csv";
/// Conventional file name of the HSK character list.
pub const HSK_CHARS_FILE: &str = "hsk_chars.txt";
/// Conventional file name of the HSK word list.
pub const HSK_WORDS_FILE: &str = "hsk_words.txt";

/// Locations of the five input files for a dictionary build.
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub cedict: PathBuf,
    pub char_frequencies: PathBuf,
    pub word_frequencies: PathBuf,
    pub hsk_chars: PathBuf,
    pub hsk_words: PathBuf,
}

impl SourcePaths {
    /// Paths using the conventional file names inside `data_dir`.
    pub fn in_dir(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        Self {
            cedict: dir.join(CEDICT_FILE),
            char_frequencies: dir.join(CHAR_FREQUENCY_FILE),
            word_frequencies: dir.join(WORD_FREQUENCY_FILE),
            hsk_chars: dir.join(HSK_CHARS_FILE),
            hsk_words: dir.join(HSK_WORDS_FILE),
        }
    }
}

/// One sense of a word or character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeaningEntry {
    /// Pinyin with tones indicated by trailing digits, e.g. "ni3 hao3".
    pub pinyin: String,
    /// The dictionary gloss for this sense, in English.
    pub gloss: String,
}

impl MeaningEntry {
    /// The pinyin with the tone digit replaced by a combining diacritic
    /// over the nucleus vowel. Computed on demand, never stored.
    ///
    /// # Errors
    /// Returns an error if a tone-numbered syllable has no vowel to carry
    /// the mark.
    pub fn pinyin_diacritics(&self) -> Result<String> {
        pinyin::to_diacritics(&self.pinyin)
    }
}

/// One simplified-script word or character with everything known about it.
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    /// The simplified form. Unique key across the store.
    pub simplified: String,
    /// The traditional-script equivalent.
    pub traditional: String,
    /// All senses, primary sense first after the variant re-sort.
    pub meanings: Vec<MeaningEntry>,
    /// Density mass of this string as a standalone character in the
    /// reference corpus, in [0, 1]. 0 if absent from the frequency table.
    pub char_frequency: f64,
    /// Density mass of this string as a word, in [0, 1]. 0 if absent.
    pub word_frequency: f64,
    /// HSK level as a character, if on any list.
    pub char_level: Option<u8>,
    /// HSK level as a word, if on any list.
    pub word_level: Option<u8>,
}

impl DictEntry {
    pub(crate) fn new(simplified: String, traditional: String) -> Self {
        Self {
            simplified,
            traditional,
            meanings: Vec::new(),
            char_frequency: 0.0,
            word_frequency: 0.0,
            char_level: None,
            word_level: None,
        }
    }
}

/// Misses recorded while applying one frequency table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrequencyDiagnostics {
    /// Rows whose key has no dictionary entry at all.
    pub entries_missing: u64,
    /// Total probability mass carried by the missing rows.
    pub mass_missing: f64,
    /// Rows whose key only matches a traditional form. The character table
    /// mixes scripts; these are ignored rather than treated as unknown.
    pub traditional_ignored: u64,
}

/// Recoverable-condition counters accumulated across a full load.
///
/// Fatal conditions abort the load instead; everything here is
/// observability, invisible to lookup callers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadDiagnostics {
    pub char_frequency: FrequencyDiagnostics,
    pub word_frequency: FrequencyDiagnostics,
    /// HSK word list lines with no dictionary entry. Word lists legitimately
    /// contain phrases absent from some dictionary builds.
    pub hsk_words_skipped: u64,
}

/// Aggregate frequency mass covered by a caller-supplied "known" set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoverageReport {
    /// Known characters that have a dictionary entry.
    pub known_characters: u64,
    /// Sum of `char_frequency` over the known characters.
    pub character_mass: f64,
    /// Sum of `word_frequency` over store keys known as words or as
    /// characters.
    pub word_mass: f64,
}
