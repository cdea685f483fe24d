//! Core dictionary module: store construction and lookup.

pub mod error;
pub mod models;
pub mod pinyin;

mod frequency;
mod levels;
mod lexicon;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use log::info;

pub use error::{DictError, Result};
pub use lexicon::Lexicon;
use models::*;

/// A loaded Chinese dictionary for words and characters.
///
/// Built once from the five static input files, immutable afterwards;
/// a shared reference can serve concurrent readers without locking. The
/// constructor either completes the full build or fails; no partially
/// loaded store is ever observable.
#[derive(Debug)]
pub struct Dictionary {
    lexicon: Lexicon,
    /// Characters ordered strictly descending by `char_frequency`.
    chars_by_frequency: Vec<String>,
    /// Level buckets in source order; index 0 holds HSK level 1.
    level_chars: Vec<Vec<String>>,
    level_words: Vec<Vec<String>>,
    /// Every store key containing a given character, most frequent first.
    char_to_words: HashMap<char, Vec<String>>,
    diagnostics: LoadDiagnostics,
}

impl Dictionary {
    /// Build a dictionary from explicitly named input files.
    ///
    /// Load order: CC-CEDICT source first (the sole source of valid keys),
    /// then the four annotators against the built store, then the derived
    /// indices.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Any input file cannot be read
    /// - A dictionary or frequency line fails structural parsing
    /// - An HSK character list references a character with no entry
    pub fn load(paths: &SourcePaths) -> Result<Self> {
        let mut lexicon = lexicon::parse(&paths.cedict)?;

        let (chars_by_frequency, char_diag) =
            frequency::annotate_chars(&mut lexicon, &paths.char_frequencies)?;
        let word_diag = frequency::annotate_words(&mut lexicon, &paths.word_frequencies)?;
        let level_chars = levels::annotate_chars(&mut lexicon, &paths.hsk_chars)?;
        let (level_words, hsk_words_skipped) =
            levels::annotate_words(&mut lexicon, &paths.hsk_words)?;

        let char_to_words = build_char_index(&lexicon);

        info!(
            "Dictionary loaded: {} entries, {} ranked characters, {} HSK character levels, {} HSK word levels",
            lexicon.len(),
            chars_by_frequency.len(),
            level_chars.len(),
            level_words.len()
        );

        Ok(Self {
            lexicon,
            chars_by_frequency,
            level_chars,
            level_words,
            char_to_words,
            diagnostics: LoadDiagnostics {
                char_frequency: char_diag,
                word_frequency: word_diag,
                hsk_words_skipped,
            },
        })
    }

    /// Build a dictionary from a data directory using the conventional
    /// file names.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::load(&SourcePaths::in_dir(data_dir))
    }

    /// Look up an entry by its simplified form.
    pub fn lookup(&self, simplified: &str) -> Option<&DictEntry> {
        self.lexicon.get(simplified)
    }

    /// Look up an entry by its traditional form.
    pub fn lookup_traditional(&self, traditional: &str) -> Option<&DictEntry> {
        self.lexicon.get_traditional(traditional)
    }

    /// Characters in order from most to least frequent.
    pub fn chars_by_frequency(&self) -> &[String] {
        &self.chars_by_frequency
    }

    /// Characters of the given HSK level (1-indexed), in list order.
    pub fn level_chars(&self, level: u8) -> Option<&[String]> {
        bucket(&self.level_chars, level)
    }

    /// Words of the given HSK level (1-indexed), in list order.
    pub fn level_words(&self, level: u8) -> Option<&[String]> {
        bucket(&self.level_words, level)
    }

    /// Number of HSK character levels loaded.
    pub fn num_char_levels(&self) -> u8 {
        self.level_chars.len() as u8
    }

    /// Number of HSK word levels loaded.
    pub fn num_word_levels(&self) -> u8 {
        self.level_words.len() as u8
    }

    /// All store keys containing the given character, sorted by descending
    /// word frequency. Empty if the character occurs in no key.
    pub fn words_containing(&self, character: char) -> &[String] {
        self.char_to_words
            .get(&character)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Frequency mass covered by a caller-supplied known set.
    ///
    /// A pure query over the store: character mass sums `char_frequency`
    /// over known characters with entries; word mass sums `word_frequency`
    /// over store keys known either as words or as characters (a single
    /// character read as a word counts).
    pub fn coverage(
        &self,
        known_chars: &HashSet<String>,
        known_words: &HashSet<String>,
    ) -> CoverageReport {
        let mut report = CoverageReport::default();
        for character in known_chars {
            if let Some(entry) = self.lexicon.get(character) {
                report.known_characters += 1;
                report.character_mass += entry.char_frequency;
            }
        }
        for (word, entry) in &self.lexicon.entries {
            if known_words.contains(word) || known_chars.contains(word) {
                report.word_mass += entry.word_frequency;
            }
        }
        report
    }

    /// Iterate over every entry in the store, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &DictEntry> {
        self.lexicon.entries.values()
    }

    /// Recoverable-condition counters from the load.
    pub fn diagnostics(&self) -> &LoadDiagnostics {
        &self.diagnostics
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

fn bucket(levels: &[Vec<String>], level: u8) -> Option<&[String]> {
    if level == 0 {
        return None;
    }
    levels.get(level as usize - 1).map(Vec::as_slice)
}

/// Build the character-to-words reverse index: every key containing a
/// character, sorted by descending word frequency with key order breaking
/// ties deterministically.
fn build_char_index(lexicon: &Lexicon) -> HashMap<char, Vec<String>> {
    let mut index: HashMap<char, Vec<String>> = HashMap::new();
    for word in lexicon.entries.keys() {
        let mut seen: Vec<char> = Vec::new();
        for c in word.chars() {
            if seen.contains(&c) {
                continue;
            }
            seen.push(c);
            index.entry(c).or_default().push(word.clone());
        }
    }
    for words in index.values_mut() {
        words.sort_by(|a, b| {
            let fa = lexicon.entries[a].word_frequency;
            let fb = lexicon.entries[b].word_frequency;
            fb.partial_cmp(&fa).unwrap_or(Ordering::Equal).then_with(|| a.cmp(b))
        });
    }
    index
}
