//! HSK proficiency level parsing and entry annotation.

use std::fs;
use std::mem;
use std::path::Path;

use log::info;

use super::error::{DictError, Result};
use super::lexicon::Lexicon;

/// Full-width comma separating characters on an HSK character list line.
const CHAR_SEPARATOR: char = '\u{FF0C}';

/// Annotate `char_level` from an HSK character list.
///
/// One line per level, characters separated by a full-width comma; the
/// 1-indexed position of each non-empty line is the level number. Returns
/// the level buckets in source order (index 0 = level 1).
///
/// # Errors
/// Character lists are curated against the same dictionary, so a character
/// without an entry is a fatal [`DictError::UnknownLevelCharacter`].
pub fn annotate_chars(lexicon: &mut Lexicon, path: &Path) -> Result<Vec<Vec<String>>> {
    info!("Loading HSK character levels: {}", path.display());
    let source = fs::read_to_string(path)?;

    let mut levels: Vec<Vec<String>> = Vec::new();
    for line in source.lines() {
        let characters: Vec<String> = line
            .trim()
            .split(CHAR_SEPARATOR)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if characters.is_empty() {
            continue;
        }
        let level = (levels.len() + 1) as u8;
        for character in &characters {
            let entry = lexicon.entries.get_mut(character).ok_or_else(|| {
                DictError::UnknownLevelCharacter {
                    character: character.clone(),
                    level,
                }
            })?;
            entry.char_level = Some(level);
        }
        levels.push(characters);
    }

    info!("HSK character levels loaded: {}", levels.len());
    Ok(levels)
}

/// Annotate `word_level` from an HSK word list.
///
/// A `#`-prefixed line opens a new level block; each following non-comment
/// line is one word of that level. Words without a dictionary entry are
/// skipped with a count (multi-character phrases are not always headwords),
/// and only resolving words enter the returned buckets.
///
/// Level identity comes from the block boundaries alone: a block whose
/// words all fail to resolve still occupies its level (its bucket is
/// empty), so later blocks keep their numbers.
pub fn annotate_words(lexicon: &mut Lexicon, path: &Path) -> Result<(Vec<Vec<String>>, u64)> {
    info!("Loading HSK word levels: {}", path.display());
    let source = fs::read_to_string(path)?;

    let mut levels: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut block_has_words = false;
    let mut skipped = 0_u64;

    for line in source.lines() {
        if line.starts_with('#') {
            if block_has_words {
                levels.push(mem::take(&mut current));
                block_has_words = false;
            }
            continue;
        }
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        block_has_words = true;
        let level = (levels.len() + 1) as u8;
        if let Some(entry) = lexicon.entries.get_mut(word) {
            entry.word_level = Some(level);
            current.push(word.to_string());
        } else {
            skipped += 1;
        }
    }
    if block_has_words {
        levels.push(current);
    }

    if skipped > 0 {
        info!("{} HSK words have no dictionary entry", skipped);
    }
    Ok((levels, skipped))
}
