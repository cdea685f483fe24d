//! CC-CEDICT source parsing into the primary entry store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;

use super::error::{DictError, Result};
use super::models::{DictEntry, MeaningEntry};

/// Compiled regex for the CC-CEDICT line structure.
///
/// `TRAD SIMP [PINYIN] /gloss/gloss/.../`. Glosses are captured between
/// the outermost slashes so they can be split without touching the rest of
/// the line.
static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn line_regex() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| {
        Regex::new(r"^(\S+)\s+(\S+)\s+\[([^\]]*)\]\s+/(.*)/\s*$")
            .expect("Invalid CC-CEDICT line regex pattern")
    })
}

/// The primary entry store: simplified key to exclusively-owned entry, plus
/// a non-owning back-reference from each traditional form to its simplified
/// key. Every traditional key resolves to an entry also reachable through
/// the primary map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Lexicon {
    pub(crate) entries: HashMap<String, DictEntry>,
    pub(crate) traditional: HashMap<String, String>,
}

impl Lexicon {
    /// Look up an entry by simplified form.
    pub fn get(&self, simplified: &str) -> Option<&DictEntry> {
        self.entries.get(simplified)
    }

    /// Look up an entry by traditional form.
    pub fn get_traditional(&self, traditional: &str) -> Option<&DictEntry> {
        self.traditional
            .get(traditional)
            .and_then(|simplified| self.entries.get(simplified))
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a CC-CEDICT source file into a [`Lexicon`].
///
/// `#` lines are comments. A simplified form listed on several lines
/// (different readings or traditional pairs) keeps a single entry and
/// accumulates meanings; one [`MeaningEntry`] is appended per
/// slash-delimited gloss. After all lines are consumed, each entry's
/// meanings are re-sorted so the primary sense precedes variant
/// cross-references.
///
/// # Errors
/// A line that does not match the expected structure is a fatal
/// [`DictError::MalformedLine`]; malformed dictionary data is not
/// recoverable at this layer.
pub fn parse(path: &Path) -> Result<Lexicon> {
    info!("Loading CC-CEDICT source: {}", path.display());
    let source = fs::read_to_string(path)?;

    let mut lexicon = Lexicon::default();
    for (idx, line) in source.lines().enumerate() {
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let caps = line_regex()
            .captures(line)
            .ok_or_else(|| DictError::MalformedLine {
                line_number: idx + 1,
                line: line.to_string(),
            })?;
        let traditional = &caps[1];
        let simplified = &caps[2];
        let pinyin = &caps[3];
        let glosses = &caps[4];

        // Register the traditional back-reference only when the entry is
        // first created; later lines for the same simplified form must not
        // overwrite it.
        if !lexicon.entries.contains_key(simplified) {
            lexicon
                .traditional
                .insert(traditional.to_string(), simplified.to_string());
        }
        let entry = lexicon
            .entries
            .entry(simplified.to_string())
            .or_insert_with(|| DictEntry::new(simplified.to_string(), traditional.to_string()));
        for gloss in glosses.split('/').filter(|g| !g.is_empty()) {
            entry.meanings.push(MeaningEntry {
                pinyin: pinyin.to_string(),
                gloss: gloss.to_string(),
            });
        }
    }

    // Re-sort meanings so the "main" sense comes first. Variant
    // cross-references sink below real definitions; the sort is stable, so
    // equal-rank meanings keep their source order.
    for entry in lexicon.entries.values_mut() {
        entry.meanings.sort_by_key(|m| meaning_rank(&m.gloss));
    }

    debug!("CC-CEDICT parsed: {} entries", lexicon.len());
    Ok(lexicon)
}

/// Sort rank of a gloss: plain definitions first, then `variant`,
/// `old variant`, `archaic variant` notations in that order.
fn meaning_rank(gloss: &str) -> u8 {
    if gloss.starts_with("archaic variant") {
        3
    } else if gloss.starts_with("old variant") {
        2
    } else if gloss.starts_with("variant") {
        1
    } else {
        0
    }
}
