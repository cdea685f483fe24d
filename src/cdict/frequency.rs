//! Frequency table parsing and entry annotation.
//!
//! Two independent annotators run against an already-built [`Lexicon`]:
//! the character table (cumulative distribution, converted to per-character
//! densities) and the word table (raw counts over a declared corpus total).
//! Keys missing from the store are skipped and counted, never inserted.

use std::fs;
use std::path::Path;

use log::info;

use super::error::{DictError, Result};
use super::lexicon::Lexicon;
use super::models::FrequencyDiagnostics;

/// Annotate `char_frequency` from a cumulative character frequency table.
///
/// Rows are whitespace-separated; column 1 is the character and column 3
/// the cumulative percentage, strictly increasing down the file. Each
/// row's density is the difference from the previous row, so the column
/// being cumulative is what makes the result a probability mass.
///
/// Returns the ranked character list (file order, which is
/// frequency-descending) and the miss diagnostics.
///
/// # Errors
/// A row with missing columns or an unparseable percentage is fatal.
pub fn annotate_chars(lexicon: &mut Lexicon, path: &Path) -> Result<(Vec<String>, FrequencyDiagnostics)> {
    info!("Loading character frequencies: {}", path.display());
    let source = fs::read_to_string(path)?;

    let mut ranked = Vec::new();
    let mut diagnostics = FrequencyDiagnostics::default();
    let mut last_cdf = 0.0_f64;

    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = line.split_whitespace().collect();
        let (character, cumulative) = match (columns.get(1), columns.get(3)) {
            (Some(&c), Some(&pct)) => (c, pct),
            _ => {
                return Err(malformed_row("character", idx, line));
            }
        };
        let cdf = cumulative
            .parse::<f64>()
            .map_err(|_| malformed_row("character", idx, line))?
            / 100.0;
        let frequency = cdf - last_cdf;
        last_cdf = cdf;

        if let Some(entry) = lexicon.entries.get_mut(character) {
            entry.char_frequency = frequency;
            ranked.push(character.to_string());
        } else if lexicon.traditional.contains_key(character) {
            diagnostics.traditional_ignored += 1;
        } else {
            diagnostics.entries_missing += 1;
            diagnostics.mass_missing += frequency;
        }
    }

    if diagnostics.entries_missing > 0 {
        info!(
            "{} characters in frequency table but not in the dictionary (mass {:.6} lost)",
            diagnostics.entries_missing, diagnostics.mass_missing
        );
        info!(
            "{} traditional-only characters ignored for frequency",
            diagnostics.traditional_ignored
        );
    }
    Ok((ranked, diagnostics))
}

/// Annotate `word_frequency` from a count-annotated word table.
///
/// The first line declares the total corpus token count as `"count":<N>`
/// (commas and quoting around the number are tolerated); the first three
/// lines are header/metadata. Data rows are `word,count,...` and each
/// word's density is its count over the total.
///
/// # Errors
/// A missing or unparseable total count, or a malformed data row, is fatal.
pub fn annotate_words(lexicon: &mut Lexicon, path: &Path) -> Result<FrequencyDiagnostics> {
    info!("Loading word frequencies: {}", path.display());
    let source = fs::read_to_string(path)?;

    let mut diagnostics = FrequencyDiagnostics::default();
    let mut total_count = 0_u64;

    for (idx, line) in source.lines().enumerate() {
        if idx == 0 {
            total_count = parse_total_count(line)?;
        } else if idx > 2 {
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split(',');
            let (word, count) = match (columns.next(), columns.next()) {
                (Some(w), Some(c)) => (w.trim(), c.trim()),
                _ => return Err(malformed_row("word", idx, line)),
            };
            let count = count
                .parse::<f64>()
                .map_err(|_| malformed_row("word", idx, line))?;
            let frequency = count / total_count as f64;

            if let Some(entry) = lexicon.entries.get_mut(word) {
                entry.word_frequency = frequency;
            } else {
                diagnostics.entries_missing += 1;
                diagnostics.mass_missing += frequency;
            }
        }
    }

    if diagnostics.entries_missing > 0 {
        info!(
            "{} words in frequency table but not in the dictionary (mass {:.6} lost)",
            diagnostics.entries_missing, diagnostics.mass_missing
        );
    }
    Ok(diagnostics)
}

/// Extract the total token count from the word table's first line.
///
/// Accepts both `"count":1234567` and `"count":"1,234,567"` shapes.
fn parse_total_count(line: &str) -> Result<u64> {
    let missing = || DictError::MissingTotalCount {
        line: line.to_string(),
    };
    let after_key = line.split("\"count\":").nth(1).ok_or_else(missing)?;
    let digits: String = after_key
        .trim_start_matches('"')
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();
    let total = digits.parse::<u64>().map_err(|_| missing())?;
    if total == 0 {
        return Err(missing());
    }
    Ok(total)
}

fn malformed_row(table: &'static str, idx: usize, line: &str) -> DictError {
    DictError::MalformedFrequencyRow {
        table,
        line_number: idx + 1,
        line: line.to_string(),
    }
}
