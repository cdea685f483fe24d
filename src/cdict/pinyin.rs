//! Conversion of tone-numbered pinyin to diacritic pinyin.

use super::error::{DictError, Result};

/// Syllables with no phonetic transcription, passed through untouched.
/// `xx5` marks untranscribable syllables; `m2`/`m4` are vowel-less
/// interjection readings.
const PLACEHOLDERS: &[&str] = &["xx5", "m2", "m4"];

/// Diacritic carriers in standard pinyin placement priority. The mark goes
/// on the first of these found in the syllable, scanned in this order, not
/// in lexical position order.
const VOWEL_PRIORITY: &[char] = &[
    'a', 'A', 'o', 'O', 'e', 'E', 'i', 'I', 'u', 'U', 'ü', 'Ü',
];

/// The combining mark for a tone digit. Neutral tone (5) has no mark.
fn tone_mark(tone: char) -> Option<char> {
    match tone {
        '1' => Some('\u{0304}'), // macron
        '2' => Some('\u{0301}'), // acute
        '3' => Some('\u{030C}'), // caron
        '4' => Some('\u{0300}'), // grave
        _ => None,
    }
}

/// Convert a whitespace-separated tone-numbered pinyin string to its
/// diacritic form, e.g. `"ni3 hao3"` to `"nǐ hǎo"`.
///
/// Handles the CC-CEDICT conventions: `u:` is the umlaut `ü`, a standalone
/// `r5` is the retroflex suffix merged onto the previous syllable, and the
/// placeholder tokens are left alone.
///
/// # Errors
/// Returns [`DictError::MissingToneVowel`] if a tone-numbered syllable
/// contains no vowel; placing the mark anywhere else would silently corrupt
/// the transcription.
pub fn to_diacritics(pinyin: &str) -> Result<String> {
    let mut result: Vec<String> = Vec::new();
    for syllable in pinyin.split_whitespace() {
        if PLACEHOLDERS.contains(&syllable) {
            result.push(syllable.to_string());
            continue;
        }
        // Retroflex r is spelled onto the previous syllable, not emitted
        // as a token of its own.
        if syllable == "r5" {
            match result.last_mut() {
                Some(prev) => prev.push('r'),
                None => result.push("r".to_string()),
            }
            continue;
        }
        let syllable = syllable.replace("u:", "ü");
        result.push(convert_syllable(&syllable)?);
    }
    Ok(result.join(" "))
}

/// Apply the tone diacritic to a single syllable with `u:` already
/// normalized away.
fn convert_syllable(syllable: &str) -> Result<String> {
    let chars: Vec<char> = syllable.chars().collect();
    let Some(&last) = chars.last() else {
        return Ok(String::new());
    };
    if !last.is_ascii_digit() {
        return Ok(syllable.to_string());
    }

    let body = &chars[..chars.len() - 1];
    let nucleus = find_nucleus(body).ok_or_else(|| DictError::MissingToneVowel {
        syllable: syllable.to_string(),
    })?;

    let mut converted = String::with_capacity(syllable.len() + 2);
    converted.extend(&body[..=nucleus]);
    if let Some(mark) = tone_mark(last) {
        converted.push(mark);
    }
    converted.extend(&body[nucleus + 1..]);
    Ok(converted)
}

/// Index of the vowel that carries the diacritic.
///
/// In the `iu` digraph the mark goes on the `u`; otherwise the first vowel
/// found by [`VOWEL_PRIORITY`] order wins.
fn find_nucleus(body: &[char]) -> Option<usize> {
    if let Some(i) = body.windows(2).position(|w| w == ['i', 'u']) {
        return Some(i + 1);
    }
    for &vowel in VOWEL_PRIORITY {
        if let Some(i) = body.iter().position(|&c| c == vowel) {
            return Some(i);
        }
    }
    None
}
