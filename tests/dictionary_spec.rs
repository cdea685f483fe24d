use cedict_reader::{pinyin, DictError, Dictionary, SourcePaths};
use std::collections::HashSet;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("tests");
    p.push("fixtures");
    p.push(name);
    p
}

fn fixture_paths() -> SourcePaths {
    SourcePaths {
        cedict: fixture_path("cedict_ts.u8"),
        char_frequencies: fixture_path("characters_by_frequency.txt"),
        word_frequencies: fixture_path("words_by_frequency.csv"),
        hsk_chars: fixture_path("hsk_chars.txt"),
        hsk_words: fixture_path("hsk_words.txt"),
    }
}

fn load_fixture() -> Dictionary {
    Dictionary::load(&fixture_paths()).expect("fixture dictionary should load")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// --- Pinyin diacritic conversion ---

#[test]
fn tone_digits_map_to_diacritics() {
    let converted = pinyin::to_diacritics("ma1 ma2 ma3 ma4 ma5").unwrap();
    assert_eq!(converted, "ma\u{304} ma\u{301} ma\u{30c} ma\u{300} ma");
}

#[test]
fn vowel_priority_prefers_a_over_o() {
    assert_eq!(pinyin::to_diacritics("hao3").unwrap(), "ha\u{30c}o");
    // "o" wins over "u" by priority, even though "u" comes first.
    assert_eq!(pinyin::to_diacritics("guo2").unwrap(), "guo\u{301}");
}

#[test]
fn iu_digraph_marks_the_u() {
    assert_eq!(pinyin::to_diacritics("liu2").unwrap(), "liu\u{301}");
}

#[test]
fn colon_digraph_becomes_umlaut() {
    assert_eq!(pinyin::to_diacritics("lu:4").unwrap(), "l\u{fc}\u{300}");
    assert_eq!(pinyin::to_diacritics("nu:3").unwrap(), "n\u{fc}\u{30c}");
}

#[test]
fn retroflex_suffix_merges_onto_previous_syllable() {
    assert_eq!(pinyin::to_diacritics("hua4 r5").unwrap(), "hua\u{300}r");
    // A leading r5 has nothing to merge onto and stands alone.
    assert_eq!(pinyin::to_diacritics("r5").unwrap(), "r");
}

#[test]
fn placeholder_syllables_pass_through() {
    assert_eq!(pinyin::to_diacritics("xx5 m2 m4").unwrap(), "xx5 m2 m4");
}

#[test]
fn untoned_syllables_are_left_alone() {
    assert_eq!(pinyin::to_diacritics("ni hao").unwrap(), "ni hao");
}

#[test]
fn toned_syllable_without_vowel_is_an_error() {
    let result = pinyin::to_diacritics("xyz3");
    assert!(matches!(
        result,
        Err(DictError::MissingToneVowel { syllable }) if syllable == "xyz3"
    ));
}

// --- Lexicon store ---

#[test]
fn lookup_by_simplified_and_traditional() {
    let dict = load_fixture();
    assert_eq!(dict.len(), 10);

    let entry = dict.lookup("\u{5988}").expect("妈 should exist"); // 妈
    assert_eq!(entry.traditional, "\u{5abd}"); // 媽
    assert_eq!(entry.meanings[0].gloss, "mother");
    assert_eq!(entry.meanings[0].pinyin, "ma1");

    let via_trad = dict.lookup_traditional("\u{5abd}").expect("媽 should resolve");
    assert_eq!(via_trad.simplified, "\u{5988}");

    assert!(dict.lookup("nonexistent-string").is_none());
    assert!(dict.lookup_traditional("nonexistent-string").is_none());
}

#[test]
fn duplicate_simplified_lines_merge_into_one_entry() {
    let dict = load_fixture();
    let hao = dict.lookup("\u{597d}").expect("好 should exist");
    let glosses: Vec<&str> = hao.meanings.iter().map(|m| m.gloss.as_str()).collect();
    assert_eq!(glosses, ["good", "well", "to be fond of"]);
    let pinyins: Vec<&str> = hao.meanings.iter().map(|m| m.pinyin.as_str()).collect();
    assert_eq!(pinyins, ["hao3", "hao3", "hao4"]);
    assert_eq!(hao.traditional, "\u{597d}");
}

#[test]
fn variant_meanings_sort_after_real_definitions() {
    let dict = load_fixture();
    let zou = dict.lookup("\u{8d70}").expect("走 should exist");
    let glosses: Vec<&str> = zou.meanings.iter().map(|m| m.gloss.as_str()).collect();
    assert_eq!(
        glosses,
        [
            "to walk",
            "variant of \u{8d71}[zou3]",
            "archaic variant of \u{594f}[zou4]",
        ]
    );
}

#[test]
fn malformed_lexicon_line_aborts_the_load() {
    let mut paths = fixture_paths();
    paths.cedict = fixture_path("cedict_bad.u8");
    let result = Dictionary::load(&paths);
    assert!(matches!(
        result,
        Err(DictError::MalformedLine { line_number: 3, .. })
    ));
}

// --- Frequency annotation ---

#[test]
fn character_densities_come_from_cumulative_differences() {
    let dict = load_fixture();
    assert!(approx(dict.lookup("\u{597d}").unwrap().char_frequency, 0.10));
    assert!(approx(dict.lookup("\u{9a6c}").unwrap().char_frequency, 0.05));
    assert!(approx(dict.lookup("\u{5988}").unwrap().char_frequency, 0.02));
    assert_eq!(
        dict.chars_by_frequency(),
        ["\u{597d}", "\u{9a6c}", "\u{5988}"]
    );
}

#[test]
fn character_frequency_misses_are_counted_not_fatal() {
    let dict = load_fixture();
    let diag = dict.diagnostics().char_frequency;
    assert_eq!(diag.entries_missing, 1);
    assert!(approx(diag.mass_missing, 0.03));
    assert_eq!(diag.traditional_ignored, 1);
}

#[test]
fn character_mass_is_conserved() {
    let dict = load_fixture();
    let total: f64 = dict.entries().map(|e| e.char_frequency).sum();
    // Last cumulative row is 22%, minus 3% lost to the unknown character
    // and 2% on the traditional-only row.
    assert!(approx(total, 0.17));
    assert!(total <= 1.0 + 1e-9);
}

#[test]
fn word_densities_are_count_over_total() {
    let dict = load_fixture();
    assert!(approx(dict.lookup("\u{4f60}\u{597d}").unwrap().word_frequency, 0.05));
    assert!(approx(dict.lookup("\u{597d}").unwrap().word_frequency, 0.03));
    assert!(approx(dict.lookup("\u{82b1}\u{513f}").unwrap().word_frequency, 0.002));

    let diag = dict.diagnostics().word_frequency;
    assert_eq!(diag.entries_missing, 1);
    assert!(approx(diag.mass_missing, 0.001));
}

#[test]
fn malformed_frequency_row_aborts_the_load() {
    let mut paths = fixture_paths();
    paths.char_frequencies = fixture_path("characters_bad.txt");
    let result = Dictionary::load(&paths);
    assert!(matches!(
        result,
        Err(DictError::MalformedFrequencyRow {
            table: "character",
            line_number: 2,
            ..
        })
    ));
}

// --- HSK levels ---

#[test]
fn character_levels_follow_line_position() {
    let dict = load_fixture();
    assert_eq!(dict.num_char_levels(), 2);
    assert_eq!(dict.level_chars(1).unwrap(), ["\u{597d}", "\u{4f60}"]);
    assert_eq!(dict.level_chars(2).unwrap(), ["\u{9a6c}", "\u{5988}"]);
    assert!(dict.level_chars(0).is_none());
    assert!(dict.level_chars(3).is_none());

    for level in 1..=dict.num_char_levels() {
        for c in dict.level_chars(level).unwrap() {
            let entry = dict.lookup(c).expect("level characters must have entries");
            assert_eq!(entry.char_level, Some(level));
        }
    }
}

#[test]
fn word_levels_keep_only_resolving_words() {
    let dict = load_fixture();
    assert_eq!(dict.num_word_levels(), 2);
    assert_eq!(dict.level_words(1).unwrap(), ["\u{4f60}\u{597d}", "\u{597d}"]);
    assert_eq!(dict.level_words(2).unwrap(), ["\u{5988}"]);
    assert_eq!(dict.diagnostics().hsk_words_skipped, 1);

    assert_eq!(dict.lookup("\u{4f60}\u{597d}").unwrap().word_level, Some(1));
    assert_eq!(dict.lookup("\u{5988}").unwrap().word_level, Some(2));
    assert_eq!(dict.lookup("\u{8d70}").unwrap().word_level, None);
}

#[test]
fn all_unresolved_word_block_still_occupies_its_level() {
    let mut paths = fixture_paths();
    paths.hsk_words = fixture_path("hsk_words_unresolved.txt");
    let dict = Dictionary::load(&paths).expect("fixture dictionary should load");

    // The level-1 block resolves nothing, but its boundary still counts:
    // 妈 sits in the second block and must stay level 2.
    assert_eq!(dict.lookup("\u{5988}").unwrap().word_level, Some(2));
    assert_eq!(dict.num_word_levels(), 2);
    assert!(dict.level_words(1).unwrap().is_empty());
    assert_eq!(dict.level_words(2).unwrap(), ["\u{5988}"]);
    assert_eq!(dict.diagnostics().hsk_words_skipped, 1);
}

#[test]
fn unknown_level_character_aborts_the_load() {
    let mut paths = fixture_paths();
    paths.hsk_chars = fixture_path("hsk_chars_bad.txt");
    let result = Dictionary::load(&paths);
    assert!(matches!(
        result,
        Err(DictError::UnknownLevelCharacter { character, level: 1 }) if character == "\u{7f3a}"
    ));
}

// --- Derived indices and queries ---

#[test]
fn reverse_index_orders_words_by_frequency() {
    let dict = load_fixture();
    assert_eq!(
        dict.words_containing('\u{597d}'),
        ["\u{4f60}\u{597d}", "\u{597d}"]
    );
    assert_eq!(dict.words_containing('\u{513f}'), ["\u{82b1}\u{513f}"]);
    assert!(dict.words_containing('\u{9f99}').is_empty());
}

#[test]
fn coverage_is_a_pure_query_over_known_sets() {
    let dict = load_fixture();
    let known_chars: HashSet<String> = ["\u{597d}", "\u{4f60}", "\u{9f49}"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let known_words: HashSet<String> =
        [String::from("\u{4f60}\u{597d}")].into_iter().collect();

    let report = dict.coverage(&known_chars, &known_words);
    assert_eq!(report.known_characters, 2);
    assert!(approx(report.character_mass, 0.10));
    // 你好 as a known word, plus 好 read as a single-character word.
    assert!(approx(report.word_mass, 0.08));
}

#[test]
fn loading_twice_yields_identical_dictionaries() {
    let first = load_fixture();
    let second = load_fixture();

    assert_eq!(first.len(), second.len());
    assert_eq!(first.chars_by_frequency(), second.chars_by_frequency());
    for level in 1..=first.num_char_levels() {
        assert_eq!(first.level_chars(level), second.level_chars(level));
    }
    for level in 1..=first.num_word_levels() {
        assert_eq!(first.level_words(level), second.level_words(level));
    }
    for entry in first.entries() {
        assert_eq!(Some(entry), second.lookup(&entry.simplified));
    }
}
