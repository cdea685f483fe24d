use cedict_reader::Dictionary;
use std::env;

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <data-dir> [--lookup <WORD>]", args[0]);
        std::process::exit(1);
    }

    let data_dir = &args[1];
    let mut lookup: Option<&str> = None;
    // Parse --lookup argument
    if let Some(lookup_idx) = args.iter().position(|arg| arg == "--lookup") {
        if let Some(word) = args.get(lookup_idx + 1) {
            lookup = Some(word.as_str());
        } else {
            eprintln!("ERROR: --lookup flag requires an argument.");
            std::process::exit(1);
        }
    }

    println!("Loading dictionary from: {}", data_dir);
    println!("{}", "=".repeat(60));

    let dict = match Dictionary::open(data_dir) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("\nERROR: Failed to load dictionary");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    println!("\n{}", "=".repeat(60));
    println!("SUCCESS! Load completed.");
    println!("{}", "=".repeat(60));

    println!("\nStatistics:");
    println!("  Total entries: {}", dict.len());
    println!("  Ranked characters: {}", dict.chars_by_frequency().len());
    println!("  HSK character levels: {}", dict.num_char_levels());
    println!("  HSK word levels: {}", dict.num_word_levels());

    let diag = dict.diagnostics();
    println!("\nLoad diagnostics:");
    println!(
        "  Characters without entries: {} (mass {:.6} lost)",
        diag.char_frequency.entries_missing, diag.char_frequency.mass_missing
    );
    println!(
        "  Traditional-only characters ignored: {}",
        diag.char_frequency.traditional_ignored
    );
    println!(
        "  Words without entries: {} (mass {:.6} lost)",
        diag.word_frequency.entries_missing, diag.word_frequency.mass_missing
    );
    println!("  HSK words skipped: {}", diag.hsk_words_skipped);

    println!("\nMost frequent characters (first 10):");
    for (i, c) in dict.chars_by_frequency().iter().take(10).enumerate() {
        println!("  {}. {}", i + 1, c);
    }

    if let Some(word) = lookup {
        println!("\nLookup: {}", word);
        match dict.lookup(word) {
            Some(entry) => {
                println!("  Traditional: {}", entry.traditional);
                if let Some(level) = entry.char_level {
                    println!("  HSK character level: {}", level);
                }
                if let Some(level) = entry.word_level {
                    println!("  HSK word level: {}", level);
                }
                println!("  Character frequency: {:.6}", entry.char_frequency);
                println!("  Word frequency: {:.6}", entry.word_frequency);
                for meaning in &entry.meanings {
                    let pinyin = meaning
                        .pinyin_diacritics()
                        .unwrap_or_else(|_| meaning.pinyin.clone());
                    println!("  [{}] {}", pinyin, meaning.gloss);
                }
            }
            None => println!("  No entry found."),
        }
    }
}
