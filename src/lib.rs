//! # cedict-reader
//!
//! A reader for CC-CEDICT-format Chinese dictionaries. Fuses the raw
//! dictionary source with character/word frequency tables and HSK
//! proficiency lists into one immutable, queryable in-memory store.
pub mod cdict;

// Re-export the main types for convenience
pub use cdict::{
    error::{DictError, Result},
    models::{
        CoverageReport, DictEntry, FrequencyDiagnostics, LoadDiagnostics, MeaningEntry,
        SourcePaths,
    },
    pinyin, Dictionary,
};
