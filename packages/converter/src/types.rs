//! Core data types for the converter.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One vocabulary entry as written to the output file.
///
/// Field order is the serialization order. Every field defaults to the
/// empty string when its source element is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    /// Chapter identifier taken from the entry's `data-chapter` attribute.
    pub chapter: String,

    /// Chapter number shown in the dialog, or `chapter` when absent.
    pub chapter_number: String,

    /// Simplified Chinese form.
    pub simplified: String,

    /// Traditional Chinese form.
    pub traditional: String,

    /// Pinyin transcription.
    pub pinyin: String,

    /// English translation.
    pub english: String,

    /// Indonesian translation.
    pub indonesian: String,
}

/// Why an entry element produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `h4.hsk-card` inside the entry.
    MissingCard,

    /// No `div.hsk-dialog` inside the entry.
    MissingDialog,
}

impl SkipReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingCard => "missing card",
            Self::MissingDialog => "missing dialog",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of extracting a single entry element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The entry had the expected structure.
    Found(VocabularyRecord),

    /// The entry lacks required structure and is silently dropped.
    Skipped(SkipReason),
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of entry elements found in the document.
    pub total: usize,

    /// Entries that produced a record.
    pub succeeded: usize,

    /// Entries whose extraction returned an error.
    pub failed: usize,

    /// Entries dropped for missing structure.
    ///
    /// Not part of `succeeded` or `failed`.
    pub skipped: usize,

    /// Where the records were written, once saved.
    pub output_path: Option<PathBuf>,
}

impl ConversionSummary {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }
}
