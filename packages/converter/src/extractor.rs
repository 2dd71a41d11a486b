//! Mapping of one entry element to one vocabulary record.

use scraper::ElementRef;

use crate::config::{
    CARD_CLASS, CARD_TAG, CHAPTER_ATTRIBUTE, CHAPTER_NUMBER_TAG, DIALOG_CLASS, DIALOG_TAG,
    ENGLISH_CLASS, FORM_TAG, INDONESIAN_CLASS, PINYIN_CLASS, PINYIN_TAG, SIMPLIFIED_ATTRIBUTE,
    TRADITIONAL_ATTRIBUTE, TRANSLATION_TAG,
};
use crate::error::Result;
use crate::html::{get_attribute, select_text, Query};
use crate::text::normalize_whitespace;
use crate::types::{Extraction, SkipReason, VocabularyRecord};

const CARD: Query<'static> = Query::with_class(CARD_TAG, CARD_CLASS);
const DIALOG: Query<'static> = Query::with_class(DIALOG_TAG, DIALOG_CLASS);
const SIMPLIFIED: Query<'static> = Query::with_attribute(FORM_TAG, SIMPLIFIED_ATTRIBUTE);
const TRADITIONAL: Query<'static> = Query::with_attribute(FORM_TAG, TRADITIONAL_ATTRIBUTE);
const PINYIN: Query<'static> = Query::with_class(PINYIN_TAG, PINYIN_CLASS);
const ENGLISH: Query<'static> = Query::with_class(TRANSLATION_TAG, ENGLISH_CLASS);
const INDONESIAN: Query<'static> = Query::with_class(TRANSLATION_TAG, INDONESIAN_CLASS);
const CHAPTER_NUMBER: Query<'static> = Query::tag(CHAPTER_NUMBER_TAG);

/// Trait for turning a matched entry element into a record.
///
/// `Ok(Extraction::Skipped(_))` is an expected structural mismatch and is not
/// counted; `Err(_)` marks the element as failed and the converter moves on.
pub trait RecordExtractor {
    /// Extract the record for `element`.
    ///
    /// # Arguments
    /// * `element` - Entry element carrying the chapter attribute
    /// * `index` - Zero-based position of the element among all matches
    fn extract(&self, element: ElementRef<'_>, index: usize) -> Result<Extraction>;
}

/// Extractor for the HSK card/dialog page layout.
///
/// Never returns an error: all missing optional fields default to the
/// empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct VocabularyExtractor;

impl RecordExtractor for VocabularyExtractor {
    fn extract(&self, element: ElementRef<'_>, _index: usize) -> Result<Extraction> {
        Ok(extract_vocabulary(element))
    }
}

/// Extract a record from an entry element.
///
/// # Returns
/// * `Extraction::Found` with all seven fields normalized
/// * `Extraction::Skipped` if the card or the dialog is missing
pub fn extract_vocabulary(element: ElementRef<'_>) -> Extraction {
    let chapter = get_attribute(element, CHAPTER_ATTRIBUTE)
        .unwrap_or_default()
        .trim()
        .to_string();

    let Some(card) = CARD.find_first(element) else {
        return Extraction::Skipped(SkipReason::MissingCard);
    };

    let simplified = select_text(card, &SIMPLIFIED);
    let traditional = select_text(card, &TRADITIONAL);

    let Some(dialog) = DIALOG.find_first(element) else {
        return Extraction::Skipped(SkipReason::MissingDialog);
    };

    let pinyin = select_text(dialog, &PINYIN);
    let english = select_text(dialog, &ENGLISH);
    let indonesian = select_text(dialog, &INDONESIAN);

    // An empty <small> falls back as well
    let mut chapter_number = select_text(dialog, &CHAPTER_NUMBER);
    if chapter_number.is_empty() {
        chapter_number.clone_from(&chapter);
    }

    Extraction::Found(VocabularyRecord {
        chapter: normalize_whitespace(&chapter),
        chapter_number: normalize_whitespace(&chapter_number),
        simplified: normalize_whitespace(&simplified),
        traditional: normalize_whitespace(&traditional),
        pinyin: normalize_whitespace(&pinyin),
        english: normalize_whitespace(&english),
        indonesian: normalize_whitespace(&indonesian),
    })
}
