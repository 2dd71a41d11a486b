//! Configuration constants and validation functions for the converter.
//!
//! The constants describe the markup layout of an HSK vocabulary page:
//!
//! ```html
//! <li data-chapter="1">
//!   <h4 class="hsk-card">
//!     <span data-simplified>你好</span><span data-traditional>你好</span>
//!   </h4>
//!   <div class="hsk-dialog">
//!     <strong class="pinyin">nǐ hǎo</strong>
//!     <p class="en">hello</p>
//!     <p class="id">halo</p>
//!     <small>1</small>
//!   </div>
//! </li>
//! ```

use crate::error::{ConverterError, Result};

/// Tag of the elements that hold one vocabulary entry each.
pub const ENTRY_TAG: &str = "li";

/// Attribute whose presence marks an entry element and carries its chapter.
pub const CHAPTER_ATTRIBUTE: &str = "data-chapter";

/// Tag and class of the card holding the written forms.
pub const CARD_TAG: &str = "h4";
pub const CARD_CLASS: &str = "hsk-card";

/// Tag and class of the dialog holding pronunciation and translations.
pub const DIALOG_TAG: &str = "div";
pub const DIALOG_CLASS: &str = "hsk-dialog";

/// Written-form fields inside the card, selected by attribute presence.
pub const FORM_TAG: &str = "span";
pub const SIMPLIFIED_ATTRIBUTE: &str = "data-simplified";
pub const TRADITIONAL_ATTRIBUTE: &str = "data-traditional";

/// Pinyin field inside the dialog.
pub const PINYIN_TAG: &str = "strong";
pub const PINYIN_CLASS: &str = "pinyin";

/// Translation fields inside the dialog.
pub const TRANSLATION_TAG: &str = "p";
pub const ENGLISH_CLASS: &str = "en";
pub const INDONESIAN_CLASS: &str = "id";

/// Optional chapter-number override inside the dialog.
pub const CHAPTER_NUMBER_TAG: &str = "small";

/// Default input document.
pub const DEFAULT_INPUT_PATH: &str = "hsk_vocabulary.html";

/// Default output file.
pub const DEFAULT_OUTPUT_PATH: &str = "hsk6_vocabulary.json";

/// Default number of elements per progress report.
///
/// Sized for pages with 20k+ entries so progress is printed roughly ten times.
pub const DEFAULT_BATCH_SIZE: usize = 2000;

/// Validate the batch size.
///
/// # Examples
/// ```
/// use hsk_converter::config::validate_batch_size;
///
/// assert!(validate_batch_size(1).is_ok());
/// assert!(validate_batch_size(0).is_err());
/// ```
pub fn validate_batch_size(batch_size: usize) -> Result<()> {
    if batch_size == 0 {
        Err(ConverterError::InvalidBatchSize(batch_size))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_batch_size_valid() {
        assert!(validate_batch_size(1).is_ok());
        assert!(validate_batch_size(DEFAULT_BATCH_SIZE).is_ok());
        assert!(validate_batch_size(usize::MAX).is_ok());
    }

    #[test]
    fn test_validate_batch_size_zero() {
        assert!(matches!(
            validate_batch_size(0),
            Err(ConverterError::InvalidBatchSize(0))
        ));
    }
}
