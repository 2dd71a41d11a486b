//! HSK Converter - Extract vocabulary cards from an HTML page into JSON.
//!
//! Reads an HSK vocabulary page, walks every `<li data-chapter>` entry,
//! pulls the written forms, pinyin and translations out of its card and
//! dialog, and writes all records as one pretty-printed JSON array.
//!
//! # Example
//!
//! ```
//! use hsk_converter::converter::{convert_document, TracingObserver};
//!
//! let html = r#"<ul><li data-chapter="1">
//!     <h4 class="hsk-card"><span data-simplified>你好</span><span data-traditional>你好</span></h4>
//!     <div class="hsk-dialog">
//!         <strong class="pinyin">nǐ hǎo</strong>
//!         <p class="en">hello</p>
//!         <p class="id">halo</p>
//!     </div>
//! </li></ul>"#;
//!
//! let (records, _) = convert_document(html, 2000, &mut TracingObserver).unwrap();
//! assert_eq!(records[0].pinyin, "nǐ hǎo");
//! assert_eq!(records[0].chapter_number, "1");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Markup layout constants, defaults and validation
//! - [`types`]: Records, extraction outcomes and run counters
//! - [`error`]: Error types and Result alias
//! - [`html`]: Typed queries over the parsed document tree
//! - [`text`]: Whitespace normalization
//! - [`extractor`]: Entry element to record mapping
//! - [`writer`]: JSON output
//! - [`converter`]: Parse, extract and emit driver
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod extractor;
pub mod html;
pub mod text;
pub mod types;
pub mod writer;

// Re-export main functions
pub use converter::{convert, convert_document};

// Re-export commonly used items
pub use config::validate_batch_size;
pub use error::{ConverterError, Result};
pub use types::{ConversionSummary, Extraction, SkipReason, VocabularyRecord};
