//! Main converter service that ties parsing, extraction and output together.

use std::fs;
use std::path::Path;

use scraper::Html;

use crate::config::{validate_batch_size, CHAPTER_ATTRIBUTE, ENTRY_TAG};
use crate::error::{ConverterError, Result};
use crate::extractor::{RecordExtractor, VocabularyExtractor};
use crate::html::{find_all, Query};
use crate::types::{ConversionSummary, Extraction, VocabularyRecord};
use crate::writer::save_json;

const ENTRY: Query<'static> = Query::with_attribute(ENTRY_TAG, CHAPTER_ATTRIBUTE);

/// Progress notifications emitted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertEvent<'a> {
    /// About to read the input document.
    Started { input: &'a Path },

    /// The document was parsed and `total` entry elements were found.
    Found { total: usize },

    /// A batch finished; `processed` entries of `total` have been handled.
    BatchDone { processed: usize, total: usize },

    /// The output was written.
    Finished { summary: &'a ConversionSummary },
}

/// Receiver for [`ConvertEvent`]s.
pub trait ProgressObserver {
    fn on_event(&mut self, event: ConvertEvent<'_>);
}

/// Observer that reports progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ProgressObserver for TracingObserver {
    fn on_event(&mut self, event: ConvertEvent<'_>) {
        match event {
            ConvertEvent::Started { input } => {
                tracing::info!(input = %input.display(), "Processing large file");
            }
            ConvertEvent::Found { total } => {
                tracing::info!(total, "Found vocabulary elements");
            }
            ConvertEvent::BatchDone { processed, total } => {
                tracing::debug!(processed, total, "Processed batch");
            }
            ConvertEvent::Finished { summary } => {
                tracing::info!(
                    succeeded = summary.succeeded,
                    failed = summary.failed,
                    skipped = summary.skipped,
                    "Done"
                );
            }
        }
    }
}

/// Convert an HSK vocabulary page into a JSON file.
///
/// # Arguments
/// * `input` - HTML document to read
/// * `output` - JSON file to create or overwrite
/// * `batch_size` - Number of elements per progress report (must be positive)
///
/// # Returns
/// Run counters; `output_path` is set to `output`
pub fn convert(input: &Path, output: &Path, batch_size: usize) -> Result<ConversionSummary> {
    convert_with(
        &VocabularyExtractor,
        input,
        output,
        batch_size,
        &mut TracingObserver,
    )
}

/// Convert a vocabulary page with a custom extractor and observer.
///
/// An unreadable input fails the run before anything is written.
pub fn convert_with<E, O>(
    extractor: &E,
    input: &Path,
    output: &Path,
    batch_size: usize,
    observer: &mut O,
) -> Result<ConversionSummary>
where
    E: RecordExtractor + ?Sized,
    O: ProgressObserver + ?Sized,
{
    validate_batch_size(batch_size)?;

    observer.on_event(ConvertEvent::Started { input });

    let html = fs::read_to_string(input).map_err(|source| ConverterError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let (records, mut summary) = convert_document_with(extractor, &html, batch_size, observer)?;
    drop(html);

    summary.output_path = Some(save_json(&records, output)?);

    observer.on_event(ConvertEvent::Finished { summary: &summary });

    Ok(summary)
}

/// Extract records from an in-memory HTML document.
///
/// # Examples
/// ```
/// use hsk_converter::converter::{convert_document, TracingObserver};
///
/// let html = r#"<ul><li data-chapter="1">
///     <h4 class="hsk-card"><span data-simplified>你好</span></h4>
///     <div class="hsk-dialog"><p class="en">hello</p></div>
/// </li></ul>"#;
///
/// let (records, summary) = convert_document(html, 1000, &mut TracingObserver).unwrap();
/// assert_eq!(records[0].simplified, "你好");
/// assert_eq!(summary.succeeded, 1);
/// ```
pub fn convert_document<O>(
    html: &str,
    batch_size: usize,
    observer: &mut O,
) -> Result<(Vec<VocabularyRecord>, ConversionSummary)>
where
    O: ProgressObserver + ?Sized,
{
    convert_document_with(&VocabularyExtractor, html, batch_size, observer)
}

/// Extract records from an in-memory HTML document with a custom extractor.
///
/// Entries are handled in consecutive batches of `batch_size`; batching only
/// controls how often [`ConvertEvent::BatchDone`] fires.
pub fn convert_document_with<E, O>(
    extractor: &E,
    html: &str,
    batch_size: usize,
    observer: &mut O,
) -> Result<(Vec<VocabularyRecord>, ConversionSummary)>
where
    E: RecordExtractor + ?Sized,
    O: ProgressObserver + ?Sized,
{
    validate_batch_size(batch_size)?;

    let document = Html::parse_document(html);
    let entries = find_all(&document, &ENTRY);
    let total = entries.len();
    observer.on_event(ConvertEvent::Found { total });

    let mut summary = ConversionSummary::new(total);
    let mut records = Vec::with_capacity(total);

    for (batch_index, batch) in entries.chunks(batch_size).enumerate() {
        let offset = batch_index * batch_size;

        for (position, element) in batch.iter().enumerate() {
            let index = offset + position;
            match extractor.extract(*element, index) {
                Ok(Extraction::Found(record)) => {
                    records.push(record);
                    summary.succeeded += 1;
                }
                Ok(Extraction::Skipped(reason)) => {
                    tracing::debug!(index, %reason, "Skipping vocabulary element");
                    summary.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(index, error = %e, "Failed to extract vocabulary element");
                    summary.failed += 1;
                }
            }
        }

        observer.on_event(ConvertEvent::BatchDone {
            processed: offset + batch.len(),
            total,
        });
    }

    Ok((records, summary))
}
