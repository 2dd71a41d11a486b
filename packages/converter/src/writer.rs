//! JSON writer for vocabulary records.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ConverterError, Result};
use crate::types::VocabularyRecord;

/// Serialize records as a pretty-printed JSON array.
///
/// Uses two-space indentation and keeps non-ASCII text literal.
///
/// # Examples
/// ```
/// use hsk_converter::writer::generate_json;
///
/// assert_eq!(generate_json(&[]).unwrap(), "[]");
/// ```
pub fn generate_json(records: &[VocabularyRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Save records to `output_path`, replacing any existing file.
///
/// The JSON is written to a hidden temp file next to the target, synced,
/// then renamed over it, so readers never see a half-written file.
///
/// # Returns
/// The path the records were written to
pub fn save_json(records: &[VocabularyRecord], output_path: &Path) -> Result<PathBuf> {
    let write_error = |source: std::io::Error| ConverterError::WriteOutput {
        path: output_path.to_path_buf(),
        source,
    };

    let file_name = output_path.file_name().ok_or_else(|| {
        write_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;

    let mut temp_name = std::ffi::OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".tmp");
    let temp_file = output_path.with_file_name(temp_name);

    let content = generate_json(records)?;

    let written = File::create(&temp_file).and_then(|mut file| {
        file.write_all(content.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_file);
        return Err(write_error(e));
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path).map_err(write_error)?;
    }

    fs::rename(&temp_file, output_path).map_err(|e| {
        let _ = fs::remove_file(&temp_file);
        write_error(e)
    })?;

    tracing::debug!(
        path = %output_path.display(),
        records = records.len(),
        bytes = content.len(),
        "Wrote vocabulary JSON"
    );

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_record() -> VocabularyRecord {
        VocabularyRecord {
            chapter: "1".to_string(),
            chapter_number: "1".to_string(),
            simplified: "爱".to_string(),
            traditional: "愛".to_string(),
            pinyin: "ài".to_string(),
            english: "love".to_string(),
            indonesian: "cinta".to_string(),
        }
    }

    #[test]
    fn test_generate_json_layout() {
        let json = generate_json(&[sample_record()]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"chapter\": \"1\",\n    \"chapter_number\": \"1\",\n    \"simplified\": \"爱\",\n    \"traditional\": \"愛\",\n    \"pinyin\": \"ài\",\n    \"english\": \"love\",\n    \"indonesian\": \"cinta\"\n  }\n]"
        );
    }

    #[test]
    fn test_generate_json_keeps_non_ascii_literal() {
        let json = generate_json(&[sample_record()]).unwrap();
        assert!(json.contains("愛"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_save_json_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content that is longer than the new file").unwrap();

        let written = save_json(&[], &path).unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_json_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vocab.json");
        save_json(&[sample_record()], &path).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("vocab.json")]);

        let back: Vec<VocabularyRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, vec![sample_record()]);
    }

    #[test]
    fn test_save_json_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = save_json(&[], &path).unwrap_err();
        assert!(matches!(err, ConverterError::WriteOutput { .. }));
        assert!(!path.exists());
    }
}
