//! Word list file parsing
//!
//! Two formats are understood: plain text with one word per line (blank lines
//! and `#` comments skipped), and JSON, either an array of words or an object
//! whose keys are words (the layout of Webster-style `dictionary.json` files).

use super::DictionaryError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a plain text word list
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_text(&content))
}

/// Read a JSON word list
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or is
/// neither an object nor an array.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| DictionaryError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    words_from_json(value).ok_or_else(|| DictionaryError::UnsupportedJson {
        path: path.to_path_buf(),
    })
}

/// Read a word list, picking the format from the file extension
///
/// # Errors
///
/// See [`read_text`] and [`read_json`].
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        read_json(path)
    } else {
        read_text(path)
    }
}

fn parse_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn words_from_json(value: Value) -> Option<Vec<String>> {
    match value {
        // Keys come back in file order (`preserve_order`)
        Value::Object(map) => Some(map.into_iter().map(|(word, _)| word).collect()),
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(word) => Some(word),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn parse_text_skips_blanks_and_comments() {
        let words = parse_text("# header\ncrane\n\n  slate  \n#skip\nirate\n");
        assert_eq!(words, ["crane", "slate", "irate"]);
    }

    #[test]
    fn read_text_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, ["crane", "slate"]);
    }

    fn json_file(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn read_json_object_keys_in_file_order() {
        let file = json_file(r#"{"zymic": "x", "abaca": "y", "crane": "z"}"#);

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, ["zymic", "abaca", "crane"]);
    }

    #[test]
    fn read_json_array() {
        let file = json_file(r#"["crane", 5, "slate"]"#);

        assert_eq!(read_json(file.path()).unwrap(), ["crane", "slate"]);
    }

    #[test]
    fn read_json_rejects_scalars() {
        let file = json_file("42");

        assert!(matches!(
            read_json(file.path()),
            Err(DictionaryError::UnsupportedJson { .. })
        ));
    }

    #[test]
    fn read_json_reports_parse_errors() {
        let file = json_file("{not json");

        assert!(matches!(read_json(file.path()), Err(DictionaryError::Json { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_text("/definitely/not/here.txt"),
            Err(DictionaryError::Io { .. })
        ));
    }
}
