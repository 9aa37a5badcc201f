//! Directory-per-item datasets holding an XML-like file with a `<body>`.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::sync::LazyLock;

use super::{CorpusItem, Extractor, read_to_string, sorted_entries};
use crate::error::CorpusResult;

/// First `<body>...</body>` region, any case, spanning lines.
static BODY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body>(.*?)</body>").expect("valid regex"));

/// File name looked up inside each item directory by default.
pub const DEFAULT_FILE_NAME: &str = "prompt.xml";

/// Extracts the `<body>` text of `<root>/<item>/<file_name>`.
#[derive(Debug, Clone)]
pub struct XmlBodyExtractor {
    file_name: String,
}

impl XmlBodyExtractor {
    /// Look for `file_name` in every item directory.
    pub fn new<S: Into<String>>(file_name: S) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for XmlBodyExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

/// Trimmed content of the first `<body>` region, if any and non-empty.
pub fn extract_body(content: &str) -> Option<&str> {
    BODY_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|body| !body.is_empty())
}

impl Extractor for XmlBodyExtractor {
    fn candidates(&self, root: &Utf8Path) -> CorpusResult<Vec<Utf8PathBuf>> {
        Ok(sorted_entries(root)?
            .into_iter()
            .filter(|dir| dir.is_dir())
            .map(|dir| dir.join(&self.file_name))
            .filter(|file| file.is_file())
            .collect())
    }

    fn extract(&self, path: &Utf8Path) -> CorpusResult<Vec<CorpusItem>> {
        let content = read_to_string(path)?;
        let label = path
            .parent()
            .and_then(Utf8Path::file_name)
            .unwrap_or(path.as_str());
        Ok(extract_body(&content)
            .map(|body| CorpusItem::new(label, body))
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn body_is_trimmed() {
        let xml = "<prompt><title>x</title><body>\n  Texto do comando.\n</body></prompt>";
        assert_eq!(extract_body(xml), Some("Texto do comando."));
    }

    #[test]
    fn body_tag_is_case_insensitive_and_multiline() {
        let xml = "<BODY>linha um\nlinha dois</Body>";
        assert_eq!(extract_body(xml), Some("linha um\nlinha dois"));
    }

    #[test]
    fn first_body_wins() {
        let xml = "<body>primeiro</body><body>segundo</body>";
        assert_eq!(extract_body(xml), Some("primeiro"));
    }

    #[test]
    fn missing_or_blank_body() {
        assert_eq!(extract_body("<prompt>sem corpo</prompt>"), None);
        assert_eq!(extract_body("<body>   </body>"), None);
    }

    #[test]
    fn candidates_are_item_dirs_in_natural_order() {
        let tmp = TempDir::new().unwrap();
        for name in ["10", "2", "1"] {
            let dir = tmp.path().join(name);
            fs::create_dir(&dir).unwrap();
            fs::write(dir.join("prompt.xml"), "<body>texto</body>").unwrap();
        }
        // directory without the file is not a candidate
        fs::create_dir(tmp.path().join("3")).unwrap();
        // stray file at the root is not a candidate
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();

        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let found = XmlBodyExtractor::default().candidates(&root).unwrap();
        let labels: Vec<_> = found
            .iter()
            .map(|p| p.parent().unwrap().file_name().unwrap())
            .collect();
        assert_eq!(labels, vec!["1", "2", "10"]);
    }

    #[test]
    fn extract_labels_by_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("42");
        fs::create_dir(&dir).unwrap();
        let file = dir.join("prompt.xml");
        fs::write(&file, "<body>O gato caça o rato</body>").unwrap();

        let file = Utf8PathBuf::try_from(file).unwrap();
        let items = XmlBodyExtractor::default().extract(&file).unwrap();
        assert_eq!(items, vec![CorpusItem::new("42", "O gato caça o rato")]);
    }
}
