//! Loading and saving page documents in the content directory

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::page::Page;
use crate::error::{EditorError, Result};

/// Handle on the directory holding one JSON file per page identifier
#[derive(Debug, Clone)]
pub struct PageStore {
    content_dir: PathBuf,
}

impl PageStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Path of the backing file for a page identifier
    pub fn page_path(&self, name: &str) -> PathBuf {
        self.content_dir.join(format!("{name}.json"))
    }

    /// Read and parse a page document
    pub fn load(&self, name: &str) -> Result<Page> {
        let path = self.page_path(name);
        let raw = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => EditorError::NotFound(path.clone()),
            _ => EditorError::Io {
                path: path.clone(),
                source,
            },
        })?;
        let page: Page =
            serde_json::from_str(&raw).map_err(|source| EditorError::Parse { path, source })?;
        tracing::debug!(page = %page.page_name, sections = page.sections.len(), "loaded page");
        Ok(page)
    }

    /// Filter a whitelist of page identifiers down to those whose backing
    /// file exists, input order preserved
    pub fn list_available(&self, candidates: &[String]) -> Vec<String> {
        candidates
            .iter()
            .filter(|name| self.page_path(name).is_file())
            .cloned()
            .collect()
    }

    /// Validate, stamp `lastUpdated`, and write the page to
    /// `<content_dir>/<pageName>.json`.
    ///
    /// The JSON is written with 2-space indentation and non-ASCII characters
    /// kept literal, via a temp file renamed over the target so a partial
    /// write is never left behind as valid-looking JSON. Validation failure
    /// leaves the on-disk file untouched.
    pub fn save(&self, page: &mut Page) -> Result<()> {
        page.validate()?;
        page.last_updated = Some(now_iso());

        let body = serde_json::to_string_pretty(page).map_err(|source| EditorError::Parse {
            path: self.page_path(&page.page_name),
            source,
        })?;

        let path = self.page_path(&page.page_name);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, &body).map_err(|source| EditorError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| EditorError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(page = %page.page_name, path = %path.display(), "saved page");
        Ok(())
    }
}

/// Local-time ISO-8601 with microsecond precision, the format the original
/// content files already carry in `lastUpdated`
fn now_iso() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::page::SectionFields;
    use chrono::NaiveDateTime;

    fn store_with_pages(pages: &[&str]) -> (tempfile::TempDir, PageStore) {
        let dir = tempfile::tempdir().unwrap();
        for name in pages {
            let path = dir.path().join(format!("{name}.json"));
            fs::write(
                &path,
                format!(r#"{{"pageName": "{name}", "title": "{name}", "sections": []}}"#),
            )
            .unwrap();
        }
        let store = PageStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, store) = store_with_pages(&[]);
        assert!(matches!(
            store.load("home").unwrap_err(),
            EditorError::NotFound(_)
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let (dir, store) = store_with_pages(&[]);
        fs::write(dir.path().join("home.json"), "{not json").unwrap();
        assert!(matches!(
            store.load("home").unwrap_err(),
            EditorError::Parse { .. }
        ));
    }

    #[test]
    fn test_list_available_preserves_input_order() {
        let (_dir, store) = store_with_pages(&["home", "projects"]);
        let candidates: Vec<String> = ["home", "education", "experience", "projects"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(store.list_available(&candidates), vec!["home", "projects"]);
    }

    #[test]
    fn test_save_then_reload_matches_memory() {
        let (_dir, store) = store_with_pages(&["experience"]);
        let mut page = store.load("experience").unwrap();
        page.add_section(SectionFields {
            title: "First".to_string(),
            ..Default::default()
        });
        page.add_section(SectionFields {
            title: "Second".to_string(),
            ..Default::default()
        });
        page.reorder(0, 1);
        store.save(&mut page).unwrap();

        let reloaded = store.load("experience").unwrap();
        let titles: Vec<&str> = reloaded.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
        let orders: Vec<usize> = reloaded.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 1]);

        let stamp = reloaded.last_updated.unwrap();
        NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%dT%H:%M:%S%.f").unwrap();
    }

    #[test]
    fn test_timestamps_strictly_increase_across_saves() {
        let (_dir, store) = store_with_pages(&["home"]);
        let mut page = store.load("home").unwrap();
        store.save(&mut page).unwrap();
        let first = store.load("home").unwrap().last_updated.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        store.save(&mut page).unwrap();
        let second = store.load("home").unwrap().last_updated.unwrap();
        // lexicographic comparison is chronological for this fixed format
        assert!(second > first);
    }

    #[test]
    fn test_validation_failure_leaves_disk_untouched() {
        let (dir, store) = store_with_pages(&["home"]);
        let before = fs::read_to_string(dir.path().join("home.json")).unwrap();

        let mut page = store.load("home").unwrap();
        page.add_section(SectionFields::default());
        assert!(matches!(
            store.save(&mut page).unwrap_err(),
            EditorError::Validation(_)
        ));

        let after = fs::read_to_string(dir.path().join("home.json")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_save_keeps_non_ascii_literal() {
        let (dir, store) = store_with_pages(&["home"]);
        let mut page = store.load("home").unwrap();
        page.add_section(SectionFields {
            title: "Résumé — 日本語".to_string(),
            ..Default::default()
        });
        store.save(&mut page).unwrap();
        let raw = fs::read_to_string(dir.path().join("home.json")).unwrap();
        assert!(raw.contains("Résumé — 日本語"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_save_indents_with_two_spaces() {
        let (dir, store) = store_with_pages(&["home"]);
        let mut page = store.load("home").unwrap();
        store.save(&mut page).unwrap();
        let raw = fs::read_to_string(dir.path().join("home.json")).unwrap();
        assert!(raw.contains("\n  \"pageName\""));
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let (dir, store) = store_with_pages(&["home"]);
        let mut page = store.load("home").unwrap();
        store.save(&mut page).unwrap();
        assert!(!dir.path().join("home.json.tmp").exists());
    }
}
