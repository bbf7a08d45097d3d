//! Explicit editing-session state
//!
//! Every mutating operation takes and updates this value instead of ambient
//! globals, so the whole edit/save cycle is testable without a UI harness.

use crate::core::page::{Page, Section, SectionFields};
use crate::core::store::PageStore;
use crate::core::text;
use crate::error::{EditorError, Result};

/// Form state for the section editing surface, every field as entered text
#[derive(Debug, Clone, Default)]
pub struct SectionForm {
    pub title: String,
    pub github_link: String,
    pub documentation_link: String,
    pub description: String,
    /// Comma-separated, as typed
    pub technologies: String,
    /// Body with real newlines; converted back to `<br>` on commit
    pub body: String,
}

impl SectionForm {
    /// Populate the form from a stored section
    pub fn from_section(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            github_link: section.github_link.clone(),
            documentation_link: section.documentation_link.clone(),
            description: section.description.clone(),
            technologies: text::join_technologies(&section.technologies),
            body: text::normalize_for_edit(&section.text),
        }
    }

    fn into_fields(self) -> SectionFields {
        SectionFields {
            title: self.title,
            github_link: self.github_link,
            documentation_link: self.documentation_link,
            description: self.description,
            technologies: text::parse_technologies(&self.technologies),
            text: text::normalize_for_storage(self.body.trim()),
        }
    }
}

/// One loaded page plus the selection state of the editing surface
#[derive(Debug, Clone)]
pub struct EditSession {
    pub page: Page,
    pub selected: Option<usize>,
    dirty: bool,
}

impl EditSession {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            selected: None,
            dirty: false,
        }
    }

    /// Load a page from the store into a fresh session
    pub fn load(store: &PageStore, name: &str) -> Result<Self> {
        Ok(Self::new(store.load(name)?))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Select a section and hand back its form state
    pub fn select(&mut self, index: usize) -> Result<SectionForm> {
        let section = self
            .page
            .sections
            .get(index)
            .ok_or(EditorError::Index {
                index,
                len: self.page.sections.len(),
            })?;
        self.selected = Some(index);
        Ok(SectionForm::from_section(section))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn set_page_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.page.title != title {
            self.page.title = title;
            self.dirty = true;
        }
    }

    /// Commit the form: update the selected section, or append a new one
    /// when nothing is selected. Returns the index the form landed on.
    pub fn commit(&mut self, form: SectionForm) -> Result<usize> {
        if form.title.trim().is_empty() {
            return Err(EditorError::Validation(
                "section title is required".to_string(),
            ));
        }
        let fields = form.into_fields();
        let index = match self.selected {
            Some(index) if index < self.page.sections.len() => {
                self.page.update_section(index, fields)?;
                index
            }
            _ => {
                self.page.add_section(fields);
                let index = self.page.sections.len() - 1;
                self.selected = Some(index);
                index
            }
        };
        self.dirty = true;
        Ok(index)
    }

    /// Delete the section at `index`, dropping the selection if it pointed
    /// at or past the removed position
    pub fn delete(&mut self, index: usize) -> Result<()> {
        self.page.delete_section(index)?;
        if self.selected.is_some_and(|s| s >= index) {
            self.selected = None;
        }
        self.dirty = true;
        Ok(())
    }

    /// Move a section; the selection is cleared after a real move so stale
    /// form state cannot be committed onto the wrong section. Returns
    /// whether anything moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = self.page.reorder(from, to);
        if moved {
            self.selected = None;
            self.dirty = true;
        }
        moved
    }

    /// Persist the page; the session returns to the clean state on success
    pub fn save(&mut self, store: &PageStore) -> Result<()> {
        store.save(&mut self.page)?;
        self.dirty = false;
        Ok(())
    }
}
