//! Page document model and section mutations

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EditorError, Result};

/// One JSON content file behind a website page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Stable identifier, matches the file stem; never changes after creation
    pub page_name: String,
    /// Page heading shown by the website
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    /// ISO-8601 timestamp, stamped on every save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Fields the editor does not understand survive a load/save round trip
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// One titled content block within a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Required; save refuses pages with untitled sections
    pub title: String,
    /// Links and metadata; the website treats empty strings as absent
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub documentation_link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// HTML body; `<br>` is the line-break convention
    #[serde(default)]
    pub text: String,
    /// Zero-based display ordinal
    #[serde(default)]
    pub order: usize,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// The editable fields of a section, everything except its ordinal
#[derive(Debug, Clone, Default)]
pub struct SectionFields {
    pub title: String,
    pub github_link: String,
    pub documentation_link: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub text: String,
}

impl Page {
    /// Create an empty page for the given identifier
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            title: String::new(),
            sections: Vec::new(),
            last_updated: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Append a new section with `order = sections.len()`
    pub fn add_section(&mut self, fields: SectionFields) {
        let order = self.sections.len();
        self.sections.push(Section {
            title: fields.title,
            github_link: fields.github_link,
            documentation_link: fields.documentation_link,
            description: fields.description,
            technologies: fields.technologies,
            text: fields.text,
            order,
            extra: serde_json::Map::new(),
        });
    }

    /// Replace the editable fields of the section at `index`, preserving
    /// its ordinal and any unrecognized fields
    pub fn update_section(&mut self, index: usize, fields: SectionFields) -> Result<()> {
        let len = self.sections.len();
        let section = self
            .sections
            .get_mut(index)
            .ok_or(EditorError::Index { index, len })?;
        section.title = fields.title;
        section.github_link = fields.github_link;
        section.documentation_link = fields.documentation_link;
        section.description = fields.description;
        section.technologies = fields.technologies;
        section.text = fields.text;
        Ok(())
    }

    /// Remove the section at `index`. Remaining `order` values are left
    /// untouched; gaps persist until the next reorder.
    pub fn delete_section(&mut self, index: usize) -> Result<Section> {
        let len = self.sections.len();
        if index >= len {
            return Err(EditorError::Index { index, len });
        }
        Ok(self.sections.remove(index))
    }

    /// Move the section at `from` to position `to` and reassign every
    /// ordinal positionally. A no-op when either index is out of range
    /// or the indices are equal. Returns whether anything moved.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.sections.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let section = self.sections.remove(from);
        self.sections.insert(to, section);
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.order = i;
        }
        true
    }

    /// Check the save preconditions: every section carries a title
    pub fn validate(&self) -> Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if section.title.trim().is_empty() {
                return Err(EditorError::Validation(format!(
                    "section {i} of page '{}' has no title",
                    self.page_name
                )));
            }
        }
        Ok(())
    }
}
