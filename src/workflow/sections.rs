use serde::{Deserialize, Serialize};

/// One tissue section taken during gross sectioning, destined for a
/// cassette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub location: String,
    pub description: String,
    pub cassette: String,
}

impl Section {
    fn blank(id: u32) -> Self {
        Self {
            id,
            location: String::new(),
            description: String::new(),
            cassette: String::new(),
        }
    }
}

/// A field of a [`Section`] addressable by a targeted update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionField {
    Location,
    Description,
    Cassette,
}

/// Ordered, append-only list of sections. Never empty: a fresh list starts
/// with one blank section. Section ids are stable across edits; display
/// labels are derived from list position at render time and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl Default for SectionList {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionList {
    pub fn new() -> Self {
        Self {
            sections: vec![Section::blank(1)],
        }
    }

    /// Rebuild a list from parsed form rows. An empty input falls back to
    /// the initial single blank section.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        if sections.is_empty() {
            Self::new()
        } else {
            Self { sections }
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Append a new blank section. The cassette field is pre-filled with
    /// the next letter in sequence (A, B, C, ...), matching the position
    /// label the new section will render with.
    pub fn add_section(&mut self) {
        let id = self.sections.len() as u32 + 1;
        let mut section = Section::blank(id);
        section.cassette = position_label(self.sections.len());
        self.sections.push(section);
    }

    /// Replace one field of the section with the given id. Unknown ids are
    /// a no-op; count and order never change.
    pub fn update_section(&mut self, id: u32, field: SectionField, value: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            match field {
                SectionField::Location => section.location = value.to_string(),
                SectionField::Description => section.description = value.to_string(),
                SectionField::Cassette => section.cassette = value.to_string(),
            }
        }
    }

    /// Display label for the section at a zero-based position.
    pub fn label(&self, index: usize) -> String {
        position_label(index)
    }
}

/// Letter label for a zero-based position: A..Z, then AA, AB, ...
pub fn position_label(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
