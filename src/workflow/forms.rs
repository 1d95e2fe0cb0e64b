use std::collections::BTreeMap;

use chrono::Local;
use serde::Deserialize;

use super::sections::{Section, SectionField, SectionList};

/// Receive step form. Required: accession number, patient name, specimen
/// type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiveForm {
    #[serde(default)]
    pub accession_number: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub specimen_type: String,
    #[serde(default)]
    pub clinical_history: String,
    #[serde(default)]
    pub requesting_physician: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub received_time: String,
}

fn default_priority() -> String {
    "routine".to_string()
}

impl ReceiveForm {
    /// Fresh form for a GET: routine priority, receipt time pre-filled
    /// with the current local time.
    pub fn prefilled() -> Self {
        Self {
            priority: default_priority(),
            received_time: Local::now().format("%Y-%m-%dT%H:%M").to_string(),
            ..Self::default()
        }
    }

    // Selection checks for Askama templates.
    pub fn is_specimen_type(&self, value: &str) -> bool {
        self.specimen_type == value
    }

    pub fn is_priority(&self, value: &str) -> bool {
        self.priority == value
    }
}

/// Document step form. Required: dimensions, gross description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentForm {
    #[serde(default)]
    pub gross_weight: String,
    #[serde(default)]
    pub dimensions: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub consistency: String,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub gross_description: String,
    /// Checkbox; present in the body only when checked.
    #[serde(default)]
    pub photographs: Option<String>,
    #[serde(default = "default_fixation")]
    pub fixation_type: String,
    #[serde(default)]
    pub fixation_time: String,
}

fn default_fixation() -> String {
    "formalin".to_string()
}

impl DocumentForm {
    pub fn prefilled() -> Self {
        Self {
            fixation_type: default_fixation(),
            ..Self::default()
        }
    }

    pub fn photographs_taken(&self) -> bool {
        self.photographs.is_some()
    }

    pub fn is_color(&self, value: &str) -> bool {
        self.color == value
    }

    pub fn is_consistency(&self, value: &str) -> bool {
        self.consistency == value
    }

    pub fn is_surface(&self, value: &str) -> bool {
        self.surface == value
    }

    pub fn is_fixation_type(&self, value: &str) -> bool {
        self.fixation_type == value
    }
}

/// Report step form. Required: clinical history, gross description.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportForm {
    #[serde(default)]
    pub clinical_history: String,
    #[serde(default)]
    pub gross_description: String,
    #[serde(default)]
    pub microscopic_description: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub recommendations: String,
}

/// Cut step form. The section list is dynamically sized, so this form is
/// rebuilt from the raw key/value pairs of the urlencoded body rather than
/// derived with serde. The `action` field discriminates the submit button:
/// "add_section" grows the list, anything else is the complete action.
#[derive(Debug, Clone)]
pub struct CutForm {
    pub action: String,
    pub orientation: String,
    pub margins: String,
    pub sectioning_protocol: String,
    pub special_stains: String,
    pub notes: String,
    pub sections: SectionList,
}

impl Default for CutForm {
    fn default() -> Self {
        Self {
            action: String::new(),
            orientation: String::new(),
            margins: String::new(),
            sectioning_protocol: String::new(),
            special_stains: String::new(),
            notes: String::new(),
            sections: SectionList::new(),
        }
    }
}

impl CutForm {
    /// Parse the ordered pairs of a form body. Section rows arrive as
    /// `cassette_{id}` / `location_{id}` / `description_{id}` and are
    /// reassembled in id order; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let mut form = Self::default();
        let mut rows: BTreeMap<u32, Section> = BTreeMap::new();

        for (key, value) in pairs {
            match key.as_str() {
                "action" => form.action = value.clone(),
                "orientation" => form.orientation = value.clone(),
                "margins" => form.margins = value.clone(),
                "sectioning_protocol" => form.sectioning_protocol = value.clone(),
                "special_stains" => form.special_stains = value.clone(),
                "notes" => form.notes = value.clone(),
                other => {
                    if let Some((field, id)) = parse_section_key(other) {
                        rows.entry(id)
                            .or_insert_with(|| Section {
                                id,
                                location: String::new(),
                                description: String::new(),
                                cassette: String::new(),
                            })
                            .set(field, value);
                    }
                }
            }
        }

        form.sections = SectionList::from_sections(rows.into_values().collect());
        form
    }
}

impl Section {
    fn set(&mut self, field: SectionField, value: &str) {
        match field {
            SectionField::Location => self.location = value.to_string(),
            SectionField::Description => self.description = value.to_string(),
            SectionField::Cassette => self.cassette = value.to_string(),
        }
    }
}

fn parse_section_key(key: &str) -> Option<(SectionField, u32)> {
    let (name, id) = key.rsplit_once('_')?;
    let field = match name {
        "cassette" => SectionField::Cassette,
        "location" => SectionField::Location,
        "description" => SectionField::Description,
        _ => return None,
    };
    Some((field, id.parse().ok()?))
}
