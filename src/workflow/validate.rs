use super::forms::{DocumentForm, ReceiveForm, ReportForm};
use super::sections::SectionList;
use super::steps::StepId;

/// Outcome of running a step's validator over its submitted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub missing: Vec<String>,
}

impl ValidationResult {
    fn from_missing(missing: Vec<String>) -> Self {
        Self {
            ok: missing.is_empty(),
            missing,
        }
    }
}

/// Static title/description pair shown when a step's validation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
}

impl StepId {
    /// The notification surfaced when this step's complete action fails
    /// validation. One pair per step; individual fields are not called out.
    pub fn failure_notice(self) -> Notice {
        match self {
            StepId::Receive => Notice {
                title: "Required fields missing",
                description: "Please fill in all required fields before proceeding.",
            },
            StepId::Document => Notice {
                title: "Required fields missing",
                description: "Please complete measurements and gross description.",
            },
            StepId::Cut => Notice {
                title: "Incomplete sections",
                description: "Please complete all section descriptions and locations.",
            },
            StepId::Report => Notice {
                title: "Required sections missing",
                description: "Please complete clinical history and gross description.",
            },
        }
    }
}

/// Record the field as missing if it is empty or whitespace-only.
fn require(value: &str, field: impl Into<String>, missing: &mut Vec<String>) {
    if value.trim().is_empty() {
        missing.push(field.into());
    }
}

/// Receive: accession number, patient name, and specimen type are required.
pub fn receive(form: &ReceiveForm) -> ValidationResult {
    let mut missing = Vec::new();
    require(&form.accession_number, "accession number", &mut missing);
    require(&form.patient_name, "patient name", &mut missing);
    require(&form.specimen_type, "specimen type", &mut missing);
    ValidationResult::from_missing(missing)
}

/// Document: dimensions and gross description are required.
pub fn document(form: &DocumentForm) -> ValidationResult {
    let mut missing = Vec::new();
    require(&form.dimensions, "dimensions", &mut missing);
    require(&form.gross_description, "gross description", &mut missing);
    ValidationResult::from_missing(missing)
}

/// Cut: every section needs a non-empty location and description.
pub fn cut(sections: &SectionList) -> ValidationResult {
    let mut missing = Vec::new();
    for (index, section) in sections.iter().enumerate() {
        let label = sections.label(index);
        require(
            &section.location,
            format!("section {label} location"),
            &mut missing,
        );
        require(
            &section.description,
            format!("section {label} description"),
            &mut missing,
        );
    }
    ValidationResult::from_missing(missing)
}

/// Report: clinical history and gross description are required.
pub fn report(form: &ReportForm) -> ValidationResult {
    let mut missing = Vec::new();
    require(&form.clinical_history, "clinical history", &mut missing);
    require(&form.gross_description, "gross description", &mut missing);
    ValidationResult::from_missing(missing)
}
