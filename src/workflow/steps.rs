use serde::{Deserialize, Serialize};

/// Identifier for one of the four processing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepId {
    Receive,
    Document,
    Cut,
    Report,
}

/// One entry in the step registry.
#[derive(Debug)]
pub struct WorkflowStep {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    /// 1-based position in the linear sequence.
    pub order: usize,
    pub route: &'static str,
    pub estimated_time: &'static str,
    pub guidelines: &'static [&'static str],
}

pub const TOTAL_STEPS: usize = 4;

/// The fixed, ordered step registry. The sequence is linear: no branching,
/// no skipping.
pub static STEPS: [WorkflowStep; TOTAL_STEPS] = [
    WorkflowStep {
        id: StepId::Receive,
        title: "Receive Specimen",
        description: "Log incoming specimens, verify patient information, and assign accession numbers.",
        order: 1,
        route: "/receive",
        estimated_time: "5-10 min",
        guidelines: &[
            "Verify patient identification matches specimen container labels",
            "Check for proper specimen fixation and container integrity",
            "Assign unique accession number following laboratory protocol",
            "Record exact time of specimen receipt",
            "Note any discrepancies or special handling requirements",
            "Ensure all required clinical information is available",
        ],
    },
    WorkflowStep {
        id: StepId::Document,
        title: "Document Specimen",
        description: "Record gross examination findings, measurements, and initial observations.",
        order: 2,
        route: "/document",
        estimated_time: "15-30 min",
        guidelines: &[
            "Measure and weigh specimens accurately using calibrated equipment",
            "Describe gross appearance systematically (size, color, consistency, surface)",
            "Note any unusual features, lesions, or areas of concern",
            "Take photographs before sectioning when indicated",
            "Document fixation type and duration",
            "Use standardized terminology for consistency",
        ],
    },
    WorkflowStep {
        id: StepId::Cut,
        title: "Cut & Section",
        description: "Perform gross sectioning, select representative areas, and prepare for histology.",
        order: 3,
        route: "/cut",
        estimated_time: "20-45 min",
        guidelines: &[
            "Orient specimen properly to show relevant anatomical relationships",
            "Take representative sections from all areas of interest",
            "Include margins when applicable for surgical specimens",
            "Document exact location of each section taken",
            "Use proper cassette labeling system",
            "Consider special stains or additional studies needed",
        ],
    },
    WorkflowStep {
        id: StepId::Report,
        title: "Generate Report",
        description: "Compile findings, create preliminary report, and prepare for microscopic examination.",
        order: 4,
        route: "/report",
        estimated_time: "30-60 min",
        guidelines: &[
            "Review all previous documentation for accuracy and completeness",
            "Provide clear, concise clinical history summary",
            "Include detailed but relevant gross findings",
            "Prepare framework for microscopic examination",
            "Ensure proper medical terminology and formatting",
            "Include any recommendations for additional studies",
        ],
    },
];

impl StepId {
    fn index(self) -> usize {
        match self {
            StepId::Receive => 0,
            StepId::Document => 1,
            StepId::Cut => 2,
            StepId::Report => 3,
        }
    }

    pub fn step(self) -> &'static WorkflowStep {
        &STEPS[self.index()]
    }

    /// The step after this one, or `None` for the last step.
    pub fn next(self) -> Option<StepId> {
        match self {
            StepId::Receive => Some(StepId::Document),
            StepId::Document => Some(StepId::Cut),
            StepId::Cut => Some(StepId::Report),
            StepId::Report => None,
        }
    }

    /// Where the complete action navigates to. The last step returns to the
    /// dashboard.
    pub fn next_route(self) -> &'static str {
        match self.next() {
            Some(next) => next.step().route,
            None => "/",
        }
    }

    /// Where the back link navigates to. The first step returns to the
    /// dashboard.
    pub fn previous_route(self) -> &'static str {
        match self {
            StepId::Receive => "/",
            StepId::Document => StepId::Receive.step().route,
            StepId::Cut => StepId::Document.step().route,
            StepId::Report => StepId::Cut.step().route,
        }
    }

    pub fn from_route(path: &str) -> Option<StepId> {
        STEPS.iter().find(|s| s.route == path).map(|s| s.id)
    }
}
