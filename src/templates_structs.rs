// Template context structures for Askama templates, one struct per page.

use actix_session::Session;
use askama::Template;

use crate::session::{take_flash, workflow_state};
use crate::workflow::forms::{CutForm, DocumentForm, ReceiveForm, ReportForm};
use crate::workflow::sections::position_label;
use crate::workflow::state::WorkflowState;
use crate::workflow::steps::{STEPS, StepId, TOTAL_STEPS, WorkflowStep};
use crate::workflow::validate::Notice;

pub const APP_NAME: &str = "PathologyGuide";

/// Common context shared by all pages. Templates access these as
/// `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: &'static str,
    pub flash: Option<String>,
    pub state: WorkflowState,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, current_path: &str) -> Self {
        Self {
            app_name: APP_NAME,
            flash: take_flash(session),
            state: workflow_state(session),
            current_path: current_path.to_string(),
        }
    }
}

/// One dashboard card per registry step.
pub struct StepCard {
    pub step: &'static WorkflowStep,
    pub completed: bool,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub cards: Vec<StepCard>,
    pub completed_count: usize,
    pub active_step: usize,
    pub remaining: usize,
    pub total_steps: usize,
}

impl DashboardTemplate {
    pub fn build(ctx: PageContext) -> Self {
        let cards = STEPS
            .iter()
            .map(|step| StepCard {
                step,
                completed: ctx.state.is_completed(step.id),
                active: ctx.state.is_active(step.id),
            })
            .collect();
        Self {
            completed_count: ctx.state.completed_count(),
            active_step: ctx.state.active_step_number(),
            remaining: ctx.state.remaining(),
            total_steps: TOTAL_STEPS,
            cards,
            ctx,
        }
    }
}

#[derive(Template)]
#[template(path = "steps/receive.html")]
pub struct ReceiveTemplate {
    pub ctx: PageContext,
    pub step: &'static WorkflowStep,
    pub form: ReceiveForm,
    pub notice: Option<Notice>,
    pub specimen_types: &'static [&'static str],
    pub priorities: &'static [&'static str],
    pub total_steps: usize,
}

#[derive(Template)]
#[template(path = "steps/document.html")]
pub struct DocumentTemplate {
    pub ctx: PageContext,
    pub step: &'static WorkflowStep,
    pub form: DocumentForm,
    pub notice: Option<Notice>,
    pub color_options: &'static [&'static str],
    pub consistency_options: &'static [&'static str],
    pub surface_options: &'static [&'static str],
    pub total_steps: usize,
}

/// One rendered row of the section editor. The label is derived from the
/// row's position, never stored on the section itself.
pub struct SectionRow {
    pub id: u32,
    pub label: String,
    pub cassette: String,
    pub location: String,
    pub description: String,
}

#[derive(Template)]
#[template(path = "steps/cut.html")]
pub struct CutTemplate {
    pub ctx: PageContext,
    pub step: &'static WorkflowStep,
    pub form: CutForm,
    pub rows: Vec<SectionRow>,
    pub notice: Option<Notice>,
    pub total_steps: usize,
}

impl CutTemplate {
    pub fn build(ctx: PageContext, form: CutForm, notice: Option<Notice>) -> Self {
        let rows = form
            .sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionRow {
                id: section.id,
                label: position_label(index),
                cassette: section.cassette.clone(),
                location: section.location.clone(),
                description: section.description.clone(),
            })
            .collect();
        Self {
            ctx,
            step: StepId::Cut.step(),
            form,
            rows,
            notice,
            total_steps: TOTAL_STEPS,
        }
    }
}

#[derive(Template)]
#[template(path = "steps/report.html")]
pub struct ReportTemplate {
    pub ctx: PageContext,
    pub step: &'static WorkflowStep,
    pub form: ReportForm,
    pub notice: Option<Notice>,
    pub total_steps: usize,
}
