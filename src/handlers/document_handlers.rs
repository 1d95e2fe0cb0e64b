use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::see_other;
use crate::errors::{AppError, render};
use crate::session::{save_workflow_state, set_flash, workflow_state};
use crate::templates_structs::{DocumentTemplate, PageContext};
use crate::workflow::forms::DocumentForm;
use crate::workflow::steps::{StepId, TOTAL_STEPS};
use crate::workflow::validate;

const COLOR_OPTIONS: &[&str] = &[
    "Pink", "Tan", "Brown", "Gray", "Yellow", "Red", "White", "Black",
];

const CONSISTENCY_OPTIONS: &[&str] = &["Soft", "Firm", "Hard", "Rubbery", "Friable", "Necrotic"];

const SURFACE_OPTIONS: &[&str] = &[
    "Smooth", "Rough", "Nodular", "Ulcerated", "Intact", "Irregular",
];

fn page(ctx: PageContext, form: DocumentForm, failed: bool) -> DocumentTemplate {
    DocumentTemplate {
        ctx,
        step: StepId::Document.step(),
        form,
        notice: failed.then(|| StepId::Document.failure_notice()),
        color_options: COLOR_OPTIONS,
        consistency_options: CONSISTENCY_OPTIONS,
        surface_options: SURFACE_OPTIONS,
        total_steps: TOTAL_STEPS,
    }
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/document");
    render(page(ctx, DocumentForm::prefilled(), false))
}

pub async fn submit(
    session: Session,
    form: web::Form<DocumentForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let outcome = validate::document(&form);

    if !outcome.ok {
        let ctx = PageContext::build(&session, "/document");
        return render(page(ctx, form, true));
    }

    let mut state = workflow_state(&session);
    state.complete(StepId::Document, &outcome);
    save_workflow_state(&session, &state);

    set_flash(
        &session,
        "Documentation completed: gross examination findings have been recorded.",
    );
    Ok(see_other(StepId::Document.next_route()))
}
