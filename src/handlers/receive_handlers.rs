use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::see_other;
use crate::errors::{AppError, render};
use crate::session::{save_workflow_state, set_flash, workflow_state};
use crate::templates_structs::{PageContext, ReceiveTemplate};
use crate::workflow::forms::ReceiveForm;
use crate::workflow::steps::{StepId, TOTAL_STEPS};
use crate::workflow::validate;

const SPECIMEN_TYPES: &[&str] = &[
    "Biopsy - Skin",
    "Biopsy - Breast",
    "Biopsy - GI Tract",
    "Biopsy - Lung",
    "Resection - Surgical",
    "Cytology - FNA",
    "Cytology - Fluid",
    "Other",
];

const PRIORITIES: &[&str] = &["routine", "urgent", "stat"];

fn page(ctx: PageContext, form: ReceiveForm, failed: bool) -> ReceiveTemplate {
    ReceiveTemplate {
        ctx,
        step: StepId::Receive.step(),
        form,
        notice: failed.then(|| StepId::Receive.failure_notice()),
        specimen_types: SPECIMEN_TYPES,
        priorities: PRIORITIES,
        total_steps: TOTAL_STEPS,
    }
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/receive");
    render(page(ctx, ReceiveForm::prefilled(), false))
}

pub async fn submit(
    session: Session,
    form: web::Form<ReceiveForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let outcome = validate::receive(&form);

    if !outcome.ok {
        let ctx = PageContext::build(&session, "/receive");
        return render(page(ctx, form, true));
    }

    let mut state = workflow_state(&session);
    state.complete(StepId::Receive, &outcome);
    save_workflow_state(&session, &state);

    set_flash(
        &session,
        &format!(
            "Specimen received: accession #{} logged in system.",
            form.accession_number.trim()
        ),
    );
    Ok(see_other(StepId::Receive.next_route()))
}
