use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::see_other;
use crate::errors::{AppError, render};
use crate::session::{save_workflow_state, set_flash, workflow_state};
use crate::templates_structs::{CutTemplate, PageContext};
use crate::workflow::forms::CutForm;
use crate::workflow::steps::StepId;
use crate::workflow::validate;

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/cut");
    render(CutTemplate::build(ctx, CutForm::default(), None))
}

/// The cut page posts back for two actions: "add_section" re-renders with
/// one more blank row (input retained), anything else is the complete
/// action. The body is taken as raw pairs because the section rows are
/// dynamically sized.
pub async fn submit(
    session: Session,
    body: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let mut form = CutForm::from_pairs(&body);

    if form.action == "add_section" {
        form.sections.add_section();
        let ctx = PageContext::build(&session, "/cut");
        return render(CutTemplate::build(ctx, form, None));
    }

    let outcome = validate::cut(&form.sections);

    if !outcome.ok {
        let ctx = PageContext::build(&session, "/cut");
        return render(CutTemplate::build(
            ctx,
            form,
            Some(StepId::Cut.failure_notice()),
        ));
    }

    let mut state = workflow_state(&session);
    state.complete(StepId::Cut, &outcome);
    save_workflow_state(&session, &state);

    set_flash(
        &session,
        &format!(
            "Sectioning completed: {} sections prepared for histology.",
            form.sections.len()
        ),
    );
    Ok(see_other(StepId::Cut.next_route()))
}
