use actix_session::Session;
use actix_web::{HttpResponse, web};

use super::see_other;
use crate::errors::{AppError, render};
use crate::session::{save_workflow_state, set_flash, workflow_state};
use crate::templates_structs::{PageContext, ReportTemplate};
use crate::workflow::forms::ReportForm;
use crate::workflow::steps::{StepId, TOTAL_STEPS};
use crate::workflow::validate;

fn page(ctx: PageContext, form: ReportForm, failed: bool) -> ReportTemplate {
    ReportTemplate {
        ctx,
        step: StepId::Report.step(),
        form,
        notice: failed.then(|| StepId::Report.failure_notice()),
        total_steps: TOTAL_STEPS,
    }
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/report");
    render(page(ctx, ReportForm::default(), false))
}

pub async fn submit(
    session: Session,
    form: web::Form<ReportForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let outcome = validate::report(&form);

    if !outcome.ok {
        let ctx = PageContext::build(&session, "/report");
        return render(page(ctx, form, true));
    }

    let mut state = workflow_state(&session);
    state.complete(StepId::Report, &outcome);
    save_workflow_state(&session, &state);

    set_flash(
        &session,
        "Report generated successfully: preliminary pathology report is ready for review.",
    );
    Ok(see_other(StepId::Report.next_route()))
}
