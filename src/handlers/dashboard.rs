use actix_session::Session;
use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::{DashboardTemplate, PageContext};

/// Progress overview: one card per step plus derived counts. Pure view of
/// the session's workflow state, nothing is mutated here.
pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, "/");
    render(DashboardTemplate::build(ctx))
}
