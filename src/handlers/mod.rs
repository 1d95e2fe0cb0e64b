use actix_web::HttpResponse;

pub mod cut_handlers;
pub mod dashboard;
pub mod document_handlers;
pub mod receive_handlers;
pub mod report_handlers;

/// Redirect used after a successful complete action (POST/redirect/GET).
pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}
