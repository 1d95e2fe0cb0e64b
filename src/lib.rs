use actix_web::{HttpResponse, web};

pub mod errors;
pub mod handlers;
pub mod session;
pub mod templates_structs;
pub mod workflow;

/// Route table, shared by the binary and the integration tests.
///
/// The wizard is linear: Receive(1) → Document(2) → Cut(3) → Report(4) →
/// Dashboard. Each step has a GET for the form and a POST for the
/// complete action.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::dashboard::index))
        .route("/receive", web::get().to(handlers::receive_handlers::form))
        .route("/receive", web::post().to(handlers::receive_handlers::submit))
        .route("/document", web::get().to(handlers::document_handlers::form))
        .route("/document", web::post().to(handlers::document_handlers::submit))
        .route("/cut", web::get().to(handlers::cut_handlers::form))
        .route("/cut", web::post().to(handlers::cut_handlers::submit))
        .route("/report", web::get().to(handlers::report_handlers::form))
        .route("/report", web::post().to(handlers::report_handlers::submit))
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            let html = include_str!("../templates/errors/404.html");
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }));
}
