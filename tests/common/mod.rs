//! Shared test infrastructure for wizard flow tests.
//!
//! Flow tests drive the real route table through `actix_web::test`, with
//! the same cookie-session middleware the binary uses (throwaway key).

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;

/// Session middleware mirroring the production setup, minus the persistent
/// SESSION_KEY.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
