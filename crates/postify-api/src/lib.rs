//! # postify-api
//!
//! The web routing and orchestration layer for Postify.

pub mod error;
pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use handlers::AppState;

/// Configures the routes for the board.
///
/// Scoped configuration so the binary could mount the board under a prefix
/// if it ever needed to.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/", web::get().to(handlers::index))
            .route("/post/{id}", web::get().to(handlers::view_post))
            .route("/post", web::post().to(handlers::create_post))
            .route("/reply", web::post().to(handlers::create_reply))
            .route("/report", web::post().to(handlers::report_post))
            .route("/logout", web::get().to(handlers::logout)),
    );
}
