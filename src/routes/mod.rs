// Route exports
pub mod predictions;

use actix_web::web;

/// The wire contract uses root-level paths, so there is no version scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(predictions::configure);
}
