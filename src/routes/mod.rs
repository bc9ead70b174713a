// Route exports
pub mod analyze;

use crate::config::CorsSettings;
use actix_cors::Cors;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(analyze::configure));
}

/// Build the CORS middleware from the configured policy
///
/// Constructed once per worker at startup; the frontend origin defaults to
/// the local Next.js dev server.
pub fn build_cors(settings: &CorsSettings) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(settings.allowed_methods.iter().map(String::as_str))
        .allowed_headers(settings.allowed_headers.iter().map(String::as_str))
        .max_age(settings.max_age_secs as usize);

    for origin in &settings.allowed_origins {
        cors = if origin == "*" {
            cors.allow_any_origin()
        } else {
            cors.allowed_origin(origin)
        };
    }

    if settings.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
