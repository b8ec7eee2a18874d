pub mod auth_handler;
pub mod blog_handler;
pub mod calculator_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod survey_handler;
pub mod tutorial_handler;

use actix_web::web;

use crate::errors::AppError;

/// Malformed JSON bodies and query strings come back in the same error shape
/// as every other 400.
fn bad_request(message: String) -> actix_web::Error {
    AppError::ValidationError(message).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(64 * 1024)
            .error_handler(|err, _req| bad_request(format!("Invalid request body: {}", err))),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| bad_request(format!("Invalid query string: {}", err))),
    )
    .configure(health_handler::configure)
    .service(auth_handler::login)
    .configure(quiz_handler::configure)
    .configure(survey_handler::configure)
    .configure(tutorial_handler::configure)
    .configure(blog_handler::configure)
    .configure(calculator_handler::configure);
}
