//! HTTP handlers and route configuration.

mod auto_posts;
mod health;
mod integrations;
mod posts;

use actix_web::web;
use chrono::FixedOffset;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(query_config())
            .route("/health", web::get().to(health::health_check))
            .route(
                "/integrations/validate",
                web::post().to(integrations::validate_integration),
            )
            .service(
                web::scope("/users/{user_id}")
                    .route("/posts", web::get().to(posts::list_posts))
                    .route("/posts", web::post().to(posts::create_post))
                    .route("/posts/calendar", web::get().to(posts::calendar))
                    .route("/posts/{post_id}", web::put().to(posts::update_post))
                    .route("/auto-posts", web::get().to(auto_posts::history)),
            ),
    );
}

/// Malformed JSON bodies become problem documents instead of plain text.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Resolve the viewer's UTC offset, given in minutes east of UTC.
pub(crate) fn viewer_offset(minutes: Option<i32>) -> AppResult<FixedOffset> {
    let minutes = minutes.unwrap_or(0);
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| {
            AppError::BadRequest(format!("tz_offset_minutes {minutes} is out of range"))
        })
}
