//! Integration settings check.

use actix_web::{HttpResponse, web};

use zenith_shared::ApiResponse;
use zenith_shared::dto::{IntegrationCheckRequest, IntegrationCheckResponse};

use crate::middleware::error::AppResult;

/// POST /api/integrations/validate
///
/// Confirms the credentials needed to connect are present and returns the
/// label the account would be shown under. Nothing is stored.
pub async fn validate_integration(
    body: web::Json<IntegrationCheckRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.config.validate_for_connect()?;

    let platform = req.config.platform();
    tracing::debug!(%platform, "Integration settings accepted");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(IntegrationCheckResponse {
        platform,
        label: req.config.display_label(&req.username),
    })))
}
