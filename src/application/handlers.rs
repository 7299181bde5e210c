//! HTTP handlers for the offer letter service.

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::application::model::ApplicationForm;
use crate::orchestrator::GenerationError;
use crate::{AppState, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "Offer Letter Service",
    request_body = ApplicationForm,
    responses(
        (status = 200, description = "Documents generated", body = crate::orchestrator::DocumentSet),
        (status = 400, description = "Form failed validation", body = ErrorResponse),
        (status = 500, description = "Counter storage or rendering failed", body = ErrorResponse)
    )
)]
pub async fn submit_application(
    state: web::Data<AppState>,
    form: web::Json<ApplicationForm>,
) -> impl Responder {
    let form = form.into_inner();
    let orchestrator = state.orchestrator.clone();

    // Generation is blocking work (filesystem plus the render subprocess),
    // so it runs off the async workers.
    let result = web::block(move || orchestrator.generate(&form)).await;

    match result {
        Ok(Ok(set)) => {
            log::info!(
                "generated document set for employee {} at {}",
                set.employee_id,
                set.employee_folder
            );
            HttpResponse::Ok().json(set)
        }
        Ok(Err(GenerationError::Validation(e))) => {
            log::info!("rejected application: {e}");
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(&e.to_string()))
        }
        Ok(Err(e)) => {
            log::error!("document generation failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::internal_error(&e.to_string()))
        }
        Err(e) => {
            log::error!("generation task failed to run: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("generation task failed"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Offer Letter Service",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
