use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod application;
pub mod config;
pub mod employee_id;
pub mod generators;
pub mod orchestrator;

use crate::config::AppConfig;
use crate::employee_id::{EmployeeIdAllocator, FileCounterStore};
use crate::generators::TypstRenderer;
use crate::orchestrator::GenerationOrchestrator;

/// Shared application state: the generation pipeline behind every handler.
pub struct AppState {
    pub orchestrator: Arc<GenerationOrchestrator>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::application::handlers::submit_application,
            crate::application::handlers::health,
        ),
        components(
            schemas(
                application::model::ApplicationForm,
                orchestrator::DocumentSet,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Offer Letter Service", description = "Employment application intake and offer letter generation.")
        )
    )]
    struct ApiDoc;

    let config = AppConfig::from_env();
    log::info!(
        "output root: {}, counter file: {}",
        config.output_dir.display(),
        config.counter_file.display()
    );
    if config.logo_path.is_none() {
        log::warn!("letterhead image not found, letters render without a logo");
    }

    let allocator = EmployeeIdAllocator::new(FileCounterStore::new(config.counter_file.clone()));
    let orchestrator = Arc::new(GenerationOrchestrator::new(
        allocator,
        Arc::new(TypstRenderer),
        config.output_dir.clone(),
        config.logo_path.clone(),
    ));
    let app_state = web::Data::new(AppState { orchestrator });

    let prometheus = PrometheusMetricsBuilder::new("offer_letter_server")
        .endpoint("/metrics")
        .build()
        .expect("Failed to create Prometheus metrics middleware");

    log::info!("Starting server at http://0.0.0.0:8080");

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let prometheus = prometheus.clone();
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api").service(
                    web::resource("/applications")
                        .route(web::post().to(application::handlers::submit_application)),
                ),
            )
            .service(web::resource("/health").route(web::get().to(application::handlers::health)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await
}
