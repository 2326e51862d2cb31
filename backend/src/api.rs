//! Web API Module
//!
//! Exposes the experience store over JSON endpoints.
//! All endpoints return the `ApiResponse` envelope and require no
//! authentication.

use crate::config::ServerConfig;
use crate::schema::{self, CreateExperienceInput, Operation};
use crate::version;
use actix_cors::Cors;
use actix_web::{error, web, App, HttpResponse, HttpServer, Responder};
use experience_core::{ExperienceStore, StoreError};
use serde::Serialize;
use std::sync::Arc;

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub store: Arc<ExperienceStore>,
}

impl AppState {
    pub fn new(store: Arc<ExperienceStore>) -> Self {
        Self { store }
    }
}

// ============================================================
// RESPONSE ENVELOPE
// ============================================================

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

/// Translate a store failure into the transport's status codes
fn store_error_response(err: &StoreError) -> HttpResponse {
    let body = ApiResponse::<()>::error(&err.to_string());
    match err {
        StoreError::InvalidType(_) | StoreError::DuplicateId(_) => HttpResponse::BadRequest().json(body),
        // Lookups answer absence with `data: null` and never reach this arm
        StoreError::NotFound(_) => HttpResponse::NotFound().json(body),
        StoreError::IdCollision { .. } => {
            log::error!("Create failed: {}", err);
            HttpResponse::InternalServerError().json(body)
        }
    }
}

// ============================================================
// API HANDLERS
// ============================================================

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": version::user_agent(),
    }))
}

async fn get_version() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(version::build_info()))
}

async fn get_schema() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(schema::describe()))
}

/// `experiences()`
async fn list_experiences(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::success(schema::experiences(&data.store)))
}

/// `experience(id)`: unknown ids come back as `data: null`
async fn get_experience(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    let found = schema::experience(&data.store, &id);
    if found.is_none() {
        log::debug!("Experience {} not found", id);
    }

    HttpResponse::Ok().json(ApiResponse {
        success: true,
        data: found,
        error: None,
    })
}

/// `createExperience(input)`
async fn create_experience(
    data: web::Data<AppState>,
    req: web::Json<CreateExperienceInput>,
) -> impl Responder {
    match schema::create_experience(&data.store, req.into_inner()) {
        Ok(created) => HttpResponse::Ok().json(ApiResponse::success(created)),
        Err(e) => store_error_response(&e),
    }
}

/// Typed query/mutation dispatcher
async fn run_operation(data: web::Data<AppState>, req: web::Json<Operation>) -> impl Responder {
    match schema::execute(&data.store, req.into_inner()) {
        Ok(output) => HttpResponse::Ok().json(ApiResponse::success(output)),
        Err(e) => store_error_response(&e),
    }
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Malformed JSON bodies are answered with the envelope too
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let body = ApiResponse::<()>::error(&err.to_string());
        error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Register every route on an app or test service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health_check))
        .route("/version", web::get().to(get_version))
        .route("/api/schema", web::get().to(get_schema))
        .route("/api/experiences", web::get().to(list_experiences))
        .route("/api/experiences", web::post().to(create_experience))
        .route("/api/experiences/{id}", web::get().to(get_experience))
        .route("/api/operation", web::post().to(run_operation));
}

/// Configure and run the API server
pub async fn run_server(config: &ServerConfig, store: Arc<ExperienceStore>) -> std::io::Result<()> {
    let state = web::Data::new(AppState::new(store));

    log::info!(
        "Experience API {} starting at http://{}:{}",
        version::get_version(),
        config.host,
        config.port
    );
    log::info!("API Endpoints:");
    log::info!("   GET  /health                - Health check");
    log::info!("   GET  /version               - Build info");
    log::info!("   GET  /api/schema            - Schema declaration");
    log::info!("   GET  /api/experiences       - List experiences");
    log::info!("   GET  /api/experiences/:id   - Get experience");
    log::info!("   POST /api/experiences       - Create experience");
    log::info!("   POST /api/operation         - Run query or mutation");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
