//! Placeholder HireSmart backend: hard-coded analysis score.
//!
//! Kept around so the frontend can be developed against a stable shape
//! while the real analysis service evolves.

use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use hiresmart_algo::config::Settings;
use hiresmart_algo::routes::build_cors;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct StubAnalyzeRequest {
    #[serde(default)]
    github: Option<String>,
}

async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "HireSmart backend running" }))
}

/// Echo the submitted GitHub username with a canned score
async fn analyze(req: web::Json<StubAnalyzeRequest>) -> impl Responder {
    let req = req.into_inner();
    HttpResponse::Ok().json(json!({
        "score": 85,
        "github": req.github,
        "message": "Analysis completed successfully"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true)
        .init();

    info!("Starting HireSmart stub service...");

    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    let host = settings.stub.host.clone();
    let port = settings.stub.port;
    let cors_settings = settings.cors.clone();

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_settings))
            .wrap(middleware::Logger::default())
            .route("/", web::get().to(root))
            .route("/analyze", web::post().to(analyze))
    })
    .bind((host, port))?
    .run()
    .await
}
