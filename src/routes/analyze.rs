use crate::core::CandidateMatcher;
use crate::models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: CandidateMatcher,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Candidate analysis endpoint
///
/// POST /api/v1/analyze
///
/// Request body:
/// ```json
/// {
///   "jobSkills": ["Python", "SQL"],
///   "candidateSkills": ["python"],
///   "githubUrl": "https://github.com/octocat"
/// }
/// ```
///
/// Always returns 200 with a complete analysis for valid input; a failed
/// GitHub lookup shows up as defaulted profileStats, never as an error.
async fn analyze(state: web::Data<AppState>, req: web::Json<AnalyzeRequest>) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Analyzing candidate: {} job skills, {} candidate skills, url: {}",
        req.job_skills.len(),
        req.candidate_skills.len(),
        req.github_url
    );

    let report = state
        .matcher
        .compute_match(&req.job_skills, &req.candidate_skills, &req.github_url)
        .await;

    tracing::info!(
        "Analysis complete: score {}, stats available: {}",
        report.skills.score,
        report.stats_available
    );

    HttpResponse::Ok().json(AnalyzeResponse::from(report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
