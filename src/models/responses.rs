use crate::models::domain::{AnalysisReport, ProfileStats};
use serde::{Deserialize, Serialize};

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(rename = "statsAvailable")]
    pub stats_available: bool,
    #[serde(rename = "profileStats")]
    pub profile_stats: ProfileStats,
}

impl From<AnalysisReport> for AnalyzeResponse {
    fn from(report: AnalysisReport) -> Self {
        Self {
            match_score: report.skills.score,
            matched_skills: report.skills.matched,
            missing_skills: report.skills.missing,
            stats_available: report.stats_available,
            profile_stats: report.stats,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
