//! HireSmart Algo - candidate analysis service for HireSmart
//!
//! This library scores a job candidate against a job posting by skill
//! overlap and enriches the result with public GitHub profile statistics
//! (repository count, account age, dominant language).

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{match_skills, CandidateMatcher};
pub use self::models::{AnalysisReport, AnalyzeRequest, AnalyzeResponse, ProfileStats, SkillMatch};
pub use self::services::{username_from_url, GithubClient, GithubError};
