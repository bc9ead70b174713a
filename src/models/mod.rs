// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnalysisReport, GithubRepo, GithubUser, ProfileStats, SkillMatch};
pub use requests::AnalyzeRequest;
pub use responses::{AnalyzeResponse, ErrorResponse, HealthResponse};
