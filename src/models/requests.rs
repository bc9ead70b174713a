use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze a candidate against a job posting
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(alias = "job_skills", rename = "jobSkills", default)]
    pub job_skills: Vec<String>,
    #[serde(alias = "candidate_skills", rename = "candidateSkills", default)]
    pub candidate_skills: Vec<String>,
    #[validate(length(min = 1))]
    #[serde(alias = "github_url", alias = "profileUrl", rename = "githubUrl")]
    pub github_url: String,
}
