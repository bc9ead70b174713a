use crate::core::skills::match_skills;
use crate::models::{AnalysisReport, ProfileStats};
use crate::services::{username_from_url, GithubClient};
use std::sync::Arc;

/// Main analysis orchestrator
///
/// Combines the pure skill-overlap computation with a best-effort GitHub
/// profile lookup. The lookup can fail for any number of reasons (bad URL,
/// unknown user, rate limit, timeout, malformed payload); none of them fail
/// the analysis; the stats simply stay at their defaults.
#[derive(Clone)]
pub struct CandidateMatcher {
    github: Arc<GithubClient>,
}

impl CandidateMatcher {
    pub fn new(github: Arc<GithubClient>) -> Self {
        Self { github }
    }

    /// Analyze a candidate against a job posting
    ///
    /// # Arguments
    /// * `job_skills` - Skills the job requires, free-text
    /// * `candidate_skills` - Skills the candidate claims, free-text
    /// * `github_url` - Profile URL; the trailing path segment is the username
    ///
    /// # Returns
    /// AnalysisReport with the match score, matched/missing skills, and
    /// whatever profile stats could be fetched.
    pub async fn compute_match(
        &self,
        job_skills: &[String],
        candidate_skills: &[String],
        github_url: &str,
    ) -> AnalysisReport {
        let skills = match_skills(job_skills, candidate_skills);

        let (stats, stats_available) = match username_from_url(github_url) {
            Some(username) => match self.github.profile_stats(&username).await {
                Ok(stats) => (stats, true),
                Err(e) => {
                    tracing::warn!("GitHub lookup failed for {}: {}", username, e);
                    (ProfileStats::default(), false)
                }
            },
            None => {
                tracing::warn!("No username in profile URL {:?}", github_url);
                (ProfileStats::default(), false)
            }
        };

        AnalysisReport {
            skills,
            stats,
            stats_available,
        }
    }
}
