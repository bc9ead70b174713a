// Service exports
pub mod github;

pub use github::{
    account_age_years, top_language, username_from_url, GithubClient, GithubError,
    DEFAULT_USER_AGENT,
};
