// Integration tests for HireSmart Algo
//
// The GitHub API is stood in by mockito; every test exercises the full
// CandidateMatcher path and asserts the never-crash contract around the
// external lookup.

use hiresmart_algo::core::CandidateMatcher;
use hiresmart_algo::models::ProfileStats;
use hiresmart_algo::services::GithubClient;
use std::sync::Arc;

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const TEST_USER_AGENT: &str = "hiresmart-algo-tests";

fn matcher_for(server: &mockito::ServerGuard) -> CandidateMatcher {
    CandidateMatcher::new(Arc::new(GithubClient::new(
        server.url(),
        None,
        5,
        TEST_USER_AGENT,
    )))
}

const USER_BODY: &str = r#"{
    "login": "octocat",
    "public_repos": 42,
    "created_at": "2015-06-01T00:00:00Z"
}"#;

const REPOS_BODY: &str = r#"[
    {"name": "a", "language": "Rust"},
    {"name": "b", "language": "Rust"},
    {"name": "c", "language": "Python"},
    {"name": "d", "language": null}
]"#;

#[tokio::test]
async fn test_analysis_with_healthy_profile() {
    let mut server = mockito::Server::new_async().await;
    let user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(USER_BODY)
        .create_async()
        .await;
    let repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(REPOS_BODY)
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(
            &skills(&["Python", "SQL", "Docker"]),
            &skills(&["python", "excel"]),
            "https://github.com/octocat",
        )
        .await;

    assert_eq!(report.skills.score, 33);
    assert_eq!(report.skills.matched, vec!["Python"]);
    assert_eq!(report.skills.missing, vec!["Docker", "Sql"]);

    assert!(report.stats_available);
    assert_eq!(report.stats.public_repository_count, 42);
    assert_eq!(report.stats.top_language.as_deref(), Some("Rust"));
    // Account created 2015-06-01; just sanity-bound the age against the clock
    assert!(report.stats.account_age_years > 10.0);
    assert!(report.stats.account_age_years < 20.0);

    user_mock.assert_async().await;
    repos_mock.assert_async().await;
}

#[tokio::test]
async fn test_trailing_slash_url_resolves_same_username() {
    let mut server = mockito::Server::new_async().await;
    let user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(&[], &[], "https://github.com/octocat/")
        .await;

    assert!(report.stats_available);
    assert_eq!(report.stats.public_repository_count, 42);
    // Empty repo listing: no language to tally
    assert!(report.stats.top_language.is_none());

    user_mock.assert_async().await;
}

#[tokio::test]
async fn test_unknown_user_defaults_stats() {
    let mut server = mockito::Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/users/ghost")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/ghost/repos?per_page=100")
        .with_status(404)
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(
            &skills(&["Rust"]),
            &skills(&["rust"]),
            "https://github.com/ghost",
        )
        .await;

    // Skill math is unaffected by the failed lookup
    assert_eq!(report.skills.score, 100);
    assert!(!report.stats_available);
    assert_eq!(report.stats, ProfileStats::default());
}

#[tokio::test]
async fn test_repo_listing_failure_keeps_user_stats() {
    let mut server = mockito::Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(500)
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(&[], &[], "https://github.com/octocat")
        .await;

    assert!(report.stats_available);
    assert_eq!(report.stats.public_repository_count, 42);
    assert!(report.stats.account_age_years > 0.0);
    assert!(report.stats.top_language.is_none());
}

#[tokio::test]
async fn test_malformed_user_payload_defaults_stats() {
    let mut server = mockito::Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body("not json at all")
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_body(REPOS_BODY)
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(&skills(&["Go"]), &[], "https://github.com/octocat")
        .await;

    assert_eq!(report.skills.score, 0);
    assert_eq!(report.skills.missing, vec!["Go"]);
    assert!(!report.stats_available);
    assert_eq!(report.stats, ProfileStats::default());
}

#[tokio::test]
async fn test_unparseable_created_at_defaults_stats() {
    let mut server = mockito::Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(r#"{"public_repos": 7, "created_at": "yesterday"}"#)
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_body(REPOS_BODY)
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(&[], &[], "https://github.com/octocat")
        .await;

    assert!(!report.stats_available);
    assert_eq!(report.stats, ProfileStats::default());
}

#[tokio::test]
async fn test_unreachable_api_defaults_stats() {
    // Point at a server that is not listening
    let matcher = CandidateMatcher::new(Arc::new(GithubClient::new(
        "http://127.0.0.1:1".to_string(),
        None,
        1,
        TEST_USER_AGENT,
    )));

    let report = matcher
        .compute_match(
            &skills(&["Python", "SQL", "Docker"]),
            &skills(&["python", "excel"]),
            "https://github.com/octocat",
        )
        .await;

    assert_eq!(report.skills.score, 33);
    assert!(!report.stats_available);
    assert_eq!(report.stats, ProfileStats::default());
}

#[tokio::test]
async fn test_degenerate_profile_url_skips_lookup() {
    let server = mockito::Server::new_async().await;

    let matcher = matcher_for(&server);
    let report = matcher.compute_match(&skills(&["Rust"]), &[], "/").await;

    assert_eq!(report.skills.score, 0);
    assert!(!report.stats_available);
    assert_eq!(report.stats, ProfileStats::default());
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let user_mock = server
        .mock("GET", "/users/octocat")
        .match_header("user-agent", "recruiting-bot/2.0")
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;
    let repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .match_header("user-agent", "recruiting-bot/2.0")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = GithubClient::new(server.url(), None, 5, "recruiting-bot/2.0");
    let stats = client.profile_stats("octocat").await.unwrap();
    assert_eq!(stats.public_repository_count, 42);

    user_mock.assert_async().await;
    repos_mock.assert_async().await;
}

#[tokio::test]
async fn test_language_tally_tie_breaks_alphabetically() {
    let mut server = mockito::Server::new_async().await;
    let _user_mock = server
        .mock("GET", "/users/octocat")
        .with_status(200)
        .with_body(USER_BODY)
        .create_async()
        .await;
    let _repos_mock = server
        .mock("GET", "/users/octocat/repos?per_page=100")
        .with_status(200)
        .with_body(
            r#"[
                {"language": "Rust"},
                {"language": "Python"},
                {"language": "Python"},
                {"language": "Rust"}
            ]"#,
        )
        .create_async()
        .await;

    let matcher = matcher_for(&server);
    let report = matcher
        .compute_match(&[], &[], "https://github.com/octocat")
        .await;

    assert_eq!(report.stats.top_language.as_deref(), Some("Python"));
}
