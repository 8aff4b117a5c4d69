use super::*;
use serde_json::json;

#[test]
fn listing_endpoints_live_under_api_prefix() {
    for listing in Listing::ALL {
        assert_eq!(listing.endpoint(), format!("/api/{}", listing.key()));
    }
}

#[test]
fn listing_url_uses_configured_base() {
    let config = ApiConfig::new("http://backend:5000/", true);
    assert_eq!(
        config.url(Listing::Chapters.endpoint()),
        "http://backend:5000/api/chapters"
    );
}

#[test]
fn logout_posts_to_configured_backend() {
    let config = ApiConfig::new("https://quiz.example.com", true);
    assert_eq!(config.url(LOGOUT_ENDPOINT), "https://quiz.example.com/api/logout");
}

#[test]
fn logout_failure_reports_status_or_detail() {
    assert_eq!(failure_message("logout", 401, None), "logout failed: 401");
    assert_eq!(
        failure_message("logout", 500, Some("session store down")),
        "logout failed: session store down"
    );
}

#[test]
fn failure_message_prefers_backend_detail() {
    assert_eq!(
        failure_message("login", 401, Some("Invalid credentials")),
        "login failed: Invalid credentials"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message("users", 403, None), "users failed: 403");
    assert_eq!(failure_message("users", 500, Some("")), "users failed: 500");
}

#[test]
fn search_results_group_by_listing_and_skip_empty() {
    let body = json!({"results": {
        "users": [{"id": 1, "email": "a@b.com", "full_name": "Ann"}],
        "subjects": [],
        "chapters": [],
        "quizzes": [],
        "questions": [{"id": 3, "quiz_id": 1, "question_text": "Capital of France?"}]
    }});
    let groups = group_search_results(&body).expect("groups");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, Listing::Users);
    assert_eq!(groups[0].1[0].label, "Ann");
    assert_eq!(groups[1].0, Listing::Questions);
}

#[test]
fn search_results_require_results_object() {
    assert_eq!(
        group_search_results(&json!({"error": "Unauthorized"})),
        Err("response has no `results`".to_owned())
    );
}
