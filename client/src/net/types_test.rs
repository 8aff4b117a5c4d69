use super::*;
use serde_json::json;

#[test]
fn login_response_parses_user_role() {
    let body = json!({
        "message": "Login successful!",
        "user": {"id": 1, "email": "admin@123.com", "role": "admin"}
    });
    let parsed: LoginResponse = serde_json::from_value(body).expect("login response");
    assert!(parsed.user.is_admin());
    assert_eq!(parsed.user.email, "admin@123.com");
}

#[test]
fn non_admin_roles_are_users() {
    let user = SessionUser {
        id: 2,
        email: "a@b.com".to_owned(),
        role: "user".to_owned(),
    };
    assert!(!user.is_admin());
}

#[test]
fn register_request_serializes_backend_field_names() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        full_name: "A B".to_owned(),
        password: "pw".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).expect("json"),
        json!({"email": "a@b.com", "full_name": "A B", "password": "pw"})
    );
}

#[test]
fn history_response_parses_entries() {
    let body = json!({"history": [
        {"id": 3, "quiz_id": 7, "total_score": 4, "timestamp": "2024-01-02 10:00:00"}
    ]});
    let parsed: HistoryResponse = serde_json::from_value(body).expect("history");
    assert_eq!(parsed.history.len(), 1);
    assert_eq!(parsed.history[0].quiz_id, 7);
}

#[test]
fn listing_rows_pick_first_available_label() {
    let body = json!({"users": [
        {"id": 1, "email": "a@b.com", "full_name": "Ann"},
        {"id": 2, "email": "c@d.com", "full_name": ""},
    ]});
    let rows = listing_rows(&body, "users").expect("rows");
    assert_eq!(
        rows,
        vec![
            ListingRow { id: 1, label: "Ann".to_owned() },
            ListingRow { id: 2, label: "#2".to_owned() },
        ]
    );
}

#[test]
fn listing_rows_fall_back_to_id() {
    let body = json!({"quizzes": [{"id": 9, "duration": "00:30"}]});
    let rows = listing_rows(&body, "quizzes").expect("rows");
    assert_eq!(rows[0].label, "#9");
}

#[test]
fn listing_rows_require_wrapped_list() {
    assert_eq!(
        listing_rows(&json!({"subjects": {}}), "subjects"),
        Err("response has no `subjects` list".to_owned())
    );
    assert_eq!(
        listing_rows(&json!({"subjects": [{"name": "x"}]}), "subjects"),
        Err("`subjects` row without id".to_owned())
    );
}

#[test]
fn search_results_reuse_listing_rows() {
    let body = json!({"results": {
        "questions": [{"id": 4, "quiz_id": 1, "question_text": "What is 2+2?"}],
        "quizzes": [{"id": 8, "chapter_id": 2, "duration": "00:10"}]
    }});
    let results = &body["results"];
    assert_eq!(
        listing_rows(results, "questions").expect("questions")[0].label,
        "What is 2+2?"
    );
    assert_eq!(listing_rows(results, "quizzes").expect("quizzes")[0].label, "#8");
}

#[test]
fn chart_bars_scale_to_highest_score() {
    let body = json!({"chart_data": {"labels": ["Quiz 1", "Quiz 2"], "scores": [2.0, 4.0]}});
    let parsed: ChartResponse = serde_json::from_value(body).expect("chart");
    let bars = parsed.chart_data.bars();
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].label, "Quiz 1");
    assert!((bars[0].width_pct - 50.0).abs() < f64::EPSILON);
    assert!((bars[1].width_pct - 100.0).abs() < f64::EPSILON);
}

#[test]
fn chart_bars_handle_all_zero_scores() {
    let data = ChartData {
        labels: vec!["Quiz 1".to_owned(), "Quiz 2".to_owned()],
        scores: vec![0.0],
    };
    let bars = data.bars();
    assert_eq!(bars.len(), 1);
    assert!(bars[0].width_pct.abs() < f64::EPSILON);
}
