use super::*;
use routes::Resolved;

#[test]
fn attempt_href_builds_quiz_path() {
    assert_eq!(attempt_href(42), "/user/quiz/42/attempt");
}

#[test]
fn attempt_href_resolves_back_to_attempt_view() {
    assert_eq!(
        app_routes().resolve(&attempt_href(7)),
        Ok(Resolved::View {
            view: ViewId::QuizAttempt,
            params: quiz_params("7"),
        })
    );
}

#[test]
fn attempt_hint_points_at_history_only() {
    let hint = attempt_hint("7");
    assert_eq!(hint, "Scores for quiz 7 are listed under Quiz History.");
    assert!(!hint.contains("submit"));
}
