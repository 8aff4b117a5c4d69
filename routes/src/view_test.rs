use super::*;

#[test]
fn all_lists_each_view_once() {
    let mut seen = ViewId::ALL.to_vec();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), ViewId::ALL.len());
}

#[test]
fn names_are_unique_snake_case() {
    let mut names: Vec<&str> = ViewId::ALL.iter().map(|v| v.as_str()).collect();
    assert!(
        names
            .iter()
            .all(|n| n.chars().all(|c| c.is_ascii_lowercase() || c == '_'))
    );
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), ViewId::ALL.len());
}

#[test]
fn display_uses_stable_name() {
    assert_eq!(ViewId::QuizAttempt.to_string(), "quiz_attempt");
    assert_eq!(ViewId::AdminDashboard.to_string(), "admin_dashboard");
}

#[test]
fn areas_split_public_user_and_admin_views() {
    assert_eq!(ViewId::Login.area(), Area::Public);
    assert_eq!(ViewId::Register.area(), Area::Public);
    assert_eq!(ViewId::QuizHistory.area(), Area::User);
    assert_eq!(ViewId::Charts.area(), Area::Admin);
    assert_eq!(ViewId::ManageUsers.area(), Area::Admin);
}

#[test]
fn titles_are_not_empty() {
    assert!(ViewId::ALL.iter().all(|v| !v.title().is_empty()));
}
