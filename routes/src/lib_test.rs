use super::*;

fn small_table() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry::redirect("/", "/home").expect("root"),
        RouteEntry::view("/home", ViewId::UserDashboard).expect("home"),
        RouteEntry::view("/quiz/:id", ViewId::QuizAttempt)
            .expect("quiz")
            .with_props(),
    ])
    .expect("table")
}

// =============================================================
// Pattern parsing
// =============================================================

#[test]
fn pattern_splits_into_literal_and_param_segments() {
    let entry = RouteEntry::view("/user/quiz/:id/attempt", ViewId::QuizAttempt).expect("entry");
    assert_eq!(
        entry.segments(),
        &[
            Segment::Literal("user"),
            Segment::Literal("quiz"),
            Segment::Param("id"),
            Segment::Literal("attempt"),
        ]
    );
    assert_eq!(entry.param_name(), Some("id"));
    assert!(!entry.props_from_params());
}

#[test]
fn root_pattern_has_no_segments() {
    let entry = RouteEntry::redirect("/", "/login").expect("entry");
    assert!(entry.segments().is_empty());
    assert_eq!(entry.param_name(), None);
}

#[test]
fn pattern_without_leading_slash_is_rejected() {
    assert_eq!(
        RouteEntry::view("login", ViewId::Login),
        Err(RouteError::InvalidPattern { pattern: "login" })
    );
}

#[test]
fn unnamed_param_is_rejected() {
    assert_eq!(
        RouteEntry::view("/quiz/:", ViewId::QuizAttempt),
        Err(RouteError::InvalidPattern { pattern: "/quiz/:" })
    );
}

#[test]
fn second_param_is_rejected() {
    assert_eq!(
        RouteEntry::view("/quiz/:id/:part", ViewId::QuizAttempt),
        Err(RouteError::MultipleParams {
            pattern: "/quiz/:id/:part"
        })
    );
}

// =============================================================
// Table construction
// =============================================================

#[test]
fn identical_patterns_are_rejected() {
    let result = RouteTable::new(vec![
        RouteEntry::view("/login", ViewId::Login).expect("a"),
        RouteEntry::view("/login/", ViewId::Register).expect("b"),
    ]);
    assert_eq!(
        result,
        Err(RouteError::DuplicatePattern {
            pattern: "/login/",
            existing: "/login"
        })
    );
}

#[test]
fn param_overlapping_literal_is_rejected() {
    let result = RouteTable::new(vec![
        RouteEntry::view("/quiz/new", ViewId::ManageQuizzes).expect("a"),
        RouteEntry::view("/quiz/:id", ViewId::QuizAttempt).expect("b"),
    ]);
    assert!(matches!(result, Err(RouteError::DuplicatePattern { .. })));
}

#[test]
fn view_bound_twice_is_rejected() {
    let result = RouteTable::new(vec![
        RouteEntry::view("/login", ViewId::Login).expect("a"),
        RouteEntry::view("/signin", ViewId::Login).expect("b"),
    ]);
    assert_eq!(result, Err(RouteError::DuplicateView(ViewId::Login)));
}

#[test]
fn entries_keep_declaration_order() {
    let table = small_table();
    let patterns: Vec<&str> = table.entries().map(RouteEntry::pattern).collect();
    assert_eq!(patterns, ["/", "/home", "/quiz/:id"]);
}

// =============================================================
// Resolution and building on a custom table
// =============================================================

#[test]
fn root_follows_declared_redirect() {
    assert_eq!(small_table().resolve("/"), Ok(Resolved::Redirect("/home")));
}

#[test]
fn doubled_slashes_collapse() {
    assert_eq!(
        small_table().resolve("//quiz//9"),
        Ok(Resolved::View {
            view: ViewId::QuizAttempt,
            params: quiz_params("9")
        })
    );
}

#[test]
fn fragment_before_query_is_stripped() {
    assert_eq!(
        small_table().resolve("/home#a?b"),
        Ok(Resolved::View {
            view: ViewId::UserDashboard,
            params: Params::new()
        })
    );
}

#[test]
fn unregistered_view_cannot_be_built() {
    assert_eq!(
        small_table().path_of(ViewId::Charts),
        Err(RouteError::UnknownView(ViewId::Charts))
    );
}

#[test]
fn empty_param_counts_as_missing() {
    assert_eq!(
        small_table().build_path(ViewId::QuizAttempt, &quiz_params("")),
        Err(RouteError::MissingParam {
            view: ViewId::QuizAttempt,
            param: "id"
        })
    );
}

#[test]
fn values_the_browser_would_rewrite_are_rejected() {
    for value in ["a/b", "a?b", "a#b", "a b", "50%", "%20", ".", "..", "caf\u{e9}"] {
        assert_eq!(
            small_table().build_path(ViewId::QuizAttempt, &quiz_params(value)),
            Err(RouteError::InvalidParam {
                view: ViewId::QuizAttempt,
                param: "id",
                value: value.to_owned()
            })
        );
    }
}

#[test]
fn unreserved_values_build_and_resolve_unchanged() {
    let table = small_table();
    for value in ["42", "quiz-7", "v1.2", "a_b~c", "..."] {
        let path = table
            .build_path(ViewId::QuizAttempt, &quiz_params(value))
            .expect("plain segment builds");
        assert_eq!(
            table.resolve(&path),
            Ok(Resolved::View {
                view: ViewId::QuizAttempt,
                params: quiz_params(value)
            })
        );
    }
}

#[test]
fn extra_params_are_ignored_when_building() {
    let mut params = quiz_params("5");
    params.insert("unused".to_owned(), "x".to_owned());
    assert_eq!(
        small_table().build_path(ViewId::QuizAttempt, &params),
        Ok("/quiz/5".to_owned())
    );
}

#[test]
fn error_messages_name_the_failure() {
    let err = RouteError::MissingParam {
        view: ViewId::QuizAttempt,
        param: "id",
    };
    assert_eq!(
        err.to_string(),
        "missing value for parameter `id` of view quiz_attempt"
    );
    let err = RouteError::NoMatchingRoute {
        path: "/x".to_owned(),
    };
    assert_eq!(err.to_string(), "no route matches path: /x");
}
