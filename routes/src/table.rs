//! The application's route declaration.
//!
//! Two legacy router configurations existed for the same client and had
//! drifted apart; this is their union, declared once.

use std::sync::LazyLock;

use crate::{LOGIN_PATH, ROOT_PATH, RouteEntry, RouteError, RouteTable, ViewId};

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

static APP_ROUTES: LazyLock<RouteTable> = LazyLock::new(|| {
    declare_app_routes().unwrap_or_else(|err| panic!("application route table is invalid: {err}"))
});

/// The process-wide application table, built on first use.
#[must_use]
pub fn app_routes() -> &'static RouteTable {
    &APP_ROUTES
}

/// Build a fresh copy of the application table.
///
/// # Errors
///
/// Returns the first declaration error; the table's own tests keep this
/// unreachable.
pub fn declare_app_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::redirect(ROOT_PATH, LOGIN_PATH)?,
        RouteEntry::view(LOGIN_PATH, ViewId::Login)?,
        RouteEntry::view("/register", ViewId::Register)?,
        RouteEntry::view("/user/dashboard", ViewId::UserDashboard)?,
        RouteEntry::view("/user/quiz/:id/attempt", ViewId::QuizAttempt)?.with_props(),
        RouteEntry::view("/user/quiz_history", ViewId::QuizHistory)?,
        RouteEntry::view("/admin/dashboard", ViewId::AdminDashboard)?,
        RouteEntry::view("/admin/subjects", ViewId::ManageSubjects)?,
        RouteEntry::view("/admin/chapters", ViewId::ManageChapters)?,
        RouteEntry::view("/admin/quizzes", ViewId::ManageQuizzes)?,
        RouteEntry::view("/admin/questions", ViewId::ManageQuestions)?,
        RouteEntry::view("/admin/users", ViewId::ManageUsers)?,
        RouteEntry::view("/admin/search", ViewId::Search)?,
        RouteEntry::view("/admin/charts", ViewId::Charts)?,
    ])
}
