//! Closed set of views the client knows how to mount.

use std::fmt;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Identifier of a routable view.
///
/// The client maps each variant onto a component with an exhaustive `match`,
/// so adding a view without a component is a compile error there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewId {
    Login,
    Register,
    UserDashboard,
    QuizAttempt,
    QuizHistory,
    AdminDashboard,
    ManageSubjects,
    ManageChapters,
    ManageQuizzes,
    ManageQuestions,
    ManageUsers,
    Search,
    Charts,
}

/// Which part of the application a view belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    /// Reachable without a session (login, registration).
    Public,
    /// Quiz-taking screens for regular users.
    User,
    /// Administration screens.
    Admin,
}

impl ViewId {
    /// Every view, in navigation order.
    pub const ALL: [Self; 13] = [
        Self::Login,
        Self::Register,
        Self::UserDashboard,
        Self::QuizAttempt,
        Self::QuizHistory,
        Self::AdminDashboard,
        Self::ManageSubjects,
        Self::ManageChapters,
        Self::ManageQuizzes,
        Self::ManageQuestions,
        Self::ManageUsers,
        Self::Search,
        Self::Charts,
    ];

    /// Stable snake_case name, used in logs and error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
            Self::UserDashboard => "user_dashboard",
            Self::QuizAttempt => "quiz_attempt",
            Self::QuizHistory => "quiz_history",
            Self::AdminDashboard => "admin_dashboard",
            Self::ManageSubjects => "manage_subjects",
            Self::ManageChapters => "manage_chapters",
            Self::ManageQuizzes => "manage_quizzes",
            Self::ManageQuestions => "manage_questions",
            Self::ManageUsers => "manage_users",
            Self::Search => "search",
            Self::Charts => "charts",
        }
    }

    /// Human-readable label for navigation links and page titles.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::UserDashboard => "Dashboard",
            Self::QuizAttempt => "Quiz Attempt",
            Self::QuizHistory => "Quiz History",
            Self::AdminDashboard => "Admin Dashboard",
            Self::ManageSubjects => "Subjects",
            Self::ManageChapters => "Chapters",
            Self::ManageQuizzes => "Quizzes",
            Self::ManageQuestions => "Questions",
            Self::ManageUsers => "Users",
            Self::Search => "Search",
            Self::Charts => "Charts",
        }
    }

    #[must_use]
    pub fn area(self) -> Area {
        match self {
            Self::Login | Self::Register => Area::Public,
            Self::UserDashboard | Self::QuizAttempt | Self::QuizHistory => Area::User,
            Self::AdminDashboard
            | Self::ManageSubjects
            | Self::ManageChapters
            | Self::ManageQuizzes
            | Self::ManageQuestions
            | Self::ManageUsers
            | Self::Search
            | Self::Charts => Area::Admin,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
