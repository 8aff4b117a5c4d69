//! Quiz-taker pages: dashboard, attempt screen, and attempt history.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use routes::{Area, ViewId, app_routes, quiz_params};

use crate::app::href;
use crate::components::nav_bar::NavBar;
use crate::config::ApiConfig;
use crate::net::api::{Listing, fetch_listing, fetch_quiz_history};

/// Path of the attempt screen for one quiz.
pub(crate) fn attempt_href(quiz_id: i64) -> String {
    app_routes()
        .build_path(ViewId::QuizAttempt, &quiz_params(quiz_id.to_string()))
        .unwrap_or_else(|_| href(ViewId::UserDashboard))
}

/// Line under the attempt heading pointing at where scores are listed.
pub(crate) fn attempt_hint(quiz_id: &str) -> String {
    format!(
        "Scores for quiz {quiz_id} are listed under {}.",
        ViewId::QuizHistory.title()
    )
}

/// Available quizzes, each linking to its attempt screen.
#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let quizzes = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_listing(&api, Listing::Quizzes).await }
    });

    view! {
        <NavBar area=Area::User current=ViewId::UserDashboard/>
        <main class="page">
            <h1>"Available quizzes"</h1>
            <Suspense fallback=move || view! { <p>"Loading quizzes..."</p> }>
                {move || {
                    quizzes
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                view! {
                                    <ul class="quiz-list">
                                        {list
                                            .into_iter()
                                            .map(|quiz| {
                                                view! {
                                                    <li class="quiz-list__item">
                                                        <span>{quiz.label}</span>
                                                        <a class="btn btn--primary" href={attempt_href(quiz.id)}>
                                                            "Start"
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}

/// Attempt screen for the quiz named in the path.
#[component]
pub fn QuizAttemptPage(quiz_id: String) -> impl IntoView {
    let hint = attempt_hint(&quiz_id);
    view! {
        <NavBar area=Area::User current=ViewId::QuizAttempt/>
        <main class="page">
            <h1>"Quiz " {quiz_id}</h1>
            <p class="page__hint">{hint}</p>
            <a class="btn" href={href(ViewId::QuizHistory)}>"View past attempts"</a>
        </main>
    }
}

/// Scores of the signed-in user's past attempts.
#[component]
pub fn QuizHistoryPage() -> impl IntoView {
    let api = expect_context::<ApiConfig>();
    let history = LocalResource::new(move || {
        let api = api.clone();
        async move { fetch_quiz_history(&api).await }
    });

    view! {
        <NavBar area=Area::User current=ViewId::QuizHistory/>
        <main class="page">
            <h1>"Quiz history"</h1>
            <Suspense fallback=move || view! { <p>"Loading history..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|result| match result {
                            Ok(entries) => {
                                view! {
                                    <table class="history-table">
                                        <thead>
                                            <tr>
                                                <th>"Quiz"</th>
                                                <th>"Score"</th>
                                                <th>"Taken"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {entries
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <tr>
                                                            <td>{entry.quiz_id}</td>
                                                            <td>{entry.total_score}</td>
                                                            <td>{entry.timestamp}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </main>
    }
}
