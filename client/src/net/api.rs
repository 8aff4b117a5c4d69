//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, addressed and
//! credentialed by the `ApiConfig` the caller passes in.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser session.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs with display-ready messages instead of panics
//! so failed fetches degrade a view without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ChartData, HistoryEntry, ListingRow, LoginRequest, RegisterRequest, SearchRequest, SessionUser,
};
use crate::config::ApiConfig;

/// Ends the backend session and clears its cookie.
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

#[cfg(not(feature = "hydrate"))]
const NOT_IN_BROWSER: &str = "not available on server";

/// Admin listings served as wrapped arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    Subjects,
    Chapters,
    Quizzes,
    Questions,
    Users,
}

impl Listing {
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Subjects,
        Self::Chapters,
        Self::Quizzes,
        Self::Questions,
    ];

    /// Heading shown above rows of this listing.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Subjects => "Subjects",
            Self::Chapters => "Chapters",
            Self::Quizzes => "Quizzes",
            Self::Questions => "Questions",
            Self::Users => "Users",
        }
    }

    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Subjects => "/api/subjects",
            Self::Chapters => "/api/chapters",
            Self::Quizzes => "/api/quizzes",
            Self::Questions => "/api/questions",
            Self::Users => "/api/users",
        }
    }

    /// Key wrapping the array in the response body.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Subjects => "subjects",
            Self::Chapters => "chapters",
            Self::Quizzes => "quizzes",
            Self::Questions => "questions",
            Self::Users => "users",
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn failure_message(action: &str, status: u16, detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("{action} failed: {detail}"),
        _ => format!("{action} failed: {status}"),
    }
}

#[cfg(feature = "hydrate")]
fn credentials(config: &ApiConfig) -> web_sys::RequestCredentials {
    if config.with_credentials {
        web_sys::RequestCredentials::Include
    } else {
        web_sys::RequestCredentials::SameOrigin
    }
}

#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response) -> Option<String> {
    resp.json::<super::types::ErrorBody>()
        .await
        .ok()
        .map(|body| body.error)
}

/// Sign in via `POST /api/login`.
///
/// # Errors
///
/// Returns the backend's error text (e.g. "Invalid credentials") or a
/// transport error.
pub async fn login(config: &ApiConfig, req: &LoginRequest) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.url("/api/login"))
            .credentials(credentials(config))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("login", status, detail.as_deref()));
        }
        let body: super::types::LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// End the session via `POST /api/logout`.
///
/// # Errors
///
/// Returns a transport error or the failure status; the caller still leaves
/// for the login view.
pub async fn logout(config: &ApiConfig) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.url(LOGOUT_ENDPOINT))
            .credentials(credentials(config))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("logout", status, detail.as_deref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Create an account via `POST /api/register`.
///
/// # Errors
///
/// Returns the backend's error text (e.g. "User already exists") or a
/// transport error.
pub async fn register(config: &ApiConfig, req: &RegisterRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.url("/api/register"))
            .credentials(credentials(config))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("registration", status, detail.as_deref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch one of the admin listings.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body shape.
pub async fn fetch_listing(config: &ApiConfig, listing: Listing) -> Result<Vec<ListingRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.url(listing.endpoint()))
            .credentials(credentials(config))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message(listing.key(), status, detail.as_deref()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        super::types::listing_rows(&body, listing.key())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, listing);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Fetch the signed-in user's attempts from `GET /api/user/quiz_history`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_quiz_history(config: &ApiConfig) -> Result<Vec<HistoryEntry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.url("/api/user/quiz_history"))
            .credentials(credentials(config))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("quiz history", status, detail.as_deref()));
        }
        let body: super::types::HistoryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.history)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(NOT_IN_BROWSER.to_owned())
    }
}

/// Search every resource via `POST /api/admin/search`, returning rows grouped
/// by listing in `Listing` order; empty groups are omitted.
///
/// # Errors
///
/// Returns an error string on transport failure, non-OK status, or an
/// unexpected body shape.
pub async fn search(config: &ApiConfig, req: &SearchRequest) -> Result<Vec<(Listing, Vec<ListingRow>)>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.url("/api/admin/search"))
            .credentials(credentials(config))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("search", status, detail.as_deref()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        group_search_results(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, req);
        Err(NOT_IN_BROWSER.to_owned())
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn group_search_results(body: &serde_json::Value) -> Result<Vec<(Listing, Vec<ListingRow>)>, String> {
    let results = body
        .get("results")
        .ok_or_else(|| "response has no `results`".to_owned())?;
    let mut groups = Vec::new();
    for listing in Listing::ALL {
        let rows = super::types::listing_rows(results, listing.key())?;
        if !rows.is_empty() {
            groups.push((listing, rows));
        }
    }
    Ok(groups)
}

/// Fetch average scores per quiz from `GET /api/admin/charts`.
///
/// # Errors
///
/// Returns an error string on transport failure or non-OK status.
pub async fn fetch_chart_data(config: &ApiConfig) -> Result<ChartData, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.url("/api/admin/charts"))
            .credentials(credentials(config))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = error_detail(resp).await;
            return Err(failure_message("charts", status, detail.as_deref()));
        }
        let body: super::types::ChartResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.chart_data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(NOT_IN_BROWSER.to_owned())
    }
}
