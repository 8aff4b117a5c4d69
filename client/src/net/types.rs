//! Wire DTOs for the Quiz Master backend.
//!
//! DESIGN
//! ======
//! Only the fields the views display are modelled. Admin listings share one
//! row shape (`ListingRow`) extracted from loosely-typed JSON, since each
//! resource names its human-readable column differently.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// User returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl SessionUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub user: SessionUser,
}

/// Error body the backend sends with 4xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// One past attempt from `GET /api/user/quiz_history`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub quiz_id: i64,
    pub total_score: i64,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}

/// Body of `POST /api/admin/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub term: String,
}

/// Average score per quiz from `GET /api/admin/charts`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartResponse {
    pub chart_data: ChartData,
}

/// One bar of the average-score chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub score: f64,
    /// Bar length relative to the highest score, in percent.
    pub width_pct: f64,
}

impl ChartData {
    /// Pair labels with scores; unpaired trailing values are dropped.
    #[must_use]
    pub fn bars(&self) -> Vec<ChartBar> {
        let max = self.scores.iter().copied().fold(0.0_f64, f64::max);
        self.labels
            .iter()
            .zip(&self.scores)
            .map(|(label, &score)| ChartBar {
                label: label.clone(),
                score,
                width_pct: if max > 0.0 { score / max * 100.0 } else { 0.0 },
            })
            .collect()
    }
}

/// Displayable row of an admin listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub id: i64,
    pub label: String,
}

/// Columns tried, in order, for a row's label.
const LABEL_FIELDS: [&str; 6] = [
    "name",
    "full_name",
    "question_statement",
    "question_text",
    "email",
    "remarks",
];

/// Extract rows from a wrapped listing such as `{"subjects": [...]}`.
///
/// # Errors
///
/// Returns an error string when `key` is missing or not an array, or when a
/// row has no integer `id`.
pub fn listing_rows(body: &Value, key: &str) -> Result<Vec<ListingRow>, String> {
    let items = body
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("response has no `{key}` list"))?;
    items
        .iter()
        .map(|item| {
            let id = item
                .get("id")
                .and_then(Value::as_i64)
                .ok_or_else(|| format!("`{key}` row without id"))?;
            let label = LABEL_FIELDS
                .iter()
                .find_map(|field| item.get(*field).and_then(Value::as_str))
                .filter(|label| !label.is_empty())
                .map_or_else(|| format!("#{id}"), str::to_owned);
            Ok(ListingRow { id, label })
        })
        .collect()
}
