//! Wire types and HTTP client for the dashboard's JSON endpoints.
//!
//! Both endpoints are plain `GET`s served by the backend:
//! - `/api/prediction-stats` → [`PredictionStats`]
//! - `/api/monthly-trend` → [`MonthlyTrend`]
//!
//! On the web the client uses `gloo-net` (browser `fetch`, relative URLs resolve
//! against the page origin). Native builds go through `reqwest` and need an
//! absolute base URL.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub const PREDICTION_STATS_PATH: &str = "/api/prediction-stats";
pub const MONTHLY_TREND_PATH: &str = "/api/monthly-trend";

/// Churn / no-churn prediction counts for the signed-in user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionStats {
    pub no_churn: u64,
    pub churn: u64,
}

impl PredictionStats {
    pub fn total(&self) -> u64 {
        self.no_churn.saturating_add(self.churn)
    }
}

/// Predictions per month, position-aligned (`months[i]` ↔ `counts[i]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub months: Vec<String>,
    pub counts: Vec<u64>,
}

impl MonthlyTrend {
    pub fn is_aligned(&self) -> bool {
        self.months.len() == self.counts.len()
    }

    /// `(month, count)` pairs. Stops at the shorter series.
    pub fn points(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.months
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("{url} returned an unexpected body: {message}")]
    Decode { url: String, message: String },
}

/// Thin client over the dashboard endpoints. Cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is prepended to every endpoint path. An empty base keeps URLs
    /// relative (same origin in the browser).
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.trim_end_matches('/'), path)
    }

    pub async fn prediction_stats(&self) -> Result<PredictionStats, ApiError> {
        self.get_json(PREDICTION_STATS_PATH).await
    }

    pub async fn monthly_trend(&self) -> Result<MonthlyTrend, ApiError> {
        self.get_json(MONTHLY_TREND_PATH).await
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = self.endpoint(path);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network {
                url: url.clone(),
                message: err.to_string(),
            })?;

        if !response.ok() {
            return Err(ApiError::Status {
                url,
                status: response.status(),
            });
        }

        let body = response.text().await.map_err(|err| ApiError::Network {
            url: url.clone(),
            message: err.to_string(),
        })?;
        decode(&url, &body)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        let response = reqwest::get(&url).await.map_err(|err| ApiError::Network {
            url: url.clone(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|err| ApiError::Network {
            url: url.clone(),
            message: err.to_string(),
        })?;
        decode(&url, &body)
    }
}

/// Decode a JSON response body fetched from `url`.
pub fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prediction_stats() {
        let stats: PredictionStats =
            decode(PREDICTION_STATS_PATH, r#"{"churn": 20, "no_churn": 80}"#).unwrap();
        assert_eq!(
            stats,
            PredictionStats {
                no_churn: 80,
                churn: 20
            }
        );
        assert_eq!(stats.total(), 100);
    }

    #[test]
    fn decodes_monthly_trend_points() {
        let trend: MonthlyTrend = decode(
            MONTHLY_TREND_PATH,
            r#"{"months": ["2024-01", "2024-02"], "counts": [5, 9]}"#,
        )
        .unwrap();
        assert!(trend.is_aligned());
        let points: Vec<_> = trend.points().collect();
        assert_eq!(points, vec![("2024-01", 5), ("2024-02", 9)]);
    }

    #[test]
    fn html_error_page_is_a_decode_error() {
        let err = decode::<PredictionStats>(PREDICTION_STATS_PATH, "<!doctype html><p>login</p>")
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().contains(PREDICTION_STATS_PATH));
    }

    #[test]
    fn error_payload_missing_fields_is_rejected() {
        let err = decode::<MonthlyTrend>(MONTHLY_TREND_PATH, r#"{"error": "Access denied"}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        assert_eq!(
            ApiClient::new("http://127.0.0.1:5000/").endpoint(MONTHLY_TREND_PATH),
            "http://127.0.0.1:5000/api/monthly-trend"
        );
        assert_eq!(
            ApiClient::new("").endpoint(PREDICTION_STATS_PATH),
            "/api/prediction-stats"
        );
    }
}
