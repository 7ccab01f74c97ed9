// src/api/mod.rs
use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::state::form::Period;

pub mod error;

pub use error::{ApiError, ApiResult};

/// Wire payload for `POST /analyze`. A blank model is omitted entirely so
/// the server falls back to its configured default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub symbol: String,
    pub period: Period,
}

/// Response body of `POST /analyze`. Every field tolerates absence: the
/// service omits `log` on some paths, and missing section keys mean
/// "no data", not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub log: String,
    #[serde(default)]
    pub reports: HashMap<String, String>,
    #[serde(default)]
    pub report_path: String,
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a full analysis for one symbol. One POST per call, no retries.
    pub async fn analyze(&self, request: &AnalysisRequest) -> ApiResult<AnalysisResponse> {
        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let result = response.json::<AnalysisResponse>().await?;
        Ok(result)
    }

    /// Check service health.
    pub async fn health(&self) -> ApiResult<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;

        Ok(response.status().is_success())
    }
}

/// Resolve a server-relative report path against the service origin.
/// An absent or blank path resolves to nothing (no link is rendered).
pub fn resolve_report_url(origin: &str, report_path: &str) -> Option<String> {
    let path = report_path.trim();
    if path.is_empty() {
        return None;
    }
    Some(format!("{}{}", origin.trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(model: Option<&str>, symbol: &str, period: Period) -> AnalysisRequest {
        AnalysisRequest {
            model: model.map(str::to_string),
            symbol: symbol.to_string(),
            period,
        }
    }

    #[test]
    fn blank_model_is_omitted_from_payload() {
        let value = serde_json::to_value(request(None, "AAPL", Period::Medium)).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("model"));
        assert_eq!(object["symbol"], "AAPL");
        assert_eq!(object["period"], "medium");
    }

    #[test]
    fn explicit_model_is_sent() {
        let value = serde_json::to_value(request(Some("gpt-4o"), "MSFT", Period::Long)).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["period"], "long");
    }

    #[test]
    fn period_wire_values_match_service_enum() {
        for (period, wire) in [
            (Period::ShortPlus, "short+"),
            (Period::Short, "short"),
            (Period::Medium, "medium"),
            (Period::Long, "long"),
        ] {
            let value = serde_json::to_value(request(None, "AAPL", period)).unwrap();
            assert_eq!(value["period"], wire);
        }
    }

    #[test]
    fn response_fields_all_default_when_absent() {
        let response: AnalysisResponse = serde_json::from_str("{}").unwrap();
        assert!(response.log.is_empty());
        assert!(response.reports.is_empty());
        assert!(response.report_path.is_empty());
    }

    #[test]
    fn response_parses_reports_mapping() {
        let body = r##"{
            "log": "done",
            "reports": {"fundamentals": "# A"},
            "report_path": "/static/result_1.log"
        }"##;
        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.log, "done");
        assert_eq!(response.reports["fundamentals"], "# A");
        assert_eq!(response.report_path, "/static/result_1.log");
    }

    #[test]
    fn report_url_prefixes_service_origin() {
        assert_eq!(
            resolve_report_url("http://localhost:8000", "/reports/AAPL.html").as_deref(),
            Some("http://localhost:8000/reports/AAPL.html")
        );
    }

    #[test]
    fn report_url_tolerates_trailing_slash_on_origin() {
        assert_eq!(
            resolve_report_url("http://localhost:8000/", "/reports/AAPL.html").as_deref(),
            Some("http://localhost:8000/reports/AAPL.html")
        );
    }

    #[test]
    fn blank_report_path_resolves_to_nothing() {
        assert_eq!(resolve_report_url("http://localhost:8000", ""), None);
        assert_eq!(resolve_report_url("http://localhost:8000", "   "), None);
    }

    #[test]
    fn client_strips_trailing_slash_from_base_url() {
        let client = AnalysisClient::new("http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
