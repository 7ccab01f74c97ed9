// src/state/mod.rs
use serde::{Deserialize, Serialize};

use crate::api::{self, AnalysisRequest, AnalysisResponse, ApiError};
use crate::report::ReportSet;
use crate::state::form::{FormError, FormState};

pub mod form;

/// The whole view state. Serializable, mutated only through the named
/// transitions below; the UI layer reads it and calls into it but holds no
/// state of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub form: FormState,
    pub loading: bool,
    pub log: String,
    pub reports: ReportSet,
    pub report_url: Option<String>,
    pub backend_online: Option<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submission start: raise the loading flag, drop prior results, and
    /// reset the log to the generated starting line.
    pub fn begin_analysis(&mut self, request: &AnalysisRequest) {
        self.loading = true;
        self.reports.clear();
        self.report_url = None;
        self.log = format!(
            "🚀 Starting analysis for {} ({})...\n",
            request.symbol,
            request.period.wire()
        );
    }

    /// Fold the single outcome of an in-flight request back into the view.
    /// Runs exactly once per submission, on success and failure alike, and
    /// is the only place the loading flag is released.
    pub fn finish_analysis(&mut self, outcome: Result<AnalysisResponse, ApiError>, origin: &str) {
        match outcome {
            Ok(response) => {
                // The server log subsumes the local starting line.
                self.log = response.log;
                self.reports = ReportSet::new(response.reports);
                self.report_url = api::resolve_report_url(origin, &response.report_path);
            }
            Err(error) => {
                self.log.push_str(&format!("\n❌ Error: {error}\n"));
            }
        }
        self.loading = false;
    }

    /// Local validation failure: surface it in the log, touch nothing else.
    pub fn warn_invalid_input(&mut self, error: &FormError) {
        self.log.push_str(&format!("⚠️ {error}.\n"));
    }

    pub fn set_backend_online(&mut self, online: bool) {
        self.backend_online = Some(online);
    }
}
