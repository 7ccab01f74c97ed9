// src/state/form.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::AnalysisRequest;

/// Investment time horizon. Closed set, passed through to the service
/// verbatim; `Medium` is the form default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "short+")]
    ShortPlus,
    #[serde(rename = "short")]
    Short,
    #[default]
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "long")]
    Long,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::ShortPlus, Period::Short, Period::Medium, Period::Long];

    /// Value sent on the wire and echoed into the log.
    pub fn wire(&self) -> &'static str {
        match self {
            Period::ShortPlus => "short+",
            Period::Short => "short",
            Period::Medium => "medium",
            Period::Long => "long",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::ShortPlus => "Short+",
            Period::Short => "Short",
            Period::Medium => "Medium",
            Period::Long => "Long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please provide symbol and investment period")]
    EmptySymbol,
}

/// Current form values. Persisted across runs via eframe storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormState {
    pub symbol: String,
    pub period: Period,
    pub model: String,
}

impl FormState {
    /// Symbols are upper-cased as the user types.
    pub fn normalize_symbol(&mut self) {
        let upper = self.symbol.to_uppercase();
        if upper != self.symbol {
            self.symbol = upper;
        }
    }

    /// Whether the Analyze button is enabled at all.
    pub fn can_submit(&self) -> bool {
        !self.symbol.trim().is_empty()
    }

    /// The single submission gate: either a wire-ready request or a
    /// validation error. No network call may happen without an `Ok` here.
    pub fn validate(&self) -> Result<AnalysisRequest, FormError> {
        let symbol = self.symbol.trim();
        if symbol.is_empty() {
            return Err(FormError::EmptySymbol);
        }

        let model = self.model.trim();
        Ok(AnalysisRequest {
            model: (!model.is_empty()).then(|| model.to_string()),
            symbol: symbol.to_uppercase(),
            period: self.period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(symbol: &str, model: &str) -> FormState {
        FormState {
            symbol: symbol.to_string(),
            period: Period::default(),
            model: model.to_string(),
        }
    }

    #[test]
    fn empty_symbol_is_rejected() {
        assert_eq!(form("", "").validate(), Err(FormError::EmptySymbol));
    }

    #[test]
    fn whitespace_symbol_is_rejected() {
        assert_eq!(form("   \t", "").validate(), Err(FormError::EmptySymbol));
    }

    #[test]
    fn valid_form_produces_trimmed_uppercase_symbol() {
        let request = form("  aapl ", "").validate().unwrap();
        assert_eq!(request.symbol, "AAPL");
        assert_eq!(request.period, Period::Medium);
    }

    #[test]
    fn blank_model_becomes_none() {
        let request = form("AAPL", "   ").validate().unwrap();
        assert_eq!(request.model, None);
    }

    #[test]
    fn model_is_trimmed_when_present() {
        let request = form("AAPL", " gpt-4o ").validate().unwrap();
        assert_eq!(request.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn normalize_symbol_uppercases_in_place() {
        let mut state = form("nvda", "");
        state.normalize_symbol();
        assert_eq!(state.symbol, "NVDA");
    }

    #[test]
    fn period_default_is_medium() {
        assert_eq!(Period::default(), Period::Medium);
    }

    #[test]
    fn serde_rename_matches_wire_strings() {
        for period in Period::ALL {
            let json = serde_json::to_value(period).unwrap();
            assert_eq!(json, period.wire());
        }
    }
}
