// src/report.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::markdown::{self, Block};

/// One of the seven fixed report sections. Order is significant for layout
/// and stable across renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: [Section; 7] = [
    Section { key: "fundamentals", label: "Fundamentals", icon: "📊" },
    Section { key: "sentiment", label: "Sentiment", icon: "💬" },
    Section { key: "technical", label: "Technical", icon: "📈" },
    Section { key: "research", label: "Research Debate", icon: "🧠" },
    Section { key: "trading", label: "Trading Plan", icon: "🎯" },
    Section { key: "risk", label: "Risk Management", icon: "🛡" },
    Section { key: "finalEval", label: "Final Evaluation", icon: "🏁" },
];

/// The per-section markdown mapping from the last response. Keys outside
/// the fixed set are retained but never rendered; keys that are absent or
/// hold only whitespace count as "no data".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSet {
    sections: HashMap<String, String>,
}

impl ReportSet {
    pub fn new(sections: HashMap<String, String>) -> Self {
        Self { sections }
    }

    /// True until a response has populated any section at all. The results
    /// grid stays hidden while this holds.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Markdown for one section, or `None` when the section should show
    /// the "no data" placeholder instead.
    pub fn section_text(&self, key: &str) -> Option<&str> {
        self.sections
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }
}

/// The full render model for the results grid: every section in catalog
/// order, paired with its parsed block tree, or `None` for the placeholder.
/// Pure in the report set, so identical inputs yield identical structure.
pub fn render_model(reports: &ReportSet) -> Vec<(Section, Option<Vec<Block>>)> {
    SECTIONS
        .iter()
        .map(|section| {
            (
                *section,
                reports.section_text(section.key).map(markdown::parse),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(key: &str, text: &str) -> ReportSet {
        ReportSet::new(HashMap::from([(key.to_string(), text.to_string())]))
    }

    #[test]
    fn seven_sections_in_fixed_order() {
        let keys: Vec<&str> = SECTIONS.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            ["fundamentals", "sentiment", "technical", "research", "trading", "risk", "finalEval"]
        );
    }

    #[test]
    fn one_populated_section_leaves_six_placeholders() {
        let reports = single("fundamentals", "# A");
        let rendered: Vec<bool> = SECTIONS
            .iter()
            .map(|s| reports.section_text(s.key).is_some())
            .collect();
        assert_eq!(rendered, [true, false, false, false, false, false, false]);
    }

    #[test]
    fn blank_content_counts_as_no_data() {
        let reports = single("risk", "   \n  ");
        assert_eq!(reports.section_text("risk"), None);
        // ...but the set itself is not empty, so the grid still shows.
        assert!(!reports.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored_by_the_fixed_catalog() {
        let reports = single("extras", "surplus");
        assert!(SECTIONS.iter().all(|s| reports.section_text(s.key).is_none()));
    }

    #[test]
    fn render_model_formats_present_sections_and_placeholders_the_rest() {
        let model = render_model(&single("fundamentals", "# A"));
        assert_eq!(model.len(), SECTIONS.len());

        let (section, tree) = &model[0];
        assert_eq!(section.key, "fundamentals");
        let blocks = tree.as_ref().unwrap();
        assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));

        for (section, tree) in &model[1..] {
            assert!(tree.is_none(), "{} should be a placeholder", section.key);
        }
    }

    #[test]
    fn render_model_is_stable_across_calls() {
        let reports = single("trading", "- buy\n- hold\n");
        assert_eq!(render_model(&reports), render_model(&reports));
    }

    #[test]
    fn cleared_set_is_empty_again() {
        let mut reports = single("trading", "hold");
        reports.clear();
        assert!(reports.is_empty());
        assert_eq!(reports.section_text("trading"), None);
    }
}
