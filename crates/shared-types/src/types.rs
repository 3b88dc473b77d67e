use serde::{Deserialize, Serialize};

/// Fixed classification buckets for bias detection rules and results.
///
/// Declaration order is significant: analysis results list findings in this
/// order, and the default rule tables are scanned in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasCategory {
    Gender,
    Political,
    Racial,
    Other,
}

impl BiasCategory {
    /// All categories in declaration order
    pub const ALL: [BiasCategory; 4] = [
        BiasCategory::Gender,
        BiasCategory::Political,
        BiasCategory::Racial,
        BiasCategory::Other,
    ];

    /// Display name for UI labels
    pub fn name(&self) -> &'static str {
        match self {
            BiasCategory::Gender => "gender",
            BiasCategory::Political => "political",
            BiasCategory::Racial => "racial",
            BiasCategory::Other => "other",
        }
    }
}

/// Overall bias severity derived from the analysis score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLevel {
    None,
    Minimal,
    Moderate,
    Significant,
}

impl BiasLevel {
    /// Map an overall score in [0,1] to a severity band
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            BiasLevel::Significant
        } else if score > 0.3 {
            BiasLevel::Moderate
        } else if score > 0.0 {
            BiasLevel::Minimal
        } else {
            BiasLevel::None
        }
    }
}

/// Per-category analysis outcome. Only categories with at least one match
/// appear in a result; `confidence` is therefore always > 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFinding {
    pub category: BiasCategory,
    /// Accumulated score in [0,1]; not a statistical probability
    pub confidence: f64,
    /// Up to 3 unique matched substrings, verbatim from the input
    pub examples: Vec<String>,
    pub explanation: String,
}

/// A contiguous piece of the input, optionally tagged with the category that
/// matched it. Concatenating all spans of a result reproduces the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub category: Option<BiasCategory>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn tagged(text: impl Into<String>, category: BiasCategory) -> Self {
        Self {
            text: text.into(),
            category: Some(category),
        }
    }
}

/// Full result of a bias analysis pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasAnalysis {
    /// Mean of the retained categories' confidences; 0 when nothing matched
    pub overall_score: f64,
    /// Findings in category declaration order, confidence > 0 only
    pub findings: Vec<CategoryFinding>,
    /// Unique suggestions in first-insertion order, severity banner first
    /// (or the sole "no significant bias" message when the score is 0)
    pub suggestions: Vec<String>,
    /// Span-annotated input for rendering; `None` for empty input
    pub highlighted_text: Option<Vec<TextSpan>>,
}

impl BiasAnalysis {
    pub fn level(&self) -> BiasLevel {
        BiasLevel::from_score(self.overall_score)
    }
}

/// Gate decision for a piece of submitted content. A toxic verdict must block
/// persistence of the content by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxicityVerdict {
    pub is_toxic: bool,
    pub reason: Option<String>,
}

impl ToxicityVerdict {
    pub fn clean() -> Self {
        Self {
            is_toxic: false,
            reason: None,
        }
    }

    pub fn flagged(reason: impl Into<String>) -> Self {
        Self {
            is_toxic: true,
            reason: Some(reason.into()),
        }
    }
}

/// Combined pre-submission screening: gate verdict plus, for clean content,
/// the advisory bias analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub verdict: ToxicityVerdict,
    pub analysis: Option<BiasAnalysis>,
    pub checked_at: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_order_is_stable() {
        let names: Vec<_> = BiasCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["gender", "political", "racial", "other"]);
    }

    #[test]
    fn test_level_bands() {
        assert_eq!(BiasLevel::from_score(0.0), BiasLevel::None);
        assert_eq!(BiasLevel::from_score(0.16), BiasLevel::Minimal);
        assert_eq!(BiasLevel::from_score(0.3), BiasLevel::Minimal);
        assert_eq!(BiasLevel::from_score(0.31), BiasLevel::Moderate);
        assert_eq!(BiasLevel::from_score(0.7), BiasLevel::Moderate);
        assert_eq!(BiasLevel::from_score(0.71), BiasLevel::Significant);
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&BiasCategory::Political).unwrap();
        assert_eq!(json, "\"political\"");
    }

    #[test]
    fn test_span_round_trips_through_json() {
        let span = TextSpan::tagged("chairman", BiasCategory::Gender);
        let json = serde_json::to_string(&span).unwrap();
        let back: TextSpan = serde_json::from_str(&json).unwrap();
        assert_eq!(span, back);
    }
}
