//! Bias scoring over a pattern registry
//!
//! `analyze` runs every rule of every category against the input, accumulates
//! per-category confidence, collects verbatim examples and rewrite
//! suggestions, and reconstructs a highlighted copy of the input.

use shared_types::{BiasAnalysis, BiasLevel, CategoryFinding};

use crate::highlight::{self, RuleMatch};
use crate::registry::PatternRegistry;

/// Banner shown first when the overall score is above 0.7
pub const SIGNIFICANT_BIAS_MESSAGE: &str =
    "Consider revising your text to reduce significant bias.";
/// Banner shown first when the overall score is in (0.3, 0.7]
pub const SOME_BIAS_MESSAGE: &str =
    "Your text contains some bias. Consider the suggestions below.";
/// Banner shown first when the overall score is in (0, 0.3]
pub const MINIMAL_BIAS_MESSAGE: &str =
    "Your text contains minimal bias, but could be improved with the suggestions below.";
/// Sole suggestion when nothing matched
pub const NO_BIAS_MESSAGE: &str = "No significant bias detected in your text.";

/// Verbatim examples kept per category
const MAX_EXAMPLES: usize = 3;

/// Analyze `text` against `registry`.
///
/// Total over all string input: empty or whitespace-only text short-circuits
/// to the zero result, everything else produces a full [`BiasAnalysis`]. The
/// confidence contribution of each occurrence is `min(0.1 + weight * 0.1, 1)`
/// and the cumulative category confidence is clamped to 1 after every
/// increment.
pub fn analyze(registry: &PatternRegistry, text: &str) -> BiasAnalysis {
    if text.trim().is_empty() {
        return BiasAnalysis {
            overall_score: 0.0,
            findings: Vec::new(),
            suggestions: vec![NO_BIAS_MESSAGE.to_string()],
            highlighted_text: None,
        };
    }

    let mut findings = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();
    let mut matches: Vec<RuleMatch> = Vec::new();

    for category_rules in registry.categories() {
        let category = category_rules.category();
        let mut confidence: f64 = 0.0;
        let mut examples: Vec<String> = Vec::new();

        for (rule_index, rule) in category_rules.rules().iter().enumerate() {
            for span in rule.find_all(text) {
                let increment = (0.1 + rule.weight() * 0.1).min(1.0);
                confidence = (confidence + increment).min(1.0);

                let matched = &text[span.start..span.end()];
                if examples.len() < MAX_EXAMPLES && !examples.iter().any(|e| e == matched) {
                    examples.push(matched.to_string());
                }

                matches.push(RuleMatch {
                    span,
                    category,
                    rule_index,
                });

                if !suggestions.iter().any(|s| s == rule.suggestion()) {
                    suggestions.push(rule.suggestion().to_string());
                }
            }
        }

        if confidence > 0.0 {
            findings.push(CategoryFinding {
                category,
                confidence,
                examples,
                explanation: category_rules.explanation().to_string(),
            });
        }
    }

    // Average over retained categories, not over matches
    let overall_score = if findings.is_empty() {
        0.0
    } else {
        findings.iter().map(|f| f.confidence).sum::<f64>() / findings.len() as f64
    };

    match BiasLevel::from_score(overall_score) {
        BiasLevel::Significant => suggestions.insert(0, SIGNIFICANT_BIAS_MESSAGE.to_string()),
        BiasLevel::Moderate => suggestions.insert(0, SOME_BIAS_MESSAGE.to_string()),
        BiasLevel::Minimal => suggestions.insert(0, MINIMAL_BIAS_MESSAGE.to_string()),
        BiasLevel::None => suggestions.push(NO_BIAS_MESSAGE.to_string()),
    }

    tracing::debug!(
        matches = matches.len(),
        categories = findings.len(),
        overall_score,
        "bias analysis complete"
    );

    BiasAnalysis {
        overall_score,
        findings,
        suggestions,
        highlighted_text: Some(highlight::build_spans(text, &matches)),
    }
}
