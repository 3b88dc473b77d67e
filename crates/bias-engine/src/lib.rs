//! Rule-based bias scanning and toxicity gating for user-submitted text
//!
//! Two synchronous, total operations back the surrounding application's
//! submission surfaces:
//!
//! - [`BiasEngine::analyze`] scores free-form text against a
//!   [`PatternRegistry`](registry::PatternRegistry), returning per-category
//!   findings, rewrite suggestions and a span-annotated copy of the input.
//!   Results are advisory and never block submission.
//! - [`BiasEngine::check_toxic`] gates text against a fixed
//!   disallowed-content table plus shouting/punctuation heuristics; a toxic
//!   verdict must block persistence of the content.
//!
//! Both run in time linear in input length times rule count, hold no state
//! between calls, and can be shared freely across threads. Any artificial
//! latency belongs to the caller, not here.

pub mod highlight;
pub mod matcher;
pub mod registry;
pub mod scorer;
pub mod toxicity;

pub use matcher::{MatchSpan, Matcher, PatternError, PhraseMatcher};
pub use registry::{CategoryRules, PatternRegistry, PatternRule};
pub use shared_types::{
    BiasAnalysis, BiasCategory, BiasLevel, CategoryFinding, ScreeningReport, TextSpan,
    ToxicityVerdict,
};

/// Engine entry point holding the rule registry for analysis calls
pub struct BiasEngine {
    registry: PatternRegistry,
}

impl BiasEngine {
    /// Engine over the built-in production rule set
    pub fn new() -> Self {
        Self {
            registry: PatternRegistry::builtin(),
        }
    }

    /// Engine over a custom registry (isolated tests, tuned deployments)
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Score `text` for bias; advisory only
    pub fn analyze(&self, text: &str) -> BiasAnalysis {
        scorer::analyze(&self.registry, text)
    }

    /// Gate `text` before submission; registry-independent
    pub fn check_toxic(&self, text: &str) -> ToxicityVerdict {
        toxicity::check_toxic(text)
    }

    /// Combined pre-submission flow: run the gate, and for clean content the
    /// advisory analysis, the way the comment composers consume both.
    pub fn screen(&self, text: &str) -> ScreeningReport {
        let verdict = toxicity::check_toxic(text);
        let analysis = if verdict.is_toxic {
            None
        } else {
            Some(self.analyze(text))
        };
        ScreeningReport {
            verdict,
            analysis,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for BiasEngine {
    fn default() -> Self {
        Self::new()
    }
}
