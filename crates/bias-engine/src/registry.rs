//! Bias detection rule tables
//!
//! A [`PatternRegistry`] is an immutable, ordered set of per-category rules
//! constructed once and injected into the scorer. The built-in table
//! reproduces the production rule set; tests and embedders can build their
//! own registries with custom rules or custom [`Matcher`] implementations.

use shared_types::BiasCategory;

use crate::matcher::{MatchSpan, Matcher, PatternError, PhraseMatcher};

/// One detection rule: how to find occurrences, how much each occurrence
/// contributes to the category confidence, and what to suggest instead.
pub struct PatternRule {
    matcher: Box<dyn Matcher>,
    weight: f64,
    suggestion: String,
}

impl PatternRule {
    /// Rule with an injected matcher strategy
    pub fn new(matcher: Box<dyn Matcher>, weight: f64, suggestion: impl Into<String>) -> Self {
        Self {
            matcher,
            weight,
            suggestion: suggestion.into(),
        }
    }

    /// Rule backed by a case-insensitive whole-word alternation
    pub fn word(
        alternation: &str,
        weight: f64,
        suggestion: impl Into<String>,
    ) -> Result<Self, PatternError> {
        Ok(Self::new(
            Box::new(PhraseMatcher::new(alternation)?),
            weight,
            suggestion,
        ))
    }

    /// Contribution weight in (0, 1]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }

    pub fn find_all(&self, text: &str) -> Vec<MatchSpan> {
        self.matcher.find_all(text)
    }
}

/// Ordered rules for one category, plus the explanation shown with findings
pub struct CategoryRules {
    category: BiasCategory,
    explanation: String,
    rules: Vec<PatternRule>,
}

impl CategoryRules {
    pub fn new(category: BiasCategory, explanation: impl Into<String>) -> Self {
        Self {
            category,
            explanation: explanation.into(),
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: PatternRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn category(&self) -> BiasCategory {
        self.category
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

/// Read-only table of detection rules, scanned in declaration order
pub struct PatternRegistry {
    categories: Vec<CategoryRules>,
}

impl PatternRegistry {
    pub fn from_categories(categories: Vec<CategoryRules>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[CategoryRules] {
        &self.categories
    }

    /// The production rule set: gender, political, racial and other bias
    /// patterns with curated weights and rewrite suggestions.
    pub fn builtin() -> Self {
        Self::from_categories(vec![
            builtin_gender(),
            builtin_political(),
            builtin_racial(),
            builtin_other(),
        ])
    }
}

// Built-in alternations are code constants vetted by the tests below, so
// construction failures are unreachable.
fn rule(alternation: &str, weight: f64, suggestion: &str) -> PatternRule {
    PatternRule::word(alternation, weight, suggestion).expect("built-in pattern is valid")
}

fn builtin_gender() -> CategoryRules {
    CategoryRules::new(
        BiasCategory::Gender,
        "Gender bias involves language that treats genders unequally or reinforces gender stereotypes.",
    )
    .with_rule(rule(
        "mankind|manpower|manmade|chairman|policeman|fireman|stewardess|waitress|actress",
        0.6,
        "Consider using gender-neutral terms like 'humanity', 'workforce', 'artificial', 'chair', 'police officer', 'firefighter', 'flight attendant', 'server', 'actor'.",
    ))
    .with_rule(rule(
        "he|his|him",
        0.2,
        "If not referring to a specific man, consider using 'they/their/them' for gender neutrality.",
    ))
    .with_rule(rule(
        "she|her|hers",
        0.2,
        "If not referring to a specific woman, consider using 'they/their/them' for gender neutrality.",
    ))
    .with_rule(rule(
        "girls|ladies|gals|guys|boys|men|women",
        0.3,
        "When referring to mixed gender groups, consider using 'people', 'folks', 'team', or 'everyone'.",
    ))
    .with_rule(rule(
        "hysterical|emotional|bossy|shrill|nagging|bitchy",
        0.8,
        "These terms are often applied in a gender-biased way. Consider more neutral descriptors.",
    ))
    .with_rule(rule(
        "man up|grow a pair|don't be a girl|like a girl",
        0.9,
        "These phrases reinforce gender stereotypes. Consider more inclusive language.",
    ))
}

fn builtin_political() -> CategoryRules {
    CategoryRules::new(
        BiasCategory::Political,
        "Political bias involves language that favors one political viewpoint over others or uses politically charged terminology.",
    )
    .with_rule(rule(
        "leftist|left-wing|liberal|socialist|communist",
        0.5,
        "These political labels can be loaded terms. Consider more specific policy descriptions.",
    ))
    .with_rule(rule(
        "right-wing|conservative|fascist|alt-right",
        0.5,
        "These political labels can be loaded terms. Consider more specific policy descriptions.",
    ))
    .with_rule(rule(
        "radical|extremist|fanatic",
        0.7,
        "These terms can be politically charged. Consider more neutral descriptions of specific positions.",
    ))
    .with_rule(rule(
        "snowflake|libtard|republicant|trumptard|democrap",
        0.9,
        "These are derogatory political terms. Consider respectful language when discussing different viewpoints.",
    ))
    .with_rule(rule(
        "mainstream media|fake news|deep state|elites",
        0.6,
        "These terms often carry political bias. Consider more specific and neutral descriptions.",
    ))
    .with_rule(rule(
        "woke|cancel culture|political correctness",
        0.6,
        "These terms have become politically charged. Consider more specific descriptions of the issues.",
    ))
}

fn builtin_racial() -> CategoryRules {
    CategoryRules::new(
        BiasCategory::Racial,
        "Racial bias involves language that treats racial groups unequally or reinforces racial stereotypes.",
    )
    .with_rule(rule(
        "thug|ghetto|urban|inner city|welfare queen",
        0.7,
        "These terms can carry racial connotations. Consider more specific and neutral language.",
    ))
    .with_rule(rule(
        "illegal alien|illegal immigrant",
        0.6,
        "Consider 'undocumented immigrant' or 'person without legal status' for more neutral language.",
    ))
    .with_rule(rule(
        "articulate|well-spoken",
        0.4,
        "When applied to minorities, these terms can imply surprise at their abilities. Consider whether you would use this descriptor for everyone.",
    ))
    .with_rule(rule(
        "exotic|oriental|colored|ethnic",
        0.8,
        "These terms can otherize racial groups. Consider more specific and respectful terminology.",
    ))
    .with_rule(rule(
        "civilized|primitive|savage|tribal",
        0.7,
        "These terms often carry colonial and racial bias. Consider more neutral and specific descriptions.",
    ))
    .with_rule(rule(
        "model minority|credit to their race",
        0.8,
        "These phrases reinforce racial stereotypes. Consider discussing individual achievements without racial framing.",
    ))
}

fn builtin_other() -> CategoryRules {
    CategoryRules::new(
        BiasCategory::Other,
        "Other biases include ableism, ageism, classism, and other forms of prejudice in language.",
    )
    .with_rule(rule(
        "crazy|insane|psycho|schizo|retarded|lame",
        0.7,
        "These terms can be ableist. Consider more specific and respectful language.",
    ))
    .with_rule(rule(
        "old|elderly|senior citizen",
        0.3,
        "Consider 'older adult' or specific age ranges when relevant.",
    ))
    .with_rule(rule(
        "fat|obese|overweight|skinny",
        0.5,
        "Body-related terms can carry bias. Consider whether physical descriptions are necessary.",
    ))
    .with_rule(rule(
        "third world|developing country",
        0.5,
        "Consider 'low-income country' or naming specific regions/countries.",
    ))
    .with_rule(rule(
        "poor|poverty-stricken|disadvantaged",
        0.4,
        "Consider 'economically marginalized' or more specific descriptions of economic conditions.",
    ))
    .with_rule(rule(
        "normal|abnormal|natural|unnatural",
        0.5,
        "These terms can imply value judgments. Consider more specific and neutral descriptions.",
    ))
}
