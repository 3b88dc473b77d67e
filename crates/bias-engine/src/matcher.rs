//! Pattern matching strategy for bias detection rules
//!
//! Scoring is decoupled from how occurrences are found: rules hold a boxed
//! [`Matcher`], and the scorer only consumes `(start, len)` spans. The
//! production implementation is [`PhraseMatcher`], a case-insensitive
//! whole-word alternation compiled to a single `regex::Regex` (linear-time,
//! no backtracking). A tokenizer- or automaton-based matcher can be swapped
//! in per rule without touching the scoring code.

use regex::Regex;
use thiserror::Error;

/// Failure to build a matcher from a user-supplied pattern
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid match pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Location of one occurrence within the scanned text, in byte offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub len: usize,
}

impl MatchSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Finds every non-overlapping occurrence of a pattern, left to right
pub trait Matcher: Send + Sync {
    fn find_all(&self, text: &str) -> Vec<MatchSpan>;
}

/// Case-insensitive whole-word matcher over a set of alternative phrases
#[derive(Debug)]
pub struct PhraseMatcher {
    regex: Regex,
}

impl PhraseMatcher {
    /// Build from a raw alternation body, e.g. `"mankind|chairman|policeman"`.
    /// The body is wrapped in word boundaries and made case-insensitive.
    pub fn new(alternation: &str) -> Result<Self, PatternError> {
        let pattern = format!(r"(?i)\b(?:{})\b", alternation);
        let regex = Regex::new(&pattern).map_err(|source| PatternError::InvalidPattern {
            pattern: alternation.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Build from literal phrases; regex metacharacters are escaped
    pub fn from_phrases(phrases: &[&str]) -> Result<Self, PatternError> {
        let alternation = phrases
            .iter()
            .map(|p| regex::escape(p))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(&alternation)
    }
}

impl Matcher for PhraseMatcher {
    fn find_all(&self, text: &str) -> Vec<MatchSpan> {
        self.regex
            .find_iter(text)
            .map(|m| MatchSpan {
                start: m.start(),
                len: m.len(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_all_occurrences_case_insensitive() {
        let matcher = PhraseMatcher::new("chairman|policeman").unwrap();
        let spans = matcher.find_all("The Chairman met the policeman. CHAIRMAN agreed.");
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], MatchSpan { start: 4, len: 8 });
    }

    #[test]
    fn test_respects_word_boundaries() {
        let matcher = PhraseMatcher::new("he|his|him").unwrap();
        // "chairman" contains "h", "theory" contains "he" mid-word
        assert!(matcher.find_all("chairman theory").is_empty());
        assert_eq!(matcher.find_all("he said").len(), 1);
    }

    #[test]
    fn test_matches_multi_word_phrases() {
        let matcher = PhraseMatcher::new("man up|like a girl").unwrap();
        let spans = matcher.find_all("Don't tell me to man up.");
        assert_eq!(spans.len(), 1);
        assert_eq!(&"Don't tell me to man up."[spans[0].start..spans[0].end()], "man up");
    }

    #[test]
    fn test_from_phrases_escapes_metacharacters() {
        // Raw "(unclosed" would be a regex error; literal phrases are escaped
        assert!(PhraseMatcher::from_phrases(&["(unclosed"]).is_ok());
        let matcher = PhraseMatcher::from_phrases(&["don't be a girl"]).unwrap();
        assert_eq!(matcher.find_all("Don't be a girl, they said").len(), 1);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = PhraseMatcher::new("(unclosed").unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn test_matcher_is_debug_formattable() {
        let matcher = PhraseMatcher::new("chairman").unwrap();
        assert!(format!("{:?}", matcher).contains("PhraseMatcher"));
    }
}
