//! Pre-submission toxicity gate
//!
//! Unlike the bias scorer this is a hard gate: the first disallowed-content
//! pattern that matches decides the verdict and nothing accumulates. Two
//! heuristics follow the pattern table: a shouting ratio over whitespace
//! tokens and a repeated-punctuation check. Callers must treat a toxic
//! verdict as a submission block.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ToxicityVerdict;

/// Reason attached to the shouting heuristic
pub const SHOUTING_REASON: &str = "Excessive capitalization (shouting)";
/// Reason attached to the repeated-punctuation heuristic
pub const PUNCTUATION_REASON: &str = "Excessive punctuation";

/// Minimum tokens before the shouting ratio applies
const SHOUTING_MIN_TOKENS: usize = 5;
/// Strict lower bound on the shouting ratio
const SHOUTING_RATIO: f64 = 0.6;

lazy_static! {
    /// Disallowed-content patterns in priority order; the first match wins
    static ref TOXIC_PATTERNS: Vec<(Regex, &'static str)> = vec![
        (
            Regex::new(r"(?i)\b(fuck|shit|ass|bitch|cunt|dick|pussy|cock|whore|slut|asshole|motherfuck|bullshit|piss|damn)\b").unwrap(),
            "Profanity",
        ),
        (
            Regex::new(r"(?i)\b(nigger|nigga|chink|spic|kike|wetback|gook|towelhead|raghead|redskin|beaner|coon|gringo|jap)\b").unwrap(),
            "Racial slurs",
        ),
        (
            Regex::new(r"(?i)\b(fag|faggot|dyke|tranny|homo|queer|sissy|ladyboy|shemale)\b").unwrap(),
            "Homophobic/transphobic slurs",
        ),
        (
            Regex::new(r"(?i)\b(retard|retarded|spaz|spastic|cripple|vegetable|mongoloid|moron|idiot|imbecile)\b").unwrap(),
            "Ableist slurs",
        ),
        (
            Regex::new(r"(?i)\b(kill yourself|kys|commit suicide|neck yourself|end your life|jump off|slit your|hang yourself)\b").unwrap(),
            "Self-harm encouragement",
        ),
        (
            Regex::new(r"(?i)\b(i(\s|\w)*hate(\s|\w)*you|die|death to|should be killed|hope you die|deserve to die|will kill you)\b").unwrap(),
            "Violent content",
        ),
        (
            Regex::new(r"(?i)\b(rape|molest|sexually assault|grope|force yourself|non-consensual)\b").unwrap(),
            "Sexual violence",
        ),
        (
            Regex::new(r"(?i)\b(i(\s|\w)*will(\s|\w)*find(\s|\w)*you|come for you|hunt you down|track you|stalk you)\b").unwrap(),
            "Threatening language",
        ),
        (
            Regex::new(r"(?i)\b(your address is|your ip is|i know where you live|i found your home|your location is)\b").unwrap(),
            "Personal information/doxxing",
        ),
        (
            Regex::new(r"(?i)\b(keep crying|triggered|snowflake|nobody cares|nobody asked|attention seeker)\b").unwrap(),
            "Harassment",
        ),
    ];

    /// 5+ consecutive repeats of the same sentence punctuation.
    /// The regex engine has no backreferences, so each character gets its own
    /// alternation arm.
    static ref REPEATED_PUNCTUATION: Regex = Regex::new(r"!{5,}|\?{5,}|\.{5,}").unwrap();
}

/// Gate `text` before submission.
///
/// Total and deterministic: empty or whitespace-only input is clean, the
/// first matching disallowed-content pattern short-circuits with its reason,
/// then the shouting and punctuation heuristics run in that order.
pub fn check_toxic(text: &str) -> ToxicityVerdict {
    if text.trim().is_empty() {
        return ToxicityVerdict::clean();
    }

    for (pattern, reason) in TOXIC_PATTERNS.iter() {
        if pattern.is_match(text) {
            tracing::debug!(reason = *reason, "submission blocked");
            return ToxicityVerdict::flagged(*reason);
        }
    }

    if is_shouting(text) {
        tracing::debug!(reason = SHOUTING_REASON, "submission blocked");
        return ToxicityVerdict::flagged(SHOUTING_REASON);
    }

    if REPEATED_PUNCTUATION.is_match(text) {
        tracing::debug!(reason = PUNCTUATION_REASON, "submission blocked");
        return ToxicityVerdict::flagged(PUNCTUATION_REASON);
    }

    ToxicityVerdict::clean()
}

/// Ratio of all-caps tokens (longer than 3 characters) to all whitespace
/// tokens, applied only to texts of at least 5 tokens
fn is_shouting(text: &str) -> bool {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < SHOUTING_MIN_TOKENS {
        return false;
    }
    let shouting = tokens
        .iter()
        .filter(|w| w.chars().count() > 3 && w.to_uppercase() == **w)
        .count();
    shouting as f64 / tokens.len() as f64 > SHOUTING_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_passes() {
        let verdict = check_toxic("Have a wonderful day");
        assert!(!verdict.is_toxic);
        assert!(verdict.reason.is_none());
    }

    #[test]
    fn test_empty_input_is_clean() {
        assert!(!check_toxic("").is_toxic);
        assert!(!check_toxic("   \n ").is_toxic);
    }

    #[test]
    fn test_flags_self_harm_encouragement() {
        let verdict = check_toxic("you should kill yourself");
        assert!(verdict.is_toxic);
        assert_eq!(verdict.reason.as_deref(), Some("Self-harm encouragement"));
    }

    #[test]
    fn test_flags_profanity() {
        let verdict = check_toxic("what the fuck is this");
        assert_eq!(verdict.reason.as_deref(), Some("Profanity"));
    }

    #[test]
    fn test_flags_doxxing() {
        let verdict = check_toxic("i know where you live, pal");
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Personal information/doxxing")
        );
    }

    #[test]
    fn test_first_matching_pattern_wins() {
        // Contains both profanity and a harassment phrase; profanity is
        // earlier in the table
        let verdict = check_toxic("shit, nobody cares");
        assert_eq!(verdict.reason.as_deref(), Some("Profanity"));
    }

    #[test]
    fn test_slurs_are_not_matched_inside_words() {
        // "assault" must not trip the \bass\b profanity pattern; the text
        // still flags, but as sexual violence
        let verdict = check_toxic("he tried to sexually assault them");
        assert_eq!(verdict.reason.as_deref(), Some("Sexual violence"));
    }

    #[test]
    fn test_flags_shouting() {
        let verdict = check_toxic("THIS IS GREAT AMAZING TODAY");
        assert!(verdict.is_toxic);
        assert_eq!(verdict.reason.as_deref(), Some(SHOUTING_REASON));
    }

    #[test]
    fn test_short_all_caps_text_is_not_shouting() {
        // Fewer than 5 tokens never triggers the ratio check
        assert!(!check_toxic("THIS IS GREAT AMAZING").is_toxic);
    }

    #[test]
    fn test_shouting_ratio_is_strict() {
        // 3 long all-caps tokens out of 5 is exactly 0.6, not over it
        assert!(!check_toxic("HELLO WORLD FRIEND yes no").is_toxic);
    }

    #[test]
    fn test_flags_repeated_punctuation() {
        let verdict = check_toxic("This is fine!!!!!");
        assert!(verdict.is_toxic);
        assert_eq!(verdict.reason.as_deref(), Some(PUNCTUATION_REASON));
    }

    #[test]
    fn test_four_repeats_pass() {
        assert!(!check_toxic("Wait for it....").is_toxic);
        assert!(!check_toxic("Really???? Fine").is_toxic);
    }

    #[test]
    fn test_shouting_checked_before_punctuation() {
        let verdict = check_toxic("STOP THIS NOW PLEASE OKAY!!!!!");
        assert_eq!(verdict.reason.as_deref(), Some(SHOUTING_REASON));
    }

    #[test]
    fn test_mixed_case_long_words_are_not_shouting() {
        assert!(!check_toxic("This Is Great Amazing Today Everyone").is_toxic);
    }
}
