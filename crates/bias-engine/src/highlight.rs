//! Span reconstruction for rendering annotated input
//!
//! Matches recorded during scanning are stitched back into an ordered list of
//! [`TextSpan`]s covering the whole input: plain spans for untouched gaps,
//! tagged spans for matched substrings. Concatenating the spans reproduces
//! the input byte for byte.

use shared_types::{BiasCategory, TextSpan};

use crate::matcher::MatchSpan;

/// One recorded rule hit, consumed to build highlighted spans
#[derive(Debug, Clone, Copy)]
pub struct RuleMatch {
    pub span: MatchSpan,
    pub category: BiasCategory,
    pub rule_index: usize,
}

/// Build the highlighted span sequence for `text`.
///
/// Matches are stable-sorted by start offset, so ties keep discovery order
/// (category declaration order, then rule order). When two matches overlap,
/// the earliest-starting one wins and the later one is dropped; spans
/// therefore never overlap and never leave gaps.
pub fn build_spans(text: &str, matches: &[RuleMatch]) -> Vec<TextSpan> {
    if matches.is_empty() {
        return vec![TextSpan::plain(text)];
    }

    let mut ordered: Vec<RuleMatch> = matches.to_vec();
    ordered.sort_by_key(|m| m.span.start);

    let mut spans = Vec::new();
    let mut cursor = 0;

    for m in &ordered {
        // Overlap with an already-emitted span: first match wins
        if m.span.start < cursor {
            continue;
        }
        if m.span.start > cursor {
            spans.push(TextSpan::plain(&text[cursor..m.span.start]));
        }
        spans.push(TextSpan::tagged(
            &text[m.span.start..m.span.end()],
            m.category,
        ));
        cursor = m.span.end();
    }

    if cursor < text.len() {
        spans.push(TextSpan::plain(&text[cursor..]));
    }

    spans
}
