//! Cleanup and segmentation of model-generated text.
//!
//! Generators are told not to emit markdown, but they do anyway. These
//! passes scrub the artifacts for two consumers with different needs: the
//! display layer (style suggestions must be bare genre/description blocks)
//! and speech synthesis (anything read aloud must be plain text). All
//! passes are idempotent: running them on already-clean text is a no-op.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref BOLD: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_STAR: Regex = Regex::new(r"\*(.+?)\*").unwrap();
    static ref ITALIC_UNDERSCORE: Regex = Regex::new(r"_(.+?)_").unwrap();
    static ref INLINE_CODE: Regex = Regex::new(r"`(.+?)`").unwrap();
    static ref HEADING_MARKER: Regex = Regex::new(r"#+\s").unwrap();
    static ref LINK: Regex = Regex::new(r"\[(.+?)\]\(.+?\)").unwrap();
    static ref EXCESS_NEWLINES: Regex = Regex::new(r"\n{3,}").unwrap();
    static ref NUMBERED_ITEM: Regex = Regex::new(r"(?m)^\d+\.\s+").unwrap();
    static ref BULLET_ITEM: Regex = Regex::new(r"(?m)^[-•]\s+").unwrap();
    static ref GENRE_STYLE_LABEL: Regex = Regex::new(r"(?i)Genre/Style:\s*").unwrap();
    static ref GENRE_LABEL: Regex = Regex::new(r"(?i)Genre:\s*").unwrap();
    static ref STYLE_LABEL: Regex = Regex::new(r"(?i)Style:\s*").unwrap();
    static ref CODE_FENCE: Regex = Regex::new(r"```(?:json)?\n?").unwrap();
    static ref SENTENCE: Regex = Regex::new(r"[^.!?]+[.!?]+").unwrap();
}

/// Scrub a style-suggestion answer down to bare genre blocks: no bold or
/// italic markers, no list markers, no "Genre:"/"Style:" field labels.
pub fn normalize_for_display(raw: &str) -> String {
    let text = BOLD.replace_all(raw, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = NUMBERED_ITEM.replace_all(&text, "");
    let text = BULLET_ITEM.replace_all(&text, "");
    let text = GENRE_STYLE_LABEL.replace_all(&text, "");
    let text = GENRE_LABEL.replace_all(&text, "");
    let text = STYLE_LABEL.replace_all(&text, "");
    text.trim().to_string()
}

/// Strip markdown that would be read aloud verbatim by speech synthesis.
/// Links keep their visible text; 3+ consecutive newlines collapse to 2.
pub fn normalize_for_speech(raw: &str) -> String {
    let text = BOLD.replace_all(raw, "$1");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1");
    let text = INLINE_CODE.replace_all(&text, "$1");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = EXCESS_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Parse a JSON object out of a generation response, stripping a markdown
/// code fence (with or without a `json` tag) if the response is wrapped in
/// one. A parse failure is the caller's problem to surface; it must never
/// be swallowed into an empty object.
pub fn extract_json(raw: &str) -> Result<Value, serde_json::Error> {
    let trimmed = raw.trim();
    let candidate = if trimmed.starts_with("```") {
        CODE_FENCE.replace_all(trimmed, "").into_owned()
    } else {
        trimmed.to_string()
    };
    serde_json::from_str(candidate.trim())
}

/// Split cleaned text into sentences for one-at-a-time speech playback.
/// Text without any sentence-ending punctuation is one single segment.
pub fn split_sentences(text: &str) -> Vec<String> {
    let sentences: Vec<String> = SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !sentences.is_empty() {
        return sentences;
    }
    let whole = text.trim();
    if whole.is_empty() {
        Vec::new()
    } else {
        vec![whole.to_string()]
    }
}

/// Non-blank trimmed lines, for line-by-line playback of song suggestions.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
