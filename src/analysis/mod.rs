//! Typed views over the JSON analysis contracts.
//!
//! The emotion and structure prompts demand a strict JSON shape; models
//! mostly comply but sometimes wrap the object in a code fence or drift on
//! value ranges. Parsing here either yields a fully validated profile or a
//! reason string for the logs. Nothing is silently defaulted.

use serde::{Deserialize, Serialize};

use crate::lyrics::extract_json;

/// Emotion percentages for a lyric block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmotionProfile {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub romantic: f64,
    pub energetic: f64,
    pub melancholic: f64,
    pub dominant_emotion: String,
    pub mood_description: String,
}

impl EmotionProfile {
    fn validate(&self) -> Result<(), String> {
        let scores = [
            ("happy", self.happy),
            ("sad", self.sad),
            ("angry", self.angry),
            ("romantic", self.romantic),
            ("energetic", self.energetic),
            ("melancholic", self.melancholic),
        ];
        for (name, score) in scores {
            if !(0.0..=100.0).contains(&score) {
                return Err(format!("emotion '{name}' is out of range: {score}"));
            }
        }
        if self.dominant_emotion.trim().is_empty() {
            return Err("dominant_emotion is empty".to_string());
        }
        Ok(())
    }
}

/// One section of a suggested song arrangement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongSection {
    pub section: String,
    pub bars: u32,
    pub description: String,
}

/// Suggested arrangement for a lyric block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureProfile {
    pub suggested_structure: Vec<SongSection>,
    pub rhyme_scheme: String,
    pub tempo_suggestion: String,
    pub key_suggestion: String,
    pub overall_vibe: String,
}

impl StructureProfile {
    fn validate(&self) -> Result<(), String> {
        if self.suggested_structure.is_empty() {
            return Err("suggested_structure is empty".to_string());
        }
        for section in &self.suggested_structure {
            if section.section.trim().is_empty() {
                return Err("a section has no name".to_string());
            }
        }
        Ok(())
    }
}

/// Parse and validate an emotion-analysis response.
pub fn parse_emotion_profile(raw: &str) -> Result<EmotionProfile, String> {
    let value = extract_json(raw).map_err(|e| format!("response is not valid JSON: {e}"))?;
    let profile: EmotionProfile =
        serde_json::from_value(value).map_err(|e| format!("unexpected emotion shape: {e}"))?;
    profile.validate()?;
    Ok(profile)
}

/// Parse and validate a song-structure response.
pub fn parse_structure_profile(raw: &str) -> Result<StructureProfile, String> {
    let value = extract_json(raw).map_err(|e| format!("response is not valid JSON: {e}"))?;
    let profile: StructureProfile =
        serde_json::from_value(value).map_err(|e| format!("unexpected structure shape: {e}"))?;
    profile.validate()?;
    Ok(profile)
}
