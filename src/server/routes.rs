use std::time::Duration;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::analysis::{parse_emotion_profile, parse_structure_profile};
use crate::error::ApiError;
use crate::generation::GenerationOptions;
use crate::lyrics::{classify, normalize_for_display, normalize_for_speech, split_lines};
use crate::prompt::{self, AssistanceType, Language, VoicePhase};

use super::state::{GuardedGenerationClient, ServerState};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

pub async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

#[derive(Deserialize, Debug)]
pub struct AnalysisBody {
    lyrics: Option<String>,
    genre: Option<String>,
    language: Option<Language>,
}

impl AnalysisBody {
    fn lyrics(&self) -> Result<&str, ApiError> {
        match self.lyrics.as_deref().map(str::trim) {
            Some(lyrics) if !lyrics.is_empty() => Ok(lyrics),
            _ => Err(ApiError::InvalidInput("Missing lyrics")),
        }
    }
}

pub async fn analyze_emotions(
    State(generation): State<GuardedGenerationClient>,
    Json(body): Json<AnalysisBody>,
) -> Result<impl IntoResponse, ApiError> {
    let lyrics = body.lyrics()?;

    let instruction = prompt::emotion_prompt(lyrics);
    let raw = generation
        .generate(&instruction, &GenerationOptions::default())
        .await
        .map_err(|e| ApiError::generation("Failed to analyze emotions", e))?;

    let profile = parse_emotion_profile(&raw).map_err(|detail| ApiError::MalformedOutput {
        public: "Failed to analyze emotions",
        detail,
    })?;

    Ok(Json(json!({ "emotions": profile })))
}

pub async fn analyze_structure(
    State(generation): State<GuardedGenerationClient>,
    Json(body): Json<AnalysisBody>,
) -> Result<impl IntoResponse, ApiError> {
    let lyrics = body.lyrics()?;
    let language = body.language.unwrap_or(Language::English);

    let instruction = prompt::structure_prompt(lyrics, body.genre.as_deref(), language);
    let raw = generation
        .generate(&instruction, &GenerationOptions::default())
        .await
        .map_err(|e| ApiError::generation("Failed to analyze song structure", e))?;

    let profile = parse_structure_profile(&raw).map_err(|detail| ApiError::MalformedOutput {
        public: "Failed to analyze song structure",
        detail,
    })?;

    Ok(Json(json!({ "structure": profile })))
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CompanionMode {
    #[default]
    Song,
    Voice,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CompanionBody {
    #[serde(default)]
    mode: CompanionMode,
    user_input: Option<String>,
    assistance_type: Option<AssistanceType>,
    language: Option<Language>,
    phase: Option<VoicePhase>,
    name: Option<String>,
}

pub async fn poetry_companion(
    State(generation): State<GuardedGenerationClient>,
    Json(body): Json<CompanionBody>,
) -> Result<impl IntoResponse, ApiError> {
    match body.mode {
        CompanionMode::Voice => {
            let (language, phase) = match (body.language, body.phase) {
                (Some(language), Some(phase)) => (language, phase),
                _ => {
                    return Err(ApiError::InvalidInput(
                        "Missing language or phase for voice mode",
                    ))
                }
            };

            let instruction = prompt::voice_prompt(phase, language, body.name.as_deref());
            let raw = generation
                .generate(&instruction, &GenerationOptions::default())
                .await
                .map_err(|e| {
                    ApiError::generation("Failed to generate response from Gemini.", e)
                })?;

            let reply = normalize_for_speech(&raw);
            Ok(Json(json!({ "reply": reply })))
        }
        CompanionMode::Song => {
            let (user_input, task, language) =
                match (body.user_input.as_deref(), body.assistance_type, body.language) {
                    (Some(input), Some(task), Some(language)) if !input.trim().is_empty() => {
                        (input.trim(), task, language)
                    }
                    _ => return Err(ApiError::InvalidInput("Missing required fields")),
                };

            debug!(?task, ?language, "companion request");

            let instruction = prompt::build(task, language, user_input);
            let raw = generation
                .generate(&instruction, &GenerationOptions::default())
                .await
                .map_err(|e| {
                    ApiError::generation("Failed to generate response from Gemini.", e)
                })?;

            // Style answers get the display scrub; the style prompt forbids
            // markdown but models emit it anyway.
            let result = match task {
                AssistanceType::Style => normalize_for_display(&raw),
                _ => raw.trim().to_string(),
            };

            Ok(Json(json!({ "result": result })))
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RhymeSchemeBody {
    lyrics: Option<String>,
}

pub async fn rhyme_scheme(Json(body): Json<RhymeSchemeBody>) -> Result<impl IntoResponse, ApiError> {
    let lyrics = match body.lyrics.as_deref().map(str::trim) {
        Some(lyrics) if !lyrics.is_empty() => lyrics,
        _ => return Err(ApiError::InvalidInput("Missing lyrics")),
    };

    let lines = split_lines(lyrics);
    let analysis = classify(&lines).ok_or(ApiError::InvalidInput("Missing lyrics"))?;

    Ok(Json(json!({
        "scheme": analysis.scheme,
        "groups": analysis.groups,
        "lines": lines,
    })))
}
