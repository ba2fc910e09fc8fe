//! Prompt construction for each assistance task.
//!
//! Pure functions over a closed set of task kinds: same inputs always
//! produce the same instruction string, byte for byte. The seed text is
//! embedded verbatim; every prompt ends with a directive selecting the
//! response language.

use serde::{Deserialize, Serialize};

/// Response language for generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    /// Romanized Hindi/Urdu vernacular, written in the Roman script.
    Hinglish,
}

impl Language {
    /// The language directive appended to songwriting prompts.
    pub fn directive(self) -> &'static str {
        match self {
            Language::Hinglish => {
                "The response should be in Hinglish/Urdish (written in the Roman script)."
            }
            Language::English => "The response should be in English.",
        }
    }

    /// Shorter variant used by the song-structure prompt.
    fn short_directive(self) -> &'static str {
        match self {
            Language::Hinglish => "Response should be in Hinglish (Roman script).",
            Language::English => "Response should be in English.",
        }
    }
}

/// What kind of help the user asked for. Unknown kinds on the wire fall
/// back to the generic assistant instruction rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistanceType {
    /// Continue the line with singable rhyming lyrics.
    Rhyme,
    /// Turn the line into a full stanza.
    NextLine,
    /// Suggest music genres / singing styles for the line.
    Style,
    /// Free-question conversational assistant (voice flow). Also the
    /// fallback for unrecognized values.
    #[serde(other)]
    Assistant,
}

/// Phase of the scripted voice onboarding exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoicePhase {
    AskName,
    AskTask,
}

/// Build the instruction for a songwriting-companion task.
pub fn build(task: AssistanceType, language: Language, seed: &str) -> String {
    let lang = language.directive();
    match task {
        AssistanceType::Rhyme => format!(
            "You are a professional songwriter and lyricist. Based on this line: \"{seed}\", \
             write 4-6 beautiful, singable lyrical lines that continue naturally from it. \n\
             {lang}\n\
             Make them:\n\
             - Flow like a real song (rhythmic, melodic, easy to sing)\n\
             - Have natural rhymes that feel effortless\n\
             - Match the emotion and vibe of the original line\n\
             - Sound like they belong in a hit song\n\
             - Use vivid imagery and feeling\n\n\
             Write ONLY the new lyrical lines. No labels, no bullet points, no numbering, \
             no quotation marks, no explanations. Just pure song lyrics that flow beautifully."
        ),
        AssistanceType::NextLine => format!(
            "You are a professional songwriter and composer. Turn this line into a catchy \
             song-like stanza with 4-8 lyrical lines inspired by the tone, mood, and meaning \
             of the original: \"{seed}\". \n\
             {lang}\n\
             Do not rewrite or modify the given line.\n\
             Write only new lines as if they continue the song after this line.\n\
             Make it feel like a real song: singable, rhythmic, with some rhymes and a strong \
             emotional vibe.\n\
             Do not add any labels (like Verse, Chorus), no bullet points, no numbering, \
             no quotation marks and no explanations. Just the raw song lines."
        ),
        AssistanceType::Style => format!(
            "You are a music and songwriting expert. Based on this line: \"{seed}\", suggest \
             3 different music genres or singing styles that would work well for this lyric. \n\
             {lang}\n\n\
             For each style, format it EXACTLY like this:\n\n\
             [Genre Name]\n\n\
             [Description explaining why it fits, mood, and tempo in 2-3 sentences]\n\n\
             CRITICAL FORMATTING RULES:\n\
             1. First line: ONLY the genre name (like \"Emotional Ballad\" or \"Sufi Fusion\" \
             or \"Indie Pop\")\n\
             2. Blank line\n\
             3. Then the description (2-3 sentences explaining why it fits, mood, tempo)\n\
             4. Two blank lines before next genre\n\n\
             ABSOLUTELY NO:\n\
             - Asterisks (** or *)\n\
             - Bullet points (-, •)\n\
             - Numbers (1., 2., 3.)\n\
             - Labels like \"Genre:\" or \"Style:\"\n\
             - Any markdown or special characters\n\n\
             Just: Genre name, blank line, description. Simple and clean."
        ),
        // The assistant answer is read aloud, so it must be plain text.
        AssistanceType::Assistant => format!(
            "You are a helpful and knowledgeable AI assistant. Answer this question in a \
             detailed, conversational way with 3-5 sentences: \"{seed}\". \n\
             {lang}\n\
             IMPORTANT: Do NOT use any markdown formatting like asterisks (**), underscores \
             (_), or special characters. Write in plain text only, as this will be read aloud \
             by text-to-speech. Use simple, natural language that sounds good when spoken."
        ),
    }
}

/// Build the instruction for a scripted voice onboarding phase.
pub fn voice_prompt(phase: VoicePhase, language: Language, name: Option<&str>) -> String {
    match phase {
        VoicePhase::AskName => match language {
            Language::Hinglish => "In Hinglish (Roman script), politely ask the user their \
                                   name in **one short line**. Example style: \"Tumhara naam \
                                   kya hai?\""
                .to_string(),
            Language::English => "Politely ask the user their name in **one short line**. \
                                  Example style: \"What is your name?\""
                .to_string(),
        },
        VoicePhase::AskTask => {
            let safe_name = name.filter(|n| !n.trim().is_empty()).unwrap_or("dost");
            match language {
                Language::Hinglish => format!(
                    "User ka naam {safe_name} hai. In Hinglish (Roman script), unko naam se \
                     greet karo aur ek ya do chhoti lines me pucho ki tum unke liye kya kar \
                     sakte ho as a songwriting assistant (jaise singing lines, next lines, ya \
                     music styles). Tone friendly aur casual ho."
                ),
                Language::English => format!(
                    "The user's name is {safe_name}. In one or two short sentences, greet them \
                     by name and ask what you can do for them as a songwriting assistant (for \
                     example: singing lines, next lines, or music styles). Keep it friendly \
                     and conversational."
                ),
            }
        }
    }
}

/// Build the JSON-contract instruction for emotion analysis.
pub fn emotion_prompt(lyrics: &str) -> String {
    format!(
        "Analyze the emotional content of these song lyrics and return ONLY a JSON object \
         with emotion percentages. No other text.\n\n\
         Lyrics: \"{lyrics}\"\n\n\
         Return format (must be valid JSON):\n\
         {{\n\
         \x20 \"happy\": 0-100,\n\
         \x20 \"sad\": 0-100,\n\
         \x20 \"angry\": 0-100,\n\
         \x20 \"romantic\": 0-100,\n\
         \x20 \"energetic\": 0-100,\n\
         \x20 \"melancholic\": 0-100,\n\
         \x20 \"dominant_emotion\": \"name of strongest emotion\",\n\
         \x20 \"mood_description\": \"brief 1-sentence description\"\n\
         }}\n\n\
         The percentages should add up to approximately 100. Return ONLY the JSON, nothing else."
    )
}

/// Build the JSON-contract instruction for song-structure analysis.
pub fn structure_prompt(lyrics: &str, genre: Option<&str>, language: Language) -> String {
    let genre_info = match genre {
        Some(g) if !g.trim().is_empty() => format!("Genre: {g}"),
        _ => "Genre: Not specified".to_string(),
    };
    let lang = language.short_directive();
    format!(
        "Analyze these song lyrics and suggest a professional song structure. Return ONLY a \
         JSON object.\n\n\
         Lyrics: \"{lyrics}\"\n\
         {genre_info}\n\n\
         Return format (must be valid JSON):\n\
         {{\n\
         \x20 \"suggested_structure\": [\n\
         \x20   {{\"section\": \"Intro\", \"bars\": 4, \"description\": \"brief description\"}},\n\
         \x20   {{\"section\": \"Verse 1\", \"bars\": 8, \"description\": \"brief description\"}},\n\
         \x20   {{\"section\": \"Chorus\", \"bars\": 8, \"description\": \"brief description\"}}\n\
         \x20 ],\n\
         \x20 \"rhyme_scheme\": \"AABB or ABAB etc\",\n\
         \x20 \"tempo_suggestion\": \"Fast/Medium/Slow\",\n\
         \x20 \"key_suggestion\": \"C Major, A Minor, etc\",\n\
         \x20 \"overall_vibe\": \"brief description of song's vibe\"\n\
         }}\n\n\
         {lang}\n\
         Return ONLY the JSON, nothing else."
    )
}
