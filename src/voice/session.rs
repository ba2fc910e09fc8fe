//! Voice session state machine.

use serde::{Deserialize, Serialize};

use crate::lyrics::{normalize_for_speech, split_sentences};
use crate::prompt::Language;

/// State of a voice conversation session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VoiceState {
    /// Session created, nothing has happened yet.
    Idle,

    /// The intro line is being spoken to the user.
    SpeakingIntro,

    /// Waiting for the user's transcript.
    Listening,

    /// A generation request is in flight for the transcript.
    AwaitingGeneration { transcript: String },

    /// The reply is being read out one sentence at a time. `next` is the
    /// index of the sentence to speak after the current one finishes.
    SpeakingAnswer { sentences: Vec<String>, next: usize },

    /// The full answer was spoken.
    Done,

    /// The user cancelled the session.
    Cancelled,

    /// Generation failed.
    Error { message: String },
}

impl VoiceState {
    /// Check if the session is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            VoiceState::Done | VoiceState::Cancelled | VoiceState::Error { .. }
        )
    }
}

/// Events fed into the session by the speech I/O owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum VoiceEvent {
    Start,
    IntroSpoken,
    TranscriptReceived { transcript: String },
    ReplyReady { reply: String },
    GenerationFailed { message: String },
    SentenceSpoken,
    Cancel,
    Timeout,
}

/// Commands the session issues back to the speech I/O owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum VoiceCommand {
    SpeakIntro { text: String },
    Listen,
    Generate { transcript: String },
    SpeakSentence { text: String },
    Finish,
    Cancelled,
    Fail { message: String },
}

/// A single voice conversation, from intro through spoken answer.
///
/// Pure state machine: `handle` applies one event and returns at most one
/// command for the caller to execute. Events that make no sense in the
/// current state are ignored. Once a terminal state is reached the session
/// stays there.
pub struct VoiceSession {
    language: Language,
    state: VoiceState,
}

impl VoiceSession {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            state: VoiceState::Idle,
        }
    }

    pub fn state(&self) -> &VoiceState {
        &self.state
    }

    fn intro_text(&self) -> &'static str {
        match self.language {
            Language::Hinglish => "Kuch bhi puchho, main sun raha hoon.",
            Language::English => "Ask me anything, I am listening.",
        }
    }

    /// Apply one event, returning the command to execute, if any.
    pub fn handle(&mut self, event: VoiceEvent) -> Option<VoiceCommand> {
        if self.state.is_terminal() {
            return None;
        }

        // Cancellation wins over everything else.
        if event == VoiceEvent::Cancel {
            self.state = VoiceState::Cancelled;
            return Some(VoiceCommand::Cancelled);
        }

        let state = std::mem::replace(&mut self.state, VoiceState::Idle);
        let (next_state, command) = match (state, event) {
            (VoiceState::Idle, VoiceEvent::Start) => (
                VoiceState::SpeakingIntro,
                Some(VoiceCommand::SpeakIntro {
                    text: self.intro_text().to_string(),
                }),
            ),
            (VoiceState::SpeakingIntro, VoiceEvent::IntroSpoken) => {
                (VoiceState::Listening, Some(VoiceCommand::Listen))
            }
            (VoiceState::Listening, VoiceEvent::TranscriptReceived { transcript }) => {
                if transcript.trim().is_empty() {
                    // Nothing usable was heard; keep listening.
                    (VoiceState::Listening, Some(VoiceCommand::Listen))
                } else {
                    (
                        VoiceState::AwaitingGeneration {
                            transcript: transcript.clone(),
                        },
                        Some(VoiceCommand::Generate { transcript }),
                    )
                }
            }
            (VoiceState::AwaitingGeneration { .. }, VoiceEvent::ReplyReady { reply }) => {
                let sentences = split_sentences(&normalize_for_speech(&reply));
                match sentences.first() {
                    Some(first) => {
                        let command = VoiceCommand::SpeakSentence {
                            text: first.clone(),
                        };
                        (
                            VoiceState::SpeakingAnswer { sentences, next: 1 },
                            Some(command),
                        )
                    }
                    None => (VoiceState::Done, Some(VoiceCommand::Finish)),
                }
            }
            (VoiceState::AwaitingGeneration { .. }, VoiceEvent::GenerationFailed { message }) => (
                VoiceState::Error {
                    message: message.clone(),
                },
                Some(VoiceCommand::Fail { message }),
            ),
            (VoiceState::SpeakingAnswer { sentences, next }, VoiceEvent::SentenceSpoken) => {
                match sentences.get(next) {
                    Some(sentence) => {
                        let command = VoiceCommand::SpeakSentence {
                            text: sentence.clone(),
                        };
                        (
                            VoiceState::SpeakingAnswer {
                                sentences,
                                next: next + 1,
                            },
                            Some(command),
                        )
                    }
                    None => (VoiceState::Done, Some(VoiceCommand::Finish)),
                }
            }
            // A stalled speech playback cuts the session short rather than
            // leaving it wedged mid-answer.
            (VoiceState::SpeakingIntro, VoiceEvent::Timeout)
            | (VoiceState::SpeakingAnswer { .. }, VoiceEvent::Timeout) => {
                (VoiceState::Done, Some(VoiceCommand::Finish))
            }
            (state, _) => (state, None),
        };

        self.state = next_state;
        command
    }
}
