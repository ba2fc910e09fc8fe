//! Voice session WebSocket handler.
//!
//! The client owns speech I/O (recording, synthesis) and sends session
//! events as JSON text frames; the server owns the state machine and the
//! generation call, and answers each event with at most one command frame.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::generation::GenerationOptions;
use crate::prompt::{self, AssistanceType, Language};
use crate::voice::{VoiceCommand, VoiceEvent, VoiceSession};

use super::state::GuardedGenerationClient;

#[derive(Deserialize, Debug)]
pub struct VoiceQuery {
    language: Option<Language>,
}

/// WebSocket upgrade handler for `GET /voice`.
pub async fn voice_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<VoiceQuery>,
    State(generation): State<GuardedGenerationClient>,
) -> Response {
    let language = query.language.unwrap_or(Language::English);
    debug!(?language, "voice session upgrade");
    ws.on_upgrade(move |socket| handle_socket(socket, language, generation))
}

/// Handle an established voice session connection.
async fn handle_socket(socket: WebSocket, language: Language, generation: GuardedGenerationClient) {
    let mut session = VoiceSession::new(language);
    let (mut sink, mut stream) = socket.split();

    while let Some(msg) = stream.next().await {
        let msg = match msg {
            Ok(msg) => msg,
            Err(err) => {
                debug!("voice socket error: {err}");
                break;
            }
        };

        let event = match msg {
            Message::Text(text) => match serde_json::from_str::<VoiceEvent>(text.as_str()) {
                Ok(event) => event,
                Err(err) => {
                    warn!("unparseable voice event: {err}");
                    continue;
                }
            },
            Message::Close(_) => break,
            _ => continue,
        };

        let mut command = session.handle(event);

        // The generate command never reaches the client: the model call is
        // server-side, and its outcome is fed straight back into the session.
        while let Some(VoiceCommand::Generate { transcript }) = command {
            let instruction = prompt::build(AssistanceType::Assistant, language, &transcript);
            let outcome = generation
                .generate(&instruction, &GenerationOptions::default())
                .await;
            let event = match outcome {
                Ok(reply) => VoiceEvent::ReplyReady { reply },
                Err(err) => {
                    error!("voice generation failed: {err}");
                    VoiceEvent::GenerationFailed {
                        message: "Failed to generate response from Gemini.".to_string(),
                    }
                }
            };
            command = session.handle(event);
        }

        if let Some(command) = command {
            let payload = match serde_json::to_string(&command) {
                Ok(payload) => payload,
                Err(err) => {
                    error!("failed to serialize voice command: {err}");
                    break;
                }
            };
            if sink.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }

        if session.state().is_terminal() {
            debug!(state = ?session.state(), "voice session finished");
            break;
        }
    }

    let _ = sink.close().await;
}
