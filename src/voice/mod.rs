//! Voice conversation flow.
//!
//! The session state machine is pure and synchronous; the WebSocket layer
//! in `server::voice_ws` owns the I/O and feeds it events.

pub mod session;

pub use session::{VoiceCommand, VoiceEvent, VoiceSession, VoiceState};
