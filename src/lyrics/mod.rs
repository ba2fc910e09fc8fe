//! Pure lyric text processing.
//!
//! Everything in here is synchronous, deterministic and free of shared
//! state: rhyme-scheme inference over a block of lyric lines, and cleanup
//! of model-generated text for display and for speech playback.

pub mod normalize;
pub mod rhyme;

pub use normalize::{
    extract_json, normalize_for_display, normalize_for_speech, split_lines, split_sentences,
};
pub use rhyme::{classify, RhymeAnalysis};
