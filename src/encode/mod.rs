//! Encoding sinks.
//!
//! Sinks consume rendered frames in sequence order and are driven by
//! `RenderSession::render_sequence`.

/// Animated GIF sink and one-shot encoder.
pub mod gif;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
