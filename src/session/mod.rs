//! Session-oriented rendering API.

/// Render session and frame sequence planning.
pub mod render_session;
