/// Convenience result type used across spinplot.
pub type SpinResult<T> = Result<T, SpinError>;

/// Top-level error taxonomy used by the rendering and encoding pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SpinError {
    /// Invalid user-provided parameters or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors reported by the animation encoder.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing parameters.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Encoding was requested for a frame sequence with no frames.
    #[error("cannot encode an empty frame sequence")]
    EmptySequence,

    /// A frame does not share the dimensions of the first frame in its sequence.
    #[error(
        "frame {index} is {got_width}x{got_height}, expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        /// Position of the offending frame in the sequence.
        index: u32,
        /// Width of the first frame.
        expected_width: u32,
        /// Height of the first frame.
        expected_height: u32,
        /// Width of the offending frame.
        got_width: u32,
        /// Height of the offending frame.
        got_height: u32,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpinError {
    /// Build a [`SpinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpinError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SpinError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SpinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors caused by the caller's input rather than the pipeline.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Serde(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
