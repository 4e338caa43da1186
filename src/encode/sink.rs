use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SpinError, SpinResult};
use crate::render::backend::FrameRGBA;

/// Configuration provided to a [`FrameSink`] at the start of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Width shared by every frame, in pixels.
    pub width: u32,
    /// Height shared by every frame, in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frame_count: u32,
}

/// Sink contract for consuming rendered frames in sequence order.
///
/// Ordering contract: `push_frame` is called with strictly increasing `FrameIndex` values starting
/// at 0. Frames are handed over by value.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> SpinResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: FrameRGBA) -> SpinResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> SpinResult<()>;
}

/// Sink that keeps every frame in memory, in push order.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameRGBA>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    /// Take ownership of the captured frames.
    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SpinResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.frames.reserve(cfg.frame_count as usize);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: FrameRGBA) -> SpinResult<()> {
        if idx.0 as usize != self.frames.len() {
            return Err(SpinError::validation(format!(
                "frame {} pushed out of order (expected {})",
                idx.0,
                self.frames.len()
            )));
        }
        self.frames.push(frame);
        Ok(())
    }

    fn end(&mut self) -> SpinResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
