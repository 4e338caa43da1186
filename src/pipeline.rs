use std::path::Path;

use crate::encode::gif::{GIF_FILE_NAME, GIF_MIME, encode_gif};
use crate::foundation::error::{SpinError, SpinResult};
use crate::params::AnimationParams;
use crate::render::backend::RenderSettings;
use crate::session::render_session::RenderSession;

/// An encoded animation together with the parameters it was produced from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationArtifact {
    bytes: Vec<u8>,
    /// Number of frames in the animation.
    pub frame_count: u32,
    /// Width shared by every frame, in pixels.
    pub width: u32,
    /// Height shared by every frame, in pixels.
    pub height: u32,
    /// Display time of each frame in milliseconds, as requested.
    pub frame_duration_ms: u32,
    /// Extra playbacks after the first; 0 loops forever.
    pub loop_count: u16,
}

impl AnimationArtifact {
    /// File name the animation is offered under.
    pub fn file_name(&self) -> &'static str {
        GIF_FILE_NAME
    }

    /// MIME type of [`Self::as_bytes`].
    pub fn mime(&self) -> &'static str {
        GIF_MIME
    }

    /// The encoded GIF.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take ownership of the encoded GIF.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encoded buffer is empty. Never true for artifacts from [`generate_animation`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the encoded GIF to `path`.
    pub fn write_to(&self, path: &Path) -> SpinResult<()> {
        std::fs::write(path, &self.bytes).map_err(|e| {
            SpinError::Other(anyhow::anyhow!("write '{}': {e}", path.display()))
        })
    }
}

/// Render the orbit described by `params` and encode it as a looping GIF.
///
/// Pipeline:
/// 1. [`RenderSession::new`] samples the surface and builds the mesh.
/// 2. [`RenderSession::build_sequence`] renders every frame in order.
/// 3. [`encode_gif`] concatenates the frames.
///
/// The session and its drawing surface are dropped before encoding starts, on success and on
/// error alike.
#[tracing::instrument(skip(settings))]
pub fn generate_animation(
    params: &AnimationParams,
    settings: &RenderSettings,
) -> SpinResult<AnimationArtifact> {
    params.validate()?;
    let plan = params.sequence_plan()?;

    let frames = {
        let mut session = RenderSession::new(settings.clone())?;
        session.build_sequence(&plan)?
    };
    let (width, height) = frames
        .first()
        .map(|f| (f.width, f.height))
        .ok_or(SpinError::EmptySequence)?;

    let mut opts = params.gif_opts();
    opts.bg_rgba = settings.clear_rgba;
    let bytes = encode_gif(frames, &opts)?;

    tracing::info!(
        frames = plan.frame_count,
        width,
        height,
        bytes = bytes.len(),
        "generated animation"
    );
    Ok(AnimationArtifact {
        bytes,
        frame_count: plan.frame_count,
        width,
        height,
        frame_duration_ms: params.frame_duration_ms,
        loop_count: params.loop_count,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
