use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::foundation::error::{SpinError, SpinResult};
use crate::params::AnimationParams;
use crate::pipeline::{AnimationArtifact, generate_animation};
use crate::render::backend::RenderSettings;

/// Runs animation generations off the async executor.
///
/// Each submission renders on the blocking pool with its own session. At most `max_concurrent`
/// generations run at once; further submissions wait for a permit.
#[derive(Clone, Debug)]
pub struct GenerationWorker {
    settings: Arc<RenderSettings>,
    permits: Arc<Semaphore>,
}

impl GenerationWorker {
    /// Create a worker rendering with `settings`.
    pub fn new(settings: RenderSettings, max_concurrent: usize) -> SpinResult<Self> {
        settings.validate()?;
        if max_concurrent == 0 {
            return Err(SpinError::validation("max_concurrent must be at least 1"));
        }
        Ok(Self {
            settings: Arc::new(settings),
            permits: Arc::new(Semaphore::new(max_concurrent)),
        })
    }

    /// Settings every generation renders with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Generations that could start right now without waiting.
    pub fn available_slots(&self) -> usize {
        self.permits.available_permits()
    }

    /// Generate one animation and resolve once it is encoded.
    ///
    /// The permit travels with the blocking job, so a slot frees up only when rendering is done,
    /// even if the returned future was dropped first.
    pub async fn submit(&self, params: AnimationParams) -> SpinResult<AnimationArtifact> {
        let permit = Arc::clone(&self.permits)
            .acquire_owned()
            .await
            .map_err(|e| SpinError::Other(anyhow::anyhow!("generation worker closed: {e}")))?;
        let settings = Arc::clone(&self.settings);

        let job = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            generate_animation(&params, &settings)
        });
        job.await
            .map_err(|e| SpinError::Other(anyhow::anyhow!("generation task failed: {e}")))?
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/worker.rs"]
mod tests;
