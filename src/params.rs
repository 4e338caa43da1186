use std::path::Path;

use crate::encode::gif::GifOpts;
use crate::foundation::error::{SpinError, SpinResult};
use crate::session::render_session::SequencePlan;

/// User-facing parameters of one animation.
///
/// Field aliases accept the short names the web page and query strings use (`elev`, `r_axis`,
/// `duration`). Missing fields take their defaults; unknown fields are rejected.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationParams {
    /// Number of frames in the orbit.
    #[serde(alias = "frames")]
    pub num_frames: u32,
    /// Camera elevation in degrees, shared by every frame.
    #[serde(alias = "elev")]
    pub elevation_deg: f64,
    /// Azimuth increment between consecutive frames, in degrees.
    #[serde(alias = "r_axis")]
    pub azimuth_step_deg: f64,
    /// Display time of each frame in milliseconds.
    #[serde(alias = "duration")]
    pub frame_duration_ms: u32,
    /// Extra playbacks after the first; 0 loops forever.
    pub loop_count: u16,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            num_frames: 180,
            elevation_deg: 60.0,
            azimuth_step_deg: 2.0,
            frame_duration_ms: 100,
            loop_count: 0,
        }
    }
}

impl AnimationParams {
    /// Load parameters from a JSON file.
    pub fn from_json_file(path: &Path) -> SpinResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SpinError::Other(anyhow::anyhow!("read params '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Parse parameters from JSON text.
    pub fn from_json_str(text: &str) -> SpinResult<Self> {
        serde_json::from_str(text)
            .map_err(|e| SpinError::serde(format!("animation params json: {e}")))
    }

    /// Reject parameters no animation can be produced from.
    pub fn validate(&self) -> SpinResult<()> {
        self.sequence_plan()?;
        self.gif_opts().validate()
    }

    /// Camera orbit described by these parameters.
    pub fn sequence_plan(&self) -> SpinResult<SequencePlan> {
        SequencePlan::new(self.num_frames, self.elevation_deg, self.azimuth_step_deg)
    }

    /// Encoder options described by these parameters.
    pub fn gif_opts(&self) -> GifOpts {
        GifOpts {
            frame_duration_ms: self.frame_duration_ms,
            loop_count: self.loop_count,
            ..GifOpts::default()
        }
    }
}

/// Range, step and default of one slider.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ControlRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Slider increment; accepted values are `min + k * step`.
    pub step: f64,
    /// Initial slider position.
    pub default: f64,
}

impl ControlRange {
    /// Whether `v` is inside the range and on a step.
    pub fn accepts(&self, v: f64) -> bool {
        if !v.is_finite() || v < self.min || v > self.max {
            return false;
        }
        let k = (v - self.min) / self.step;
        (k - k.round()).abs() < 1e-9
    }

    fn check(&self, name: &str, v: f64) -> SpinResult<()> {
        if self.accepts(v) {
            return Ok(());
        }
        Err(SpinError::validation(format!(
            "{name} must be between {} and {} in steps of {}, got {v}",
            self.min, self.max, self.step
        )))
    }
}

/// Slider limits of the interactive page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ControlLimits {
    /// Frame count slider.
    pub num_frames: ControlRange,
    /// Elevation slider, degrees.
    pub elev: ControlRange,
    /// Azimuth step slider, degrees per frame.
    pub r_axis: ControlRange,
    /// Frame duration slider, milliseconds.
    pub duration: ControlRange,
}

impl ControlLimits {
    /// The limits the page ships with.
    pub const STANDARD: Self = Self {
        num_frames: ControlRange {
            min: 36.0,
            max: 360.0,
            step: 36.0,
            default: 180.0,
        },
        elev: ControlRange {
            min: 0.0,
            max: 90.0,
            step: 1.0,
            default: 60.0,
        },
        r_axis: ControlRange {
            min: 1.0,
            max: 10.0,
            step: 1.0,
            default: 2.0,
        },
        duration: ControlRange {
            min: 20.0,
            max: 200.0,
            step: 10.0,
            default: 100.0,
        },
    };

    /// Reject parameters a slider could not have produced.
    pub fn check(&self, params: &AnimationParams) -> SpinResult<()> {
        self.num_frames
            .check("num_frames", f64::from(params.num_frames))?;
        self.elev.check("elev", params.elevation_deg)?;
        self.r_axis.check("r_axis", params.azimuth_step_deg)?;
        self.duration
            .check("duration", f64::from(params.frame_duration_ms))
    }

    /// Parameters at every slider's default position.
    pub fn defaults(&self) -> AnimationParams {
        AnimationParams {
            num_frames: self.num_frames.default as u32,
            elevation_deg: self.elev.default,
            azimuth_step_deg: self.r_axis.default,
            frame_duration_ms: self.duration.default as u32,
            loop_count: 0,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/params.rs"]
mod tests;
