use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{SpinError, SpinResult};
use crate::render::backend::{FrameRGBA, flatten_to_opaque_rgba8};

/// File name the animation is offered under.
pub const GIF_FILE_NAME: &str = "3d_animation.gif";
/// MIME type of the encoded animation.
pub const GIF_MIME: &str = "image/gif";

/// Options for GIF encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOpts {
    /// Display time of every frame in milliseconds. Stored as centiseconds, rounded to nearest.
    pub frame_duration_ms: u32,
    /// Number of extra playbacks; 0 loops forever.
    pub loop_count: u16,
    /// NeuQuant sampling speed, 1 (best) ..= 30 (fastest).
    pub quantize_speed: i32,
    /// Colour translucent pixels are composited over before quantization.
    pub bg_rgba: [u8; 4],
}

impl Default for GifOpts {
    fn default() -> Self {
        Self {
            frame_duration_ms: 100,
            loop_count: 0,
            quantize_speed: 10,
            bg_rgba: [255, 255, 255, 255],
        }
    }
}

impl GifOpts {
    /// Reject options the GIF container cannot represent.
    pub fn validate(&self) -> SpinResult<()> {
        if !(1..=30).contains(&self.quantize_speed) {
            return Err(SpinError::validation(format!(
                "gif quantize speed must be in 1..=30, got {}",
                self.quantize_speed
            )));
        }
        self.delay_centis().map(|_| ())
    }

    /// Per-frame delay in GIF centiseconds.
    pub fn delay_centis(&self) -> SpinResult<u16> {
        if self.frame_duration_ms == 0 {
            return Err(SpinError::validation("frame duration must be > 0 ms"));
        }
        let centis = (u64::from(self.frame_duration_ms) + 5) / 10;
        u16::try_from(centis.max(1)).map_err(|_| {
            SpinError::validation(format!(
                "frame duration {} ms exceeds the gif delay limit",
                self.frame_duration_ms
            ))
        })
    }

    fn repeat(&self) -> ::gif::Repeat {
        match self.loop_count {
            0 => ::gif::Repeat::Infinite,
            n => ::gif::Repeat::Finite(n),
        }
    }
}

/// Streaming GIF sink.
///
/// The container header is written lazily on the first frame, so a sequence that ends without any
/// frames never reaches the encoder and fails with [`SpinError::EmptySequence`].
pub struct GifSink {
    opts: GifOpts,
    delay_centis: u16,
    cfg: Option<SinkConfig>,
    encoder: Option<::gif::Encoder<Vec<u8>>>,
    frames_written: u32,
    scratch: Vec<u8>,
    output: Option<Vec<u8>>,
}

impl GifSink {
    /// Create a sink with validated options.
    pub fn new(opts: GifOpts) -> SpinResult<Self> {
        opts.validate()?;
        Ok(Self {
            delay_centis: opts.delay_centis()?,
            opts,
            cfg: None,
            encoder: None,
            frames_written: 0,
            scratch: Vec::new(),
            output: None,
        })
    }

    /// Frames encoded since the last `begin`.
    pub fn frames_written(&self) -> u32 {
        self.frames_written
    }

    /// Take the encoded bytes produced by a successful `end`.
    pub fn take_output(&mut self) -> Option<Vec<u8>> {
        self.output.take()
    }

    fn open_encoder(&self, width: u16, height: u16) -> SpinResult<::gif::Encoder<Vec<u8>>> {
        let mut enc = ::gif::Encoder::new(Vec::new(), width, height, &[])
            .map_err(|e| SpinError::encode(format!("failed to start gif stream: {e}")))?;
        enc.set_repeat(self.opts.repeat())
            .map_err(|e| SpinError::encode(format!("failed to write gif loop extension: {e}")))?;
        Ok(enc)
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> SpinResult<()> {
        Canvas::new(cfg.width, cfg.height)?.to_u16()?;
        self.cfg = Some(cfg);
        self.encoder = None;
        self.frames_written = 0;
        self.output = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: FrameRGBA) -> SpinResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(SpinError::encode("gif sink received a frame before begin"));
        };
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(SpinError::DimensionMismatch {
                index: idx.0,
                expected_width: cfg.width,
                expected_height: cfg.height,
                got_width: frame.width,
                got_height: frame.height,
            });
        }

        let canvas = frame.canvas();
        if frame.data.len() != canvas.rgba_len() {
            return Err(SpinError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }
        let (w, h) = canvas.to_u16()?;

        self.scratch.resize(frame.data.len(), 0);
        flatten_to_opaque_rgba8(
            &mut self.scratch,
            &frame.data,
            frame.premultiplied,
            self.opts.bg_rgba,
        )?;
        drop(frame);

        if self.encoder.is_none() {
            self.encoder = Some(self.open_encoder(w, h)?);
        }
        let Some(enc) = self.encoder.as_mut() else {
            return Err(SpinError::encode("gif encoder is not open"));
        };

        let mut gif_frame =
            ::gif::Frame::from_rgba_speed(w, h, &mut self.scratch, self.opts.quantize_speed);
        gif_frame.delay = self.delay_centis;
        enc.write_frame(&gif_frame).map_err(|e| {
            SpinError::encode(format!("failed to write gif frame {}: {e}", idx.0))
        })?;

        self.frames_written += 1;
        tracing::trace!(frame = idx.0, "encoded gif frame");
        Ok(())
    }

    fn end(&mut self) -> SpinResult<()> {
        let Some(enc) = self.encoder.take() else {
            return Err(SpinError::EmptySequence);
        };
        let bytes = enc
            .into_inner()
            .map_err(|e| SpinError::encode(format!("failed to finish gif stream: {e}")))?;
        self.output = Some(bytes);
        Ok(())
    }
}

/// Encode an ordered, non-empty frame sequence into one looping GIF.
///
/// Every frame must share the first frame's dimensions. Frames are consumed as they are encoded.
#[tracing::instrument(skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(frames: Vec<FrameRGBA>, opts: &GifOpts) -> SpinResult<Vec<u8>> {
    let Some(first) = frames.first() else {
        return Err(SpinError::EmptySequence);
    };
    let cfg = SinkConfig {
        width: first.width,
        height: first.height,
        frame_count: u32::try_from(frames.len())
            .map_err(|_| SpinError::validation("too many frames for one animation"))?,
    };

    let mut sink = GifSink::new(*opts)?;
    sink.begin(cfg)?;
    for (i, frame) in (0u32..).zip(frames) {
        sink.push_frame(FrameIndex(i), frame)?;
    }
    sink.end()?;

    let bytes = sink
        .take_output()
        .ok_or_else(|| SpinError::encode("gif sink produced no output"))?;
    tracing::debug!(bytes = bytes.len(), "encoded gif");
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
