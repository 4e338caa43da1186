use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "spinplot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the orbit animation as a GIF.
    Render(RenderArgs),
    /// Render a single viewpoint as a PNG.
    Frame(FrameArgs),
    /// Serve the interactive page over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Animation parameters JSON; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of frames.
    #[arg(long)]
    num_frames: Option<u32>,

    /// Camera elevation in degrees.
    #[arg(long, allow_negative_numbers = true)]
    elevation: Option<f64>,

    /// Azimuth change per frame in degrees.
    #[arg(long, allow_negative_numbers = true)]
    azimuth_step: Option<f64>,

    /// Frame duration in milliseconds.
    #[arg(long)]
    duration: Option<u32>,

    /// Extra playbacks after the first (0 loops forever).
    #[arg(long)]
    loop_count: Option<u16>,

    /// Longer canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Output GIF path.
    #[arg(long, default_value = spinplot::GIF_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Camera elevation in degrees.
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    elevation: f64,

    /// Camera azimuth in degrees.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    azimuth: f64,

    /// Longer canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8501")]
    listen: SocketAddr,

    /// Generations allowed to render at the same time.
    #[arg(long, default_value_t = 2)]
    max_concurrent: usize,

    /// Longer canvas edge in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Tokio worker threads (defaults to one per core).
    #[arg(long)]
    worker_threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut params = match &args.config {
        Some(path) => spinplot::AnimationParams::from_json_file(path)
            .with_context(|| format!("load params '{}'", path.display()))?,
        None => spinplot::AnimationParams::default(),
    };
    if let Some(n) = args.num_frames {
        params.num_frames = n;
    }
    if let Some(e) = args.elevation {
        params.elevation_deg = e;
    }
    if let Some(s) = args.azimuth_step {
        params.azimuth_step_deg = s;
    }
    if let Some(d) = args.duration {
        params.frame_duration_ms = d;
    }
    if let Some(l) = args.loop_count {
        params.loop_count = l;
    }

    let settings = spinplot::RenderSettings::default().with_max_edge_px(args.size);
    let artifact = spinplot::generate_animation(&params, &settings)?;

    create_parent_dir(&args.out)?;
    std::fs::write(&args.out, artifact.as_bytes())
        .with_context(|| format!("write gif '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {}x{})",
        args.out.display(),
        artifact.frame_count,
        artifact.width,
        artifact.height
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let settings = spinplot::RenderSettings::default().with_max_edge_px(args.size);
    let mut sess = spinplot::RenderSession::new(settings.clone())?;
    let frame = sess.render_frame(spinplot::Viewpoint::new(args.elevation, args.azimuth)?)?;
    let rgba = frame.to_opaque_rgba8(settings.clear_rgba)?;

    create_parent_dir(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &rgba,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let settings = spinplot::RenderSettings::default().with_max_edge_px(args.size);
    let worker = spinplot::shell::worker::GenerationWorker::new(settings, args.max_concurrent)?;
    let state = Arc::new(spinplot::shell::server::AppState::new(worker));

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(threads) = args.worker_threads {
        tracing::info!("configuring tokio runtime with {threads} worker threads");
        runtime_builder.worker_threads(threads);
    }
    let runtime = runtime_builder.build().context("build tokio runtime")?;

    runtime.block_on(spinplot::shell::server::serve(args.listen, state))?;
    Ok(())
}

fn create_parent_dir(path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
