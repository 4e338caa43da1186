use super::*;
use crate::surface::mesh::MeshOpts;

fn small_settings() -> RenderSettings {
    RenderSettings {
        max_edge_px: 40,
        mesh: MeshOpts {
            row_count: 8,
            col_count: 8,
        },
        ..RenderSettings::default()
    }
}

fn decode_frame_count(bytes: &[u8]) -> usize {
    let mut opts = ::gif::DecodeOptions::new();
    opts.set_color_output(::gif::ColorOutput::RGBA);
    let mut dec = opts.read_info(bytes).unwrap();
    let mut n = 0;
    while dec.read_next_frame().unwrap().is_some() {
        n += 1;
    }
    n
}

#[test]
fn artifact_carries_metadata() {
    let params = AnimationParams {
        num_frames: 4,
        elevation_deg: 30.0,
        azimuth_step_deg: 90.0,
        frame_duration_ms: 50,
        loop_count: 0,
    };
    let art = generate_animation(&params, &small_settings()).unwrap();
    assert_eq!(art.frame_count, 4);
    assert_eq!(art.width.max(art.height), 40);
    assert_eq!(art.frame_duration_ms, 50);
    assert_eq!(art.file_name(), "3d_animation.gif");
    assert_eq!(art.mime(), "image/gif");
    assert!(!art.is_empty());
    assert_eq!(&art.as_bytes()[..6], b"GIF89a");
    assert_eq!(decode_frame_count(art.as_bytes()), 4);
}

#[test]
fn invalid_params_fail_before_rendering() {
    let params = AnimationParams {
        num_frames: 0,
        ..AnimationParams::default()
    };
    let err = generate_animation(&params, &small_settings()).unwrap_err();
    assert!(matches!(err, SpinError::Validation(_)));

    let params = AnimationParams {
        frame_duration_ms: 0,
        num_frames: 2,
        ..AnimationParams::default()
    };
    assert!(generate_animation(&params, &small_settings()).is_err());
}

#[test]
fn invalid_settings_are_reported() {
    let params = AnimationParams {
        num_frames: 2,
        ..AnimationParams::default()
    };
    let err = generate_animation(&params, &small_settings().with_max_edge_px(0)).unwrap_err();
    assert!(err.is_user_error());
}

#[test]
fn write_to_persists_bytes() {
    let params = AnimationParams {
        num_frames: 2,
        ..AnimationParams::default()
    };
    let art = generate_animation(&params, &small_settings()).unwrap();
    let path = std::env::temp_dir().join(format!("spinplot-pipeline-{}.gif", std::process::id()));
    art.write_to(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), art.as_bytes());
    let _ = std::fs::remove_file(&path);
}
