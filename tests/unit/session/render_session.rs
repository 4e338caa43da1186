use super::*;
use crate::render::cpu::CpuBackend;
use crate::render::plan::FramePlan;
use crate::surface::mesh::MeshOpts;

fn small_settings() -> RenderSettings {
    RenderSettings {
        max_edge_px: 48,
        clear_rgba: [255, 255, 255, 255],
        mesh: MeshOpts {
            row_count: 12,
            col_count: 12,
        },
    }
}

struct FailingBackend {
    inner: CpuBackend,
    fail_at: usize,
    calls: usize,
}

impl RenderBackend for FailingBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> SpinResult<FrameRGBA> {
        self.calls += 1;
        if self.calls > self.fail_at {
            return Err(SpinError::render("rasterizer gave up"));
        }
        self.inner.render_plan(plan)
    }
}

#[test]
fn azimuth_wraps_modulo_full_turn() {
    assert_eq!(azimuth_for_frame(0, 2.0), 0.0);
    assert_eq!(azimuth_for_frame(37, 10.0), 10.0);
    assert_eq!(azimuth_for_frame(180, 2.0), 0.0);
    assert_eq!(azimuth_for_frame(359, 1.0), 359.0);
    assert_eq!(azimuth_for_frame(1, -1.0), 359.0);
    assert_eq!(azimuth_for_frame(3, 0.5), 1.5);
    for i in 0..1000 {
        let a = azimuth_for_frame(i, 7.0);
        assert!((0.0..360.0).contains(&a));
        assert_eq!(a, (f64::from(i) * 7.0) % 360.0);
    }
}

#[test]
fn plan_validation_rejects_empty_and_non_finite() {
    assert!(SequencePlan::new(0, 60.0, 2.0).is_err());
    assert!(SequencePlan::new(10, f64::NAN, 2.0).is_err());
    assert!(SequencePlan::new(10, 60.0, f64::INFINITY).is_err());
    // Elevation outside 0..=90 passes through.
    assert!(SequencePlan::new(10, 135.0, 2.0).is_ok());
}

#[test]
fn plan_viewpoints_are_index_ordered() {
    let plan = SequencePlan::new(4, 45.0, 100.0).unwrap();
    let vps: Vec<_> = plan.viewpoints().collect();
    assert_eq!(vps.len(), 4);
    for (i, (idx, vp)) in vps.iter().enumerate() {
        assert_eq!(idx.0 as usize, i);
        assert_eq!(vp.elevation_deg, 45.0);
    }
    assert_eq!(vps[3].1.azimuth_deg, 300.0);
    assert_eq!(plan.viewpoint(FrameIndex(4)).azimuth_deg, 40.0);
}

#[test]
fn sequence_has_exact_length_and_shared_size() {
    let mut session = RenderSession::new(small_settings()).unwrap();
    for n in [1u32, 2, 7] {
        let plan = SequencePlan::new(n, 60.0, 10.0).unwrap();
        let frames = session.build_sequence(&plan).unwrap();
        assert_eq!(frames.len(), n as usize);
        let (w, h) = (frames[0].width, frames[0].height);
        assert!(w.max(h) == 48);
        assert!(frames.iter().all(|f| f.width == w && f.height == h));
    }
}

#[test]
fn sequence_frames_follow_index_order() {
    let mut session = RenderSession::new(small_settings()).unwrap();
    let plan = SequencePlan::new(5, 30.0, 45.0).unwrap();
    let frames = session.build_sequence(&plan).unwrap();

    let viewport = session
        .viewport_for(plan.viewpoints().map(|(_, vp)| vp))
        .unwrap();
    for (idx, vp) in plan.viewpoints() {
        let expected = session.render_frame_in(vp, &viewport).unwrap();
        assert_eq!(frames[idx.0 as usize], expected, "frame {}", idx.0);
    }
    assert_ne!(frames[0], frames[1]);
}

#[test]
fn full_turn_step_repeats_first_frame() {
    let mut session = RenderSession::new(small_settings()).unwrap();
    let plan = SequencePlan::new(3, 60.0, 360.0).unwrap();
    let frames = session.build_sequence(&plan).unwrap();
    assert_eq!(frames[0], frames[1]);
    assert_eq!(frames[1], frames[2]);
}

#[test]
fn rendering_is_deterministic_across_sessions() {
    let plan = SequencePlan::new(3, 60.0, 20.0).unwrap();
    let a = RenderSession::new(small_settings())
        .unwrap()
        .build_sequence(&plan)
        .unwrap();
    let b = RenderSession::new(small_settings())
        .unwrap()
        .build_sequence(&plan)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_frame_is_cropped_without_padding() {
    let mut session = RenderSession::new(small_settings()).unwrap();
    let frame = session
        .render_frame(Viewpoint::new(60.0, 30.0).unwrap())
        .unwrap();
    assert_eq!(frame.width.max(frame.height), 48);

    // Content reaches close to every edge.
    let bg = [255u8, 255, 255, 255];
    let row_has_ink = |y: u32| (0..frame.width).any(|x| frame.pixel(x, y) != Some(bg));
    let col_has_ink = |x: u32| (0..frame.height).any(|y| frame.pixel(x, y) != Some(bg));
    assert!((0..3).any(row_has_ink));
    assert!((frame.height - 3..frame.height).any(row_has_ink));
    assert!((0..3).any(col_has_ink));
    assert!((frame.width - 3..frame.width).any(col_has_ink));
}

#[test]
fn render_failure_aborts_sequence() {
    let backend = Box::new(FailingBackend {
        inner: CpuBackend::new(),
        fail_at: 2,
        calls: 0,
    });
    let mut session = RenderSession::with_backend(small_settings(), backend).unwrap();
    let plan = SequencePlan::new(5, 60.0, 10.0).unwrap();

    let mut sink = InMemorySink::new();
    let err = session.render_sequence(&plan, &mut sink).unwrap_err();
    assert!(matches!(err, SpinError::Render(_)));
    assert_eq!(sink.frames().len(), 2);
}

#[test]
fn session_rejects_invalid_settings() {
    let bad = RenderSettings::default().with_max_edge_px(0);
    assert!(RenderSession::new(bad).is_err());
}

#[test]
fn session_samples_full_resolution_grid() {
    let session = RenderSession::new(small_settings()).unwrap();
    assert_eq!(session.grid().rows(), 100);
    // Stride ceil(100 / 12) = 9 keeps rows 0, 9, .., 90, 99: 12 samples, 11 faces per axis.
    assert_eq!(session.mesh().len(), 11 * 11);
    assert!(session.mesh().len() <= 12 * 12);
    assert_eq!(session.settings().max_edge_px, 48);
}
