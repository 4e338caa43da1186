use super::*;

#[test]
fn flatten_premul_over_black_produces_expected_rgb() {
    // Premultiplied red @ 50% alpha => rgb is 128,0,0 when premul.
    let src = vec![128u8, 0u8, 0u8, 128u8];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [0, 0, 0, 255]).unwrap();
    assert_eq!(dst, vec![128u8, 0u8, 0u8, 255u8]);
}

#[test]
fn flatten_straight_over_white_blends_background() {
    let src = vec![0u8, 0u8, 0u8, 0u8, 10u8, 20u8, 30u8, 255u8];
    let mut dst = vec![0u8; 8];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [255, 255, 255, 255]).unwrap();
    assert_eq!(dst, vec![255, 255, 255, 255, 10, 20, 30, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 4];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 8], true, [0, 0, 0, 255]).is_err());
}

#[test]
fn pixel_lookup_is_row_major() {
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: (0u8..16).collect(),
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([4, 5, 6, 7]));
    assert_eq!(frame.pixel(0, 1), Some([8, 9, 10, 11]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.canvas(), Canvas { width: 2, height: 2 });
}

#[test]
fn settings_validation_catches_bad_values() {
    assert!(RenderSettings::default().validate().is_ok());
    assert!(RenderSettings::default().with_max_edge_px(0).validate().is_err());
    assert!(
        RenderSettings::default()
            .with_max_edge_px(100_000)
            .validate()
            .is_err()
    );
    let translucent = RenderSettings {
        clear_rgba: [255, 255, 255, 0],
        ..RenderSettings::default()
    };
    assert!(translucent.validate().is_err());
}
