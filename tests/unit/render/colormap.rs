use super::*;

#[test]
fn endpoints_match_viridis() {
    assert_eq!(viridis(0.0), [0x44, 0x01, 0x54]);
    assert_eq!(viridis(1.0), [0xfd, 0xe7, 0x25]);
    assert_eq!(viridis(0.5), [0x21, 0x91, 0x8c]);
}

#[test]
fn out_of_range_inputs_clamp() {
    assert_eq!(viridis(-3.0), viridis(0.0));
    assert_eq!(viridis(7.0), viridis(1.0));
    assert_eq!(viridis(f64::NAN), viridis(0.0));
}

#[test]
fn green_channel_increases_monotonically() {
    let mut prev = 0u8;
    for i in 0..=100 {
        let g = viridis(f64::from(i) / 100.0)[1];
        assert!(g >= prev);
        prev = g;
    }
}
