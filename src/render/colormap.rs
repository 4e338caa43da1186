use crate::foundation::math::lerp_u8;

// Viridis sampled at t = 0.0, 0.1, ..., 1.0.
const VIRIDIS_STOPS: [[u8; 3]; 11] = [
    [0x44, 0x01, 0x54],
    [0x48, 0x24, 0x75],
    [0x41, 0x44, 0x87],
    [0x35, 0x5f, 0x8d],
    [0x2a, 0x78, 0x8e],
    [0x21, 0x91, 0x8c],
    [0x22, 0xa8, 0x84],
    [0x44, 0xbf, 0x70],
    [0x7a, 0xd1, 0x51],
    [0xbd, 0xdf, 0x26],
    [0xfd, 0xe7, 0x25],
];

/// Map `t` in `[0, 1]` onto the viridis colormap. Out-of-range and NaN inputs clamp.
pub fn viridis(t: f64) -> [u8; 3] {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = VIRIDIS_STOPS.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last - 1);
    let frac = pos - i as f64;
    let a = VIRIDIS_STOPS[i];
    let b = VIRIDIS_STOPS[i + 1];
    [
        lerp_u8(a[0], b[0], frac),
        lerp_u8(a[1], b[1], frac),
        lerp_u8(a[2], b[2], frac),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/colormap.rs"]
mod tests;
