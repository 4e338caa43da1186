use super::*;

#[test]
fn linspace_includes_both_endpoints() {
    let v = linspace(-5.0, 5.0, 100);
    assert_eq!(v.len(), 100);
    assert_eq!(v[0], -5.0);
    assert_eq!(v[99], 5.0);
    assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
    assert!(linspace(0.0, 1.0, 0).is_empty());
}

#[test]
fn default_grid_covers_domain_at_fixed_resolution() {
    let g = sample_surface();
    assert_eq!(g.rows(), GRID_RESOLUTION);
    assert_eq!(g.cols(), GRID_RESOLUTION);
    assert_eq!(g.z_values().len(), GRID_RESOLUTION * GRID_RESOLUTION);
    assert_eq!(g.x_range(), (-5.0, 5.0));
    assert_eq!(g.y_range(), (-5.0, 5.0));
}

#[test]
fn grid_uses_meshgrid_layout() {
    let g = sample_surface();
    // x varies along columns, y along rows.
    assert_eq!(g.x(0, 0), g.x(42, 0));
    assert_eq!(g.y(0, 0), g.y(0, 42));
    assert!(g.x(0, 1) > g.x(0, 0));
    assert!(g.y(1, 0) > g.y(0, 0));
}

#[test]
fn heights_match_surface_function() {
    let g = sample_surface();
    for r in (0..g.rows()).step_by(7) {
        for c in (0..g.cols()).step_by(11) {
            assert_eq!(g.z(r, c), surface_height(g.x(r, c), g.y(r, c)));
        }
    }
}

#[test]
fn heights_are_point_symmetric() {
    let g = sample_surface();
    let n = g.rows();
    for r in 0..n {
        for c in 0..n {
            let a = g.z(r, c);
            let b = g.z(n - 1 - r, n - 1 - c);
            assert!((a - b).abs() < 1e-12, "asymmetry at ({r}, {c}): {a} vs {b}");
        }
    }
}

#[test]
fn heights_stay_in_unit_interval() {
    let (lo, hi) = sample_surface().z_range();
    assert!(lo > 0.0);
    assert!(hi <= 1.0);
    // Corners are the lowest samples: exp(-0.1 * 50).
    assert!((lo - (-5.0f64).exp()).abs() < 1e-12);
}

#[test]
fn sampling_is_deterministic() {
    assert_eq!(sample_surface(), sample_surface());
}

#[test]
fn coarse_spec_changes_only_resolution() {
    let g = sample_grid(GridSpec {
        half_extent: DOMAIN_HALF_EXTENT,
        resolution: 5,
    });
    assert_eq!(g.rows(), 5);
    assert_eq!(g.x(0, 2), 0.0);
    assert_eq!(g.z(2, 2), 1.0);
}
