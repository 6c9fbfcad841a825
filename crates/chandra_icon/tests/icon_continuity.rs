//! Continuity and mirror-symmetry tests for both icon strategies.

use chandra_icon::{
    ArcSweep, Disk, IconGenerator, IconGeometry, IconModel, IconStrategy, InnerEdge,
    MASK_FULL_THRESHOLD, MaskOffset, geometry,
};
use chandra_phase::illumination;

const STEP: f64 = 1e-4;

/// Largest silhouette change between adjacent samples. Endpoint jumps
/// between two empty silhouettes are invisible and ignored.
fn max_silhouette_jump(icon: &dyn IconStrategy, from: f64, to: f64) -> (f64, f64) {
    let mut worst_area = 0.0_f64;
    let mut worst_edge = 0.0_f64;
    let n = ((to - from) / STEP).round() as usize;
    let mut prev = icon.geometry(from);
    for i in 1..=n {
        let p = from + i as f64 * STEP;
        let cur = icon.geometry(p);
        worst_area = worst_area.max((cur.lit_fraction() - prev.lit_fraction()).abs());
        let (a0, b0) = prev.lit_span();
        let (a1, b1) = cur.lit_span();
        if b0 - a0 > 0.01 && b1 - a1 > 0.01 {
            worst_edge = worst_edge.max((a1 - a0).abs()).max((b1 - b0).abs());
        }
        prev = cur;
    }
    (worst_area, worst_edge)
}

fn inner_rx(g: IconGeometry) -> f64 {
    match g {
        IconGeometry::Arcs {
            inner: InnerEdge::Arc { rx, .. },
            ..
        } => rx,
        IconGeometry::Arcs {
            inner: InnerEdge::Diameter,
            ..
        } => 0.0,
        IconGeometry::Mask { .. } => panic!("expected arcs"),
    }
}

#[test]
fn arc_sweep_continuous_around_full() {
    let (area, edge) = max_silhouette_jump(&ArcSweep::default(), 0.49, 0.51);
    assert!(area < 1e-3, "area jump = {area}");
    assert!(edge < 1e-2, "edge jump = {edge}");
}

#[test]
fn arc_sweep_terminator_radius_continuous_around_full() {
    let icon = ArcSweep::default();
    let mut prev = inner_rx(icon.geometry(0.49));
    let mut p = 0.49;
    while p < 0.51 {
        p += STEP;
        let rx = inner_rx(icon.geometry(p));
        assert!((rx - prev).abs() < 1e-2, "rx jump at {p}: {prev} -> {rx}");
        prev = rx;
    }
}

#[test]
fn arc_sweep_continuous_at_quarters_and_new() {
    let icon = ArcSweep::default();
    for (from, to) in [(0.24, 0.26), (0.74, 0.76), (0.0, 0.02), (0.98, 0.9999)] {
        let (area, edge) = max_silhouette_jump(&icon, from, to);
        assert!(area < 1e-3, "{from}..{to}: area jump = {area}");
        assert!(edge < 1e-2, "{from}..{to}: edge jump = {edge}");
    }
    // Across the wrap: both ends are (nearly) dark.
    assert!(icon.geometry(0.9999).lit_fraction() < 1e-3);
    assert!(icon.geometry(0.0).lit_fraction() < 1e-12);
}

#[test]
fn arc_sweep_full_cycle_area_tracks_illumination() {
    let icon = ArcSweep::default();
    for i in 0..1000 {
        let p = i as f64 / 1000.0;
        let lit = icon.geometry(p).lit_fraction();
        assert!((lit - illumination(p)).abs() < 1e-3, "p={p}: {lit}");
    }
}

#[test]
fn mask_offset_continuous_below_threshold() {
    let icon = MaskOffset::default();
    let (area, _) = max_silhouette_jump(&icon, 0.0, 0.48);
    assert!(area < 1e-3, "waxing area jump = {area}");
    let (area, _) = max_silhouette_jump(&icon, 0.52, 0.9999);
    assert!(area < 1e-3, "waning area jump = {area}");
}

#[test]
fn mask_offset_snaps_only_at_threshold() {
    let icon = MaskOffset::default();
    assert!(illumination(0.49) < MASK_FULL_THRESHOLD);
    assert!(icon.geometry(0.49).lit_fraction() < 1.0);
    assert_eq!(icon.geometry(0.5).lit_fraction(), 1.0);
    assert_eq!(icon.geometry(0.4995).lit_fraction(), 1.0);
    // Both sides of full are fully clear: no visible jump when direction flips.
    assert_eq!(icon.geometry(0.5001).lit_fraction(), 1.0);
}

#[test]
fn strategies_mirror_waxing_onto_waning() {
    let disk = Disk::default();
    for model in [IconModel::ArcSweep, IconModel::MaskOffset] {
        let icon = IconGenerator::new(model, disk);
        for i in 1..500 {
            let p = i as f64 / 1000.0;
            let (a, b) = icon.geometry(p).lit_span();
            let (ma, mb) = icon.geometry(1.0 - p).lit_span();
            assert!(
                (ma - (2.0 * disk.cx - b)).abs() < 1e-9 && (mb - (2.0 * disk.cx - a)).abs() < 1e-9,
                "{} p={p}: {a}..{b} vs {ma}..{mb}",
                model.name()
            );
        }
    }
}

#[test]
fn geometry_is_idempotent() {
    for p in [0.0, 0.1, 0.25, 0.49, 0.5, 0.77] {
        assert_eq!(geometry(p), geometry(p));
    }
}

#[test]
fn canonical_geometry_uses_default_disk() {
    assert_eq!(geometry(0.3).disk(), Disk::default());
    assert!(matches!(geometry(0.3), IconGeometry::Arcs { .. }));
}
