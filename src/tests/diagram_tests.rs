// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::diagram::PersistenceDiagram;
use crate::error::TopoError;
use crate::types::{BettiNumbers, PersistenceInterval};

fn two_cluster_diagram() -> PersistenceDiagram {
    let mut d = PersistenceDiagram::new(2);
    d.push(PersistenceInterval::new(0.0, 0.01, 0));
    d.push(PersistenceInterval::new(0.0, 0.01, 0));
    d.push(PersistenceInterval::new(0.0, 0.02, 0));
    d.push(PersistenceInterval::new(0.0, 10.0, 0));
    d.push(PersistenceInterval::new(0.0, f64::INFINITY, 0));
    d
}

#[test]
fn test_betti_counts_at_thresholds() {
    let d = two_cluster_diagram();

    // Scenario A: two clusters at threshold 1.0, one at 20.0.
    assert_eq!(d.betti_numbers(1.0).unwrap().beta_0, 2);
    assert_eq!(d.betti_numbers(20.0).unwrap().beta_0, 1);
    // At threshold 0 every interval is alive.
    assert_eq!(d.betti_numbers(0.0).unwrap().beta_0, 5);
}

#[test]
fn test_beta0_floor_applies_only_to_dimension_zero() {
    let mut d = PersistenceDiagram::new(2);
    // Only a loop alive at t=5; no component interval covers it.
    d.push(PersistenceInterval::new(0.0, 2.0, 0));
    d.push(PersistenceInterval::new(3.0, 8.0, 1));

    let betti = d.betti_numbers(5.0).unwrap();
    assert_eq!(betti.beta_0, 1, "non-empty diagram floors beta_0 to 1");
    assert_eq!(betti.beta_1, 1);

    // The floor never manufactures loops or voids.
    let betti = d.betti_numbers(100.0).unwrap();
    assert_eq!(betti.beta_0, 1);
    assert_eq!(betti.beta_1, 0);
    assert_eq!(betti.beta_2, 0);
}

#[test]
fn test_empty_diagram_is_all_zero() {
    let d = PersistenceDiagram::new(2);
    let betti = d.betti_numbers(0.0).unwrap();

    assert_eq!((betti.beta_0, betti.beta_1, betti.beta_2), (0, 0, 0));
    assert_eq!(betti.euler_characteristic(), 0);
    assert_eq!(betti.total_features(), 0);
}

#[test]
fn test_persistent_features_strict_threshold() {
    let d = two_cluster_diagram();

    let features = d.persistent_features(0.02);
    // Strictly greater than 0.02: the 10.0 interval and the essential one.
    assert_eq!(features.len(), 2);
    assert!(features.iter().any(|i| i.is_essential()));

    // Essential intervals are always included, however high the bar.
    let features = d.persistent_features(1e12);
    assert_eq!(features.len(), 1);
    assert!(features[0].is_essential());
}

#[test]
fn test_bottleneck_proxy_basics() {
    let a = two_cluster_diagram();
    let b = two_cluster_diagram();

    assert_eq!(a.bottleneck_distance_proxy(&b), 0.0);
    assert_eq!(
        a.bottleneck_distance_proxy(&b),
        b.bottleneck_distance_proxy(&a)
    );

    let mut c = two_cluster_diagram();
    c.push(PersistenceInterval::new(0.0, 5.0, 0));
    assert!(a.bottleneck_distance_proxy(&c) > 0.0);

    let empty = PersistenceDiagram::new(2);
    // Normalized by max(interval count, 1): finite even against empty.
    assert!(a.bottleneck_distance_proxy(&empty).is_finite());
}

#[test]
fn test_euler_characteristic() {
    let betti = BettiNumbers::new(2, 1, 1).unwrap();
    assert_eq!(betti.euler_characteristic(), 2);
    assert_eq!(betti.total_features(), 4);
}

#[test]
fn test_negative_betti_rejected() {
    let result = BettiNumbers::new(1, -1, 0);
    assert!(matches!(
        result,
        Err(TopoError::NegativeBetti {
            dimension: 1,
            value: -1
        })
    ));
}

#[test]
fn test_push_tracks_max_dimension() {
    let mut d = PersistenceDiagram::new(0);
    d.push(PersistenceInterval::new(0.0, 1.0, 2));
    assert_eq!(d.max_dimension(), 2);
}
