// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::dist::{distance_matrix, PointCloud};
use crate::error::TopoError;

#[test]
fn test_known_distances() {
    let cloud = PointCloud::from_rows(&[vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
    let dm = distance_matrix(&cloud);

    assert_eq!(dm.len(), 2);
    assert_eq!(dm.get(0, 1), 5.0);
    assert_eq!(dm.get(1, 0), 5.0);
}

#[test]
fn test_symmetry_and_zero_diagonal() {
    let cloud = PointCloud::from_rows(&[
        vec![0.0, 1.0, 2.0],
        vec![4.0, -1.0, 0.5],
        vec![-3.0, 2.0, 2.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    let dm = distance_matrix(&cloud);

    for i in 0..4 {
        assert_eq!(dm.get(i, i), 0.0, "diagonal must be zero");
        for j in 0..4 {
            assert_eq!(dm.get(i, j), dm.get(j, i), "matrix must be symmetric");
        }
    }
}

#[test]
fn test_series_becomes_column_cloud() {
    let cloud = PointCloud::from_series(&[1.0, 2.0, 4.0]).unwrap();

    assert_eq!(cloud.len(), 3);
    assert_eq!(cloud.dim(), 1);

    let dm = distance_matrix(&cloud);
    assert_eq!(dm.get(0, 2), 3.0);
    assert_eq!(dm.get(1, 2), 2.0);
}

#[test]
fn test_ragged_rows_rejected() {
    let result = PointCloud::from_rows(&[vec![0.0, 0.0], vec![1.0]]);
    assert!(matches!(
        result,
        Err(TopoError::RaggedRow {
            row: 1,
            expected: 2,
            found: 1
        })
    ));
}

#[test]
fn test_misaligned_flat_buffer_rejected() {
    let result = PointCloud::from_flat(vec![1.0, 2.0, 3.0], 2);
    assert!(matches!(
        result,
        Err(TopoError::MisalignedBuffer { len: 3, dim: 2 })
    ));
}

#[test]
fn test_zero_dimension_rejected() {
    assert!(matches!(
        PointCloud::from_flat(vec![], 0),
        Err(TopoError::InvalidDimension(0))
    ));
}

#[test]
fn test_non_finite_coordinate_rejected() {
    let result = PointCloud::from_rows(&[vec![0.0, 0.0], vec![1.0, f64::NAN]]);
    assert!(matches!(
        result,
        Err(TopoError::NonFiniteCoordinate { point: 1, axis: 1 })
    ));
}

#[test]
fn test_empty_cloud() {
    let cloud = PointCloud::from_rows(&[]).unwrap();
    assert!(cloud.is_empty());

    let dm = distance_matrix(&cloud);
    assert_eq!(dm.len(), 0);
}
