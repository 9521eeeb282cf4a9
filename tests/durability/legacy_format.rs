//! Files written before λ was stored after ω

use crate::common::*;
use solsnap::{
    detect_kind, load_axisymmetric, load_spherical, save_spherical, AxisymmetricRecord,
    BasisState, ProbeConfig, RecordKind, Scalar, SnapshotReader, SphericalRecord,
};

#[test]
fn legacy_axisymmetric_uses_default_lambda() {
    let scratch = Scratch::new();
    let path = scratch.path("legacy_axi.dat");
    let record = axisymmetric_record(4, 0.81, 0.0);
    write_legacy_axisymmetric(&path, &record);

    let (decoded, has_lambda) = load_axisymmetric(&path, 0.375, |r, h| (r, h)).unwrap();
    assert!(!has_lambda);
    assert_eq!(decoded.lambda, 0.375);
    assert_eq!(decoded.kk, 4);
    assert_eq!(decoded.omega, 0.81);
    assert_eq!(decoded.lapse, record.lapse);
    assert_eq!(decoded.radial_metric, record.radial_metric);
    assert_eq!(decoded.areal_metric, record.areal_metric);
    assert_eq!(decoded.shift, record.shift);
    assert_eq!(decoded.matter, record.matter);
}

#[test]
fn legacy_spherical_uses_default_lambda() {
    let scratch = Scratch::new();
    let path = scratch.path("legacy_sph.dat");
    let record = spherical_record(0.97, 0.0);
    write_legacy_spherical(&path, &record);

    assert_eq!(detect_kind(&path).unwrap().kind, RecordKind::Spherical);

    let (decoded, has_lambda) = load_spherical(&path, -2.5, |r, h| (r, h)).unwrap();
    assert!(!has_lambda);
    assert_eq!(decoded.lambda, -2.5);
    assert_eq!(decoded.omega, 0.97);
    assert_eq!(decoded.conformal, record.conformal);
    assert_eq!(decoded.lapse, record.lapse);
    assert_eq!(decoded.matter, record.matter);
}

#[test]
fn legacy_fields_without_basis_decode() {
    let scratch = Scratch::new();
    let path = scratch.path("undefined_basis.dat");
    let space = spherical_space();
    let record = SphericalRecord {
        omega: 0.9,
        lambda: 0.0,
        conformal: Scalar::constant(&space, 1.0),
        lapse: Scalar::constant(&space, 1.0),
        matter: Scalar::zeros(&space),
        space,
    };
    write_legacy_spherical(&path, &record);

    let decoded = SnapshotReader::<Scalar>::default()
        .read_spherical(&path, 0.0)
        .unwrap();
    assert!(!decoded.has_lambda);
    assert_eq!(decoded.record.conformal.basis(), BasisState::Undefined);
    assert_eq!(decoded.record, record);
}

#[test]
fn legacy_single_region_zero_fields() {
    let scratch = Scratch::new();
    let path = scratch.path("tiny.dat");
    let space = tiny_space();
    let record = AxisymmetricRecord {
        kk: 0,
        omega: 0.5,
        lambda: 0.0,
        lapse: Scalar::zeros(&space),
        radial_metric: Scalar::zeros(&space),
        areal_metric: Scalar::zeros(&space),
        shift: Scalar::zeros(&space),
        matter: Scalar::zeros(&space),
        space,
    };
    write_legacy_axisymmetric(&path, &record);

    let (decoded, has_lambda) = load_axisymmetric(&path, 0.0, |r, h| (r, h)).unwrap();
    assert!(!has_lambda);
    assert_eq!(decoded, record);
}

#[test]
fn converting_legacy_file_stores_lambda() {
    let scratch = Scratch::new();
    let legacy = scratch.path("old.dat");
    let current = scratch.path("new.dat");
    let record = spherical_record(0.88, 0.0);
    write_legacy_spherical(&legacy, &record);

    let mut decoded = load_spherical(&legacy, 0.0, |r, _| r).unwrap();
    decoded.lambda = 0.2;
    let info = save_spherical(&current, &decoded).unwrap();

    let legacy_len = std::fs::metadata(&legacy).unwrap().len();
    assert_eq!(info.size, legacy_len + 8);

    let (reread, has_lambda) = load_spherical(&current, 0.0, |r, h| (r, h)).unwrap();
    assert!(has_lambda);
    assert_eq!(reread.lambda, 0.2);
    assert_eq!(reread.matter, record.matter);
}

#[test]
fn narrower_lambda_bound_treats_stored_value_as_absent() {
    // A stored λ outside the configured bound fails the value gate, so the
    // reader assumes the old layout and then trips over the λ bytes as a
    // scalar header.
    let scratch = Scratch::new();
    let path = scratch.path("big_lambda.dat");
    save_spherical(&path, &spherical_record(0.9, 50.0)).unwrap();

    let strict = SnapshotReader::<Scalar>::new(ProbeConfig {
        lambda_max_abs: 10.0,
        ..ProbeConfig::default()
    });
    let err = strict.read_spherical(&path, 0.0).unwrap_err();
    match err {
        solsnap::SnapshotError::Format { field, .. } => assert_eq!(field, "conformal"),
        other => panic!("unexpected error: {other:?}"),
    }

    let lenient = SnapshotReader::<Scalar>::default();
    let decoded = lenient.read_spherical(&path, 0.0).unwrap();
    assert!(decoded.has_lambda);
    assert_eq!(decoded.record.lambda, 50.0);
}
