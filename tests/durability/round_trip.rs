//! Write-then-read through real files
//!
//! Anything the current writer produces must decode to exactly the record it
//! was given, with `has_lambda` set.

use crate::common::*;
use proptest::prelude::*;
use solsnap::{
    detect_kind, load_axisymmetric, load_spherical, save_axisymmetric, save_spherical,
    AxisymmetricRecord, RecordKind, Snapshot, SnapshotReader,
};

#[test]
fn axisymmetric_round_trip_is_exact() {
    let scratch = Scratch::new();
    let path = scratch.path("bosinit.dat");
    let record = axisymmetric_record(2, 0.798905, 0.125);

    let info = save_axisymmetric(&path, &record).unwrap();
    assert_eq!(info.kind, RecordKind::Axisymmetric);

    let (decoded, has_lambda) = load_axisymmetric(&path, -7.0, |r, h| (r, h)).unwrap();
    assert!(has_lambda);
    assert_eq!(decoded, record);
}

#[test]
fn spherical_round_trip_is_exact() {
    let scratch = Scratch::new();
    let path = scratch.path("bosinit_sph.dat");
    let record = spherical_record(0.92, -0.5);

    save_spherical(&path, &record).unwrap();

    let (decoded, has_lambda) = load_spherical(&path, 3.0, |r, h| (r, h)).unwrap();
    assert!(has_lambda);
    assert_eq!(decoded, record);
}

#[test]
fn lambda_zero_is_still_stored() {
    let scratch = Scratch::new();
    let path = scratch.path("zero.dat");
    save_spherical(&path, &spherical_record(0.9, 0.0)).unwrap();

    let has_lambda = load_spherical(&path, 42.0, |r, h| {
        assert_eq!(r.lambda, 0.0);
        h
    })
    .unwrap();
    assert!(has_lambda);
}

#[test]
fn load_dispatches_on_sniffed_kind() {
    let scratch = Scratch::new();
    let axi = scratch.path("axi.dat");
    let sph = scratch.path("sph.dat");
    save_axisymmetric(&axi, &axisymmetric_record(1, 0.8, 0.0)).unwrap();
    save_spherical(&sph, &spherical_record(0.8, 0.0)).unwrap();

    let reader = SnapshotReader::<solsnap::Scalar>::default();
    match reader.load(&axi, 0.0).unwrap() {
        Snapshot::Axisymmetric(d) => assert_eq!(d.record.kk, 1),
        other => panic!("expected axisymmetric, got {:?}", other.kind()),
    }
    let sph_snapshot = reader.load(&sph, 0.0).unwrap();
    assert_eq!(sph_snapshot.kind(), RecordKind::Spherical);
    assert_eq!(sph_snapshot.named_fields().len(), 3);
}

#[test]
fn overwrite_replaces_previous_snapshot() {
    let scratch = Scratch::new();
    let path = scratch.path("state.dat");
    save_spherical(&path, &spherical_record(0.9, 0.0)).unwrap();
    save_axisymmetric(&path, &axisymmetric_record(3, 0.7, 1.5)).unwrap();

    assert_eq!(detect_kind(&path).unwrap().kind, RecordKind::Axisymmetric);
    let lambda = load_axisymmetric(&path, 0.0, |r, _| r.lambda).unwrap();
    assert_eq!(lambda, 1.5);
}

/// Legacy single-region fixture: kk = 1, ω = 0.798905, no λ, five zero fields.
/// Decoding defaults λ; re-encoding stores it; decoding again reports it.
#[test]
fn legacy_single_region_fixture_gains_lambda_on_reencode() {
    let scratch = Scratch::new();
    let legacy = scratch.path("legacy.dat");
    let converted = scratch.path("converted.dat");

    let space = tiny_space();
    let record = AxisymmetricRecord {
        kk: 1,
        omega: 0.798905,
        lambda: 0.0,
        lapse: zero(&space),
        radial_metric: zero(&space),
        areal_metric: zero(&space),
        shift: zero(&space),
        matter: zero(&space),
        space,
    };
    write_legacy_axisymmetric(&legacy, &record);

    let sniffed = detect_kind(&legacy).unwrap();
    assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
    assert_eq!(sniffed.kk_guess, Some(1));

    let (decoded, has_lambda) = load_axisymmetric(&legacy, 0.0, |r, h| (r, h)).unwrap();
    assert!(!has_lambda);
    assert_eq!(decoded.kk, 1);
    assert_eq!(decoded.omega, 0.798905);
    assert_eq!(decoded.lambda, 0.0);
    assert_eq!(decoded, record);

    save_axisymmetric(&converted, &decoded).unwrap();
    let (again, has_lambda) = load_axisymmetric(&converted, 9.0, |r, h| (r, h)).unwrap();
    assert!(has_lambda);
    assert_eq!(again.lambda, 0.0);
    assert_eq!(again, record);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn axisymmetric_scalars_survive(
        kk in -32i32..=32,
        omega in 0.05f64..1.0,
        lambda in -999.0f64..999.0,
    ) {
        let scratch = Scratch::new();
        let path = scratch.path("axi.dat");
        let record = axisymmetric_record(kk, omega, lambda);
        save_axisymmetric(&path, &record).unwrap();

        let sniffed = detect_kind(&path).unwrap();
        prop_assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
        prop_assert_eq!(sniffed.kk_guess, Some(kk));

        let (decoded, has_lambda) = load_axisymmetric(&path, 0.0, |r, h| (r, h)).unwrap();
        prop_assert!(has_lambda);
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn spherical_scalars_survive(
        omega in 0.05f64..1.0,
        lambda in -999.0f64..999.0,
    ) {
        let scratch = Scratch::new();
        let path = scratch.path("sph.dat");
        let record = spherical_record(omega, lambda);
        save_spherical(&path, &record).unwrap();

        prop_assert_eq!(detect_kind(&path).unwrap().kind, RecordKind::Spherical);

        let (decoded, has_lambda) = load_spherical(&path, 0.0, |r, h| (r, h)).unwrap();
        prop_assert!(has_lambda);
        prop_assert_eq!(decoded, record);
    }
}
