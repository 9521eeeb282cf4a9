//! Record kind detection on real files

use crate::common::*;
use proptest::prelude::*;
use solsnap::{
    detect_kind, save_axisymmetric, save_spherical, DomainDescriptor, FixedWidthWriter,
    ProbeConfig, RecordKind, Scalar, ScalarField, SnapshotError, SnapshotReader,
};

fn write_spherical_with_omega(path: &std::path::Path, omega: f64) {
    let space = spherical_space();
    let mut w = FixedWidthWriter::new(Vec::new());
    space.write(w.get_mut()).unwrap();
    w.write_f64(omega).unwrap();
    w.write_f64(0.0).unwrap();
    for _ in 0..3 {
        zero(&space).write(w.get_mut()).unwrap();
    }
    std::fs::write(path, w.into_inner()).unwrap();
}

#[test]
fn largest_azimuthal_index_is_axisymmetric() {
    let scratch = Scratch::new();
    let path = scratch.path("kk32.dat");
    save_axisymmetric(&path, &axisymmetric_record(32, 0.6, 0.0)).unwrap();

    let sniffed = detect_kind(&path).unwrap();
    assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
    assert_eq!(sniffed.kk_guess, Some(32));
}

#[test]
fn negative_azimuthal_index_is_axisymmetric() {
    let scratch = Scratch::new();
    let path = scratch.path("kkneg.dat");
    save_axisymmetric(&path, &axisymmetric_record(-3, 0.6, 0.0)).unwrap();

    let sniffed = detect_kind(&path).unwrap();
    assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
    assert_eq!(sniffed.kk_guess, Some(-3));
}

#[test]
fn physical_frequencies_sniff_as_spherical() {
    let scratch = Scratch::new();
    for (i, omega) in [1.0e-3, 0.1, 0.5, 0.798905, 0.999, 4.0, -0.7]
        .into_iter()
        .enumerate()
    {
        let path = scratch.path(&format!("sph_{i}.dat"));
        save_spherical(&path, &spherical_record(omega, 0.0)).unwrap();
        let sniffed = detect_kind(&path).unwrap();
        assert_eq!(sniffed.kind, RecordKind::Spherical, "omega = {omega}");
        assert_eq!(sniffed.kk_guess, None);
    }
}

#[test]
fn tiny_omega_just_over_threshold_is_spherical() {
    let scratch = Scratch::new();
    let path = scratch.path("tiny_omega.dat");
    let omega = f64::from_bits(33u64 << 32);
    write_spherical_with_omega(&path, omega);

    assert_eq!(detect_kind(&path).unwrap().kind, RecordKind::Spherical);
}

#[test]
fn subnormal_omega_within_threshold_is_misread() {
    // Known limit of the heuristic: ω whose high word fits the index range.
    let scratch = Scratch::new();
    let path = scratch.path("subnormal_omega.dat");
    write_spherical_with_omega(&path, f64::from_bits(32u64 << 32));

    let sniffed = detect_kind(&path).unwrap();
    assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
    assert_eq!(sniffed.kk_guess, Some(32));

    let narrower = SnapshotReader::<Scalar>::new(ProbeConfig {
        kk_max_abs: 16,
        ..ProbeConfig::default()
    });
    assert_eq!(
        narrower.detect_kind(&path).unwrap().kind,
        RecordKind::Spherical
    );
}

#[test]
fn wider_threshold_accepts_larger_index() {
    let scratch = Scratch::new();
    let path = scratch.path("kk40.dat");
    save_axisymmetric(&path, &axisymmetric_record(40, 0.6, 0.0)).unwrap();

    assert_eq!(detect_kind(&path).unwrap().kind, RecordKind::Spherical);

    let wider = SnapshotReader::<Scalar>::new(ProbeConfig {
        kk_max_abs: 64,
        ..ProbeConfig::default()
    });
    let sniffed = wider.detect_kind(&path).unwrap();
    assert_eq!(sniffed.kind, RecordKind::Axisymmetric);
    assert_eq!(sniffed.kk_guess, Some(40));
    let decoded = wider.read_axisymmetric(&path, 0.0).unwrap();
    assert_eq!(decoded.record.kk, 40);
}

#[test]
fn sniffing_a_removed_file_is_an_open_error() {
    let scratch = Scratch::new();
    let path = scratch.path("held.dat");
    save_spherical(&path, &spherical_record(0.9, 0.0)).unwrap();

    for _ in 0..64 {
        detect_kind(&path).unwrap();
    }
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(
        detect_kind(&path).unwrap_err(),
        SnapshotError::Open { .. }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_tail_never_panics(tail in prop::collection::vec(any::<u8>(), 0..256)) {
        let scratch = Scratch::new();
        let path = scratch.path("fuzz.dat");
        let mut bytes = Vec::new();
        tiny_space().write(&mut bytes).unwrap();
        bytes.extend_from_slice(&tail);
        std::fs::write(&path, bytes).unwrap();

        let reader = SnapshotReader::<Scalar>::default();
        let sniffed = reader.detect_kind(&path).unwrap();
        let _ = reader.load(&path, 0.0);
        prop_assert_eq!(sniffed.kk_guess.is_some(), sniffed.kind == RecordKind::Axisymmetric);
    }
}
