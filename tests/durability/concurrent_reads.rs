//! Independent decode calls from many threads
//!
//! Every call owns its file handle and its record, so concurrent decodes of
//! the same or different files need no coordination.

use crate::common::*;
use solsnap::{
    load_axisymmetric, load_spherical, save_axisymmetric, save_spherical, RecordKind, Scalar,
    SnapshotReader,
};
use std::thread;

#[test]
fn parallel_decodes_of_distinct_files() {
    let scratch = Scratch::new();
    let paths: Vec<_> = (0..8)
        .map(|i| {
            let path = scratch.path(&format!("run_{i}.dat"));
            if i % 2 == 0 {
                save_axisymmetric(&path, &axisymmetric_record(i, 0.7, i as f64)).unwrap();
            } else {
                save_spherical(&path, &spherical_record(0.9, i as f64)).unwrap();
            }
            path
        })
        .collect();

    thread::scope(|s| {
        for (i, path) in paths.iter().enumerate() {
            s.spawn(move || {
                let reader = SnapshotReader::<Scalar>::default();
                for _ in 0..16 {
                    let snapshot = reader.load(path, -1.0).unwrap();
                    assert!(snapshot.has_lambda());
                    assert_eq!(snapshot.lambda(), i as f64);
                    let expected = if i % 2 == 0 {
                        RecordKind::Axisymmetric
                    } else {
                        RecordKind::Spherical
                    };
                    assert_eq!(snapshot.kind(), expected);
                }
            });
        }
    });
}

#[test]
fn parallel_decodes_of_one_file_agree() {
    let scratch = Scratch::new();
    let path = scratch.path("shared.dat");
    let record = axisymmetric_record(2, 0.75, 0.5);
    save_axisymmetric(&path, &record).unwrap();

    let decoded: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..6)
            .map(|_| s.spawn(|| load_axisymmetric(&path, 0.0, |r, _| r).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for r in decoded {
        assert_eq!(r, record);
    }
}

#[test]
fn legacy_and_current_files_decode_side_by_side() {
    let scratch = Scratch::new();
    let legacy = scratch.path("legacy.dat");
    let current = scratch.path("current.dat");
    let record = spherical_record(0.95, 0.0);
    write_legacy_spherical(&legacy, &record);
    save_spherical(&current, &spherical_record(0.95, 0.3)).unwrap();

    thread::scope(|s| {
        let a = s.spawn(|| load_spherical(&legacy, 7.0, |r, h| (r.lambda, h)).unwrap());
        let b = s.spawn(|| load_spherical(&current, 7.0, |r, h| (r.lambda, h)).unwrap());
        assert_eq!(a.join().unwrap(), (7.0, false));
        assert_eq!(b.join().unwrap(), (0.3, true));
    });
}
