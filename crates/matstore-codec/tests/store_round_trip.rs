//! End-to-end flows across the registry, ops, and codec.

use matstore_codec::{encode, read_matrix, write_matrix};
use matstore_core::{IoReason, Matrix, MatrixError, DEFAULT_CAPACITY};
use matstore_ops::{add, duplicate, equal, random_fill, MatrixRng};
use matstore_registry::{MatrixRegistry, RegistryConfig, SlotIndex};
use matstore_test_utils::{named_batch, scratch_dir, sequential_matrix};

#[test]
fn every_resident_survives_a_disk_round_trip() {
    let dir = scratch_dir();
    let mut reg = MatrixRegistry::new(RegistryConfig::default());
    let mut rng = MatrixRng::seeded(11);
    for (i, name) in ["a", "bb", "ccc"].into_iter().enumerate() {
        let mut m = Matrix::new(name, i as u32 + 1, 4).unwrap();
        random_fill(&mut m, 0, u32::MAX, &mut rng).unwrap();
        reg.insert(m).unwrap();
    }

    for (_, m) in reg.iter() {
        write_matrix(dir.path().join(m.name().as_str()), m).unwrap();
    }

    let mut restored = MatrixRegistry::new(RegistryConfig::default());
    for name in ["a", "bb", "ccc"] {
        restored
            .insert(read_matrix(dir.path().join(name)).unwrap())
            .unwrap();
    }
    for name in ["a", "bb", "ccc"] {
        let before = reg.get_by_name(name).unwrap();
        let after = restored.get_by_name(name).unwrap();
        assert_eq!(before, after);
    }
}

#[test]
fn read_back_replaces_evicted_slot() {
    let dir = scratch_dir();
    let path = dir.path().join("keep");
    let mut reg = MatrixRegistry::default();

    let keep = sequential_matrix("keep", 3, 3);
    write_matrix(&path, &keep).unwrap();
    reg.insert(keep).unwrap();
    for m in named_batch("filler", DEFAULT_CAPACITY) {
        reg.insert(m).unwrap();
    }
    assert!(reg.find_by_name("keep").is_err());

    let slot = reg.insert(read_matrix(&path).unwrap()).unwrap();
    assert_eq!(slot, SlotIndex(1));
    assert_eq!(
        reg.get_by_name("keep").unwrap(),
        &sequential_matrix("keep", 3, 3)
    );
}

#[test]
fn derived_matrices_persist() {
    let dir = scratch_dir();
    let a = sequential_matrix("a", 2, 5);
    let b = duplicate(&a, "b").unwrap();
    let c = add(&a, &b, "c").unwrap();

    let path = dir.path().join("c");
    write_matrix(&path, &c).unwrap();
    let back = read_matrix(&path).unwrap();
    assert!(equal(&c, &back));
    assert_eq!(back.data(), &[0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
}

#[test]
fn file_on_disk_is_exactly_the_encoded_record() {
    let dir = scratch_dir();
    let path = dir.path().join("exact");
    let m = sequential_matrix("exact", 2, 2);
    write_matrix(&path, &m).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, encode(&m));
    assert_eq!(bytes.last(), Some(&0xFF));
}

#[test]
fn corrupt_dimensions_never_reach_the_registry() {
    let dir = scratch_dir();
    let path = dir.path().join("bad");
    let mut bytes = encode(&sequential_matrix("bad", 1, 1));
    // rows sits right after the 4-byte length and "bad\0".
    bytes[8..12].copy_from_slice(&0u32.to_ne_bytes());
    std::fs::write(&path, &bytes).unwrap();

    let mut reg = MatrixRegistry::default();
    let err = read_matrix(&path)
        .and_then(|m| reg.insert(m))
        .unwrap_err();
    assert!(matches!(err, MatrixError::InvalidArgument { .. }));
    assert_eq!(reg.insertions(), 0);
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let dir = scratch_dir();
    let path = dir.path().join("locked");
    write_matrix(&path, &sequential_matrix("locked", 1, 1)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores mode bits; only assert when the open really fails.
    if let Err(err) = read_matrix(&path) {
        assert_eq!(err.io_reason(), Some(IoReason::PermissionDenied));
    }
}
