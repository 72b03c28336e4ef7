//! Scripted sessions through the dispatcher.

use matstore_command::{DispatchConfig, Dispatcher, Outcome};
use matstore_core::MatrixError;
use matstore_registry::{RegistryConfig, SlotIndex};
use matstore_test_utils::scratch_dir;

fn run_script(d: &mut Dispatcher, script: &str) -> Vec<Result<Outcome, MatrixError>> {
    script
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| d.run_line(l))
        .collect()
}

#[test]
fn full_session_matches_expected_messages() {
    let dir = scratch_dir();
    let mut d = Dispatcher::new(DispatchConfig {
        output_dir: dir.path().to_path_buf(),
        seed: Some(42),
        ..Default::default()
    })
    .unwrap();

    let results = run_script(
        &mut d,
        "
        create a 2 2
        random a 1 4
        duplicate a b
        equal a b
        shift b l 1
        equal a b
        add a b c
        write c
        ",
    );
    let messages: Vec<String> = results
        .into_iter()
        .map(|r| r.unwrap().to_string())
        .collect();
    assert_eq!(messages[0], "Created Matrix (a,2,2)");
    assert_eq!(messages[1], "Matrix (a) is randomized between 1 4");
    assert_eq!(messages[2], "Duplication of a into b finished");
    assert_eq!(messages[3], "SAME DATA IN BOTH");
    assert_eq!(messages[4], "Matrix (b) has been shifted left by 1");
    assert_eq!(messages[5], "DIFFERENT DATA IN BOTH");
    assert_eq!(messages[6], "Added a with b into c");
    assert!(messages[7].starts_with("Matrix (c) is written out to the filesystem"));

    // c = a + 2a = 3a
    let a = d.registry().get_by_name("a").unwrap().data().to_vec();
    let c = d.registry().get_by_name("c").unwrap().data().to_vec();
    for (x, z) in a.iter().zip(&c) {
        assert_eq!(x * 3, *z);
    }
    assert!(dir.path().join("c").is_file());
}

#[test]
fn eleventh_create_evicts_the_first() {
    let mut d = Dispatcher::new(DispatchConfig {
        seed: Some(0),
        ..Default::default()
    })
    .unwrap();
    for i in 0..10 {
        d.run_line(&format!("create m{i} 1 1")).unwrap();
    }
    let out = d.run_line("create m10 1 1").unwrap();
    assert!(matches!(out, Outcome::Created { slot: SlotIndex(0), .. }));
    assert!(matches!(
        d.run_line("display m0"),
        Err(MatrixError::NotFound { .. })
    ));
    assert!(d.run_line("display m1").is_ok());
}

#[test]
fn prefix_names_are_distinct_matrices() {
    let mut d = Dispatcher::new(DispatchConfig {
        seed: Some(0),
        ..Default::default()
    })
    .unwrap();
    d.run_line("create ab 1 1").unwrap();
    assert!(matches!(
        d.run_line("display a"),
        Err(MatrixError::NotFound { .. })
    ));
    d.run_line("create a 2 2").unwrap();
    let out = d.run_line("display a").unwrap();
    assert!(matches!(out, Outcome::Displayed { shape: (2, 2), .. }));
}

#[test]
fn failures_leave_state_untouched() {
    let mut d = Dispatcher::new(DispatchConfig {
        registry: RegistryConfig::new(3),
        seed: Some(9),
        ..Default::default()
    })
    .unwrap();
    d.run_line("create a 2 2").unwrap();
    d.run_line("random a 10 20").unwrap();
    let snapshot = d.registry().get_by_name("a").unwrap().data().to_vec();

    let results = run_script(
        &mut d,
        "
        shift a x 1
        shift a l 40
        random a 5 5
        create this_matrix_name_is_far_too_long_to_fit_in_the_fifty_byte_field 1 1
        read /definitely/not/here
        equal a
        ",
    );
    assert!(results.iter().all(Result::is_err));
    assert_eq!(d.registry().get_by_name("a").unwrap().data(), &snapshot[..]);
    assert_eq!(d.registry().insertions(), 1);
}

#[test]
fn written_file_reads_back_into_a_new_dispatcher() {
    let dir = scratch_dir();
    let config = DispatchConfig {
        output_dir: dir.path().to_path_buf(),
        seed: Some(7),
        ..Default::default()
    };
    let mut first = Dispatcher::new(config.clone()).unwrap();
    first.run_line("create w 3 2").unwrap();
    first.run_line("random w 0 1000").unwrap();
    first.run_line("write w").unwrap();
    let original = first.registry().get_by_name("w").unwrap().data().to_vec();

    let mut second = Dispatcher::new(config).unwrap();
    let path = dir.path().join("w");
    second.run_line(&format!("read {}", path.display())).unwrap();
    let loaded = second.registry().get_by_name("w").unwrap();
    assert_eq!(loaded.shape(), (3, 2));
    assert_eq!(loaded.data(), &original[..]);
}
