use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use mle_eval::{
    errors::Error,
    field::RangePolicy,
    loader::{load_table, run},
    poly_utils::MultilinearPoint,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Writes `contents` to a fresh file under the system temp directory.
fn scratch_table(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mle-eval-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch directory");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write scratch table");
    path
}

/// Runs the `mle` binary with `args`, with logging left at its default level.
fn mle_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mle"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn mle binary")
}

fn fixture_arg(name: &str) -> String {
    fixture(name).to_string_lossy().into_owned()
}

#[test]
fn one_variable_table() {
    let path = fixture("one_var.txt");
    for (point, expected) in [("0", 3), ("1", 5), ("2", 0)] {
        let evaluation = run(&path, &[point], RangePolicy::Strict).unwrap();
        assert_eq!(evaluation.result, expected, "point {point}");
        assert_eq!(evaluation.modulus.value(), 7);
        assert_eq!(evaluation.evals, vec![3, 5]);
    }
}

#[test]
fn two_variable_table_is_msb_first() {
    let path = fixture("two_vars.txt");
    let cases = [(["0", "0"], 1), (["0", "1"], 2), (["1", "0"], 3), (["1", "1"], 4)];
    for (point, expected) in cases {
        let evaluation = run(&path, &point, RangePolicy::Strict).unwrap();
        assert_eq!(evaluation.result, expected, "point {point:?}");
    }
}

#[test]
fn three_variable_table_off_the_hypercube() {
    let evaluation = run(fixture("three_vars.txt"), &["2", "3", "5"], RangePolicy::Strict).unwrap();
    assert_eq!(evaluation.num_variables, 3);
    assert_eq!(evaluation.points, MultilinearPoint(vec![2, 3, 5]));
    assert_eq!(evaluation.result, 52);
}

#[test]
fn constant_table_takes_no_points() {
    let evaluation = run(fixture("constant.txt"), &[] as &[&str], RangePolicy::Strict).unwrap();
    assert_eq!(evaluation.num_variables, 0);
    assert_eq!(evaluation.result, 9);
}

#[test]
fn missing_points_are_reported() {
    let result = run(fixture("two_vars.txt"), &[] as &[&str], RangePolicy::Strict);
    assert!(matches!(result, Err(Error::InsufficientArguments { needed: 2 })));

    let result = run(fixture("two_vars.txt"), &["1"], RangePolicy::Strict);
    assert!(matches!(
        result,
        Err(Error::PointCountMismatch { expected: 2, got: 1 })
    ));
}

#[test]
fn bad_table_length_fails_before_parsing() {
    let result = load_table(fixture("bad_length.txt"), RangePolicy::Strict);
    assert!(matches!(result, Err(Error::NotPowerOfTwo(3))));
}

#[test]
fn malformed_tables() {
    let path = scratch_table("non_prime.txt", "9\n1\n2\n");
    assert!(matches!(
        load_table(&path, RangePolicy::Strict),
        Err(Error::NonPrimeModulus(9))
    ));

    let path = scratch_table("bad_value.txt", "7\n1\n2\nthree\n4\n");
    let err = load_table(&path, RangePolicy::Strict).unwrap_err();
    assert_eq!(err.to_string(), "line 4: invalid integer literal 'three'");

    let path = scratch_table("out_of_range.txt", "7\n1\n8\n");
    assert!(matches!(
        load_table(&path, RangePolicy::Inclusive),
        Err(Error::InvalidFieldElement { value: 8, .. })
    ));
}

#[test]
fn inclusive_policy_admits_the_modulus() {
    let path = scratch_table("inclusive.txt", "7\n7\n5\n");
    assert!(load_table(&path, RangePolicy::Strict).is_err());

    // p behaves as 0 in both the table and the point
    let evaluation = run(&path, &["7"], RangePolicy::Inclusive).unwrap();
    assert_eq!(evaluation.result, 0);
    let evaluation = run(&path, &["1"], RangePolicy::Inclusive).unwrap();
    assert_eq!(evaluation.result, 5);
}

#[test]
fn crlf_lines_are_trimmed() {
    let path = scratch_table("crlf.txt", "5\r\n1\r\n2\r\n3\r\n4\r\n");
    let evaluation = run(&path, &["1", "0"], RangePolicy::Strict).unwrap();
    assert_eq!(evaluation.result, 3);
}

#[test]
fn json_report_shape() {
    let evaluation = run(fixture("one_var.txt"), &["2"], RangePolicy::Strict).unwrap();
    let json = serde_json::to_value(&evaluation).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "modulus": 7,
            "num_variables": 1,
            "points": [2],
            "result": 0,
        })
    );
}

#[test]
fn binary_prints_text_result() {
    let output = mle_command(&[&fixture_arg("two_vars.txt"), "1", "0"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "mle([1, 0]) = 3\n");
}

#[test]
fn binary_prints_json_report() {
    let output = mle_command(&["-f", "Json", &fixture_arg("one_var.txt"), "2"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "modulus": 7,
            "num_variables": 1,
            "points": [2],
            "result": 0,
        })
    );
}

#[test]
fn binary_honors_range_flag() {
    let path = scratch_table("inclusive_cli.txt", "7\n7\n5\n");
    let path = path.to_string_lossy();

    let output = mle_command(&[&path, "1"]);
    assert!(!output.status.success());

    let output = mle_command(&["--range", "Inclusive", &path, "1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "mle([1]) = 5\n");
}

#[test]
fn binary_fails_on_bad_table_length() {
    let output = mle_command(&[&fixture_arg("bad_length.txt"), "1"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("table has 3 values; expected 2^k"),
        "stderr: {stderr}"
    );
}
