use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn no_arguments_runs_silent_fuzz() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn fuzz_command_with_seed() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["fuzz", "--radius", "2.5", "--iterations", "10000", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn negative_tolerance_reports_violation() {
    // With epsilon = -r² only the origin is tolerated.
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["--epsilon=-1", "--seed", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_match(r"^error: 0: point \(.+,.+\) not in circle\n$").unwrap());
}

#[test]
fn negative_radius_is_rejected() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["--radius=-1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid radius -1"));
}

#[test]
fn sample_disk_prints_point() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["sample-disk", "--radius", "0"])
        .assert()
        .success()
        .stdout("(0,0)\n");
}

#[test]
fn sample_disk_json() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["sample-disk", "--radius", "0", "--json"])
        .assert()
        .success()
        .stdout("{\"x\":0.0,\"y\":0.0}\n");
}

#[test]
fn sample_sphere_is_reproducible() {
    let run = || {
        Command::cargo_bin("disk_sampler_cli")
            .unwrap()
            .args(["sample-sphere", "--radius", "3", "--seed", "42"])
            .output()
            .unwrap()
    };
    let first = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, run().stdout);
    assert!(predicate::str::is_match(r"^\(.+,.+,.+\)\n$")
        .unwrap()
        .eval(std::str::from_utf8(&first.stdout).unwrap()));
}

#[test]
fn simulate_prints_summary() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["simulate", "--particles", "100", "--steps", "3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("100 particles after 3 steps, radius "));
}

#[test]
fn simulate_json_report() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["simulate", "--particles", "0", "--steps", "2", "--json"])
        .assert()
        .success()
        .stdout("{\"steps\":0,\"particles\":0,\"radius\":0.0}\n");
}

#[test]
fn simulate_rejects_zero_mass() {
    Command::cargo_bin("disk_sampler_cli")
        .unwrap()
        .args(["simulate", "--mass", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid mass 0"));
}
