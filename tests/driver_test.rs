//! End-to-end tests for the summary pipeline and the CLI.

use std::process::Command;
use workout_tracker::{
    read_package, Config, Driver, DriverError, ErrorPolicy, FixedSource, OutputFormat,
    WorkoutError, WorkoutSample,
};

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
    Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; \
    Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
    Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.";

fn cli() -> Command {
    // Point the config lookup at an empty directory so a user config cannot leak in
    let config_home = std::env::temp_dir().join("workout-tracker-cli-test");
    std::fs::create_dir_all(&config_home).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_workout-tracker"));
    cmd.env("XDG_CONFIG_HOME", &config_home);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_demo_packages_produce_expected_lines() {
    let mut out = Vec::new();
    let stats = Driver::new(&Config::default())
        .run(&mut FixedSource::demo(), &mut out)
        .expect("demo run failed");

    assert_eq!(stats.processed, 3);
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec![SWIMMING_LINE, RUNNING_LINE, WALKING_LINE]);
}

#[test]
fn test_single_package_messages() {
    let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    assert_eq!(running.show_training_info().message(), RUNNING_LINE);

    let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
    assert_eq!(walking.show_training_info().message(), WALKING_LINE);

    let swimming = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert_eq!(swimming.show_training_info().message(), SWIMMING_LINE);
}

#[test]
fn test_unknown_tag_produces_no_summary() {
    let mut source = FixedSource::new(vec![WorkoutSample::new("XYZ", vec![1.0, 1.0, 1.0])]);
    let mut out = Vec::new();
    let err = Driver::new(&Config::default())
        .run(&mut source, &mut out)
        .unwrap_err();

    assert!(matches!(
        err,
        DriverError::Sample {
            source: WorkoutError::InvalidWorkoutType(ref tag),
            ..
        } if tag == "XYZ"
    ));
    assert!(out.is_empty());
}

#[test]
fn test_skip_policy_json_report() {
    let config = Config {
        error_policy: ErrorPolicy::Skip,
        output_format: OutputFormat::Json,
    };
    let mut source = FixedSource::new(vec![
        WorkoutSample::new("RUN", vec![15000.0, 1.0]),
        WorkoutSample::new("RUN", vec![15000.0, 1.0, 75.0]),
    ]);
    let mut out = Vec::new();
    let stats = Driver::new(&config).run(&mut source, &mut out).unwrap();
    assert_eq!((stats.processed, stats.failed), (1, 1));

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let summaries = json["summaries"].as_array().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0]["training_type"], "Running");
}

#[test]
fn test_cli_demo() {
    let output = cli().output().expect("failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec![SWIMMING_LINE, RUNNING_LINE, WALKING_LINE]
    );
}

#[test]
fn test_cli_read_single_package() {
    let output = cli()
        .args(["read", "RUN", "15000", "1", "75"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().trim_end(), RUNNING_LINE);
}

#[test]
fn test_cli_unknown_tag_fails() {
    let output = cli()
        .args(["read", "XYZ", "1", "2", "3"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown workout type: XYZ"));
}
