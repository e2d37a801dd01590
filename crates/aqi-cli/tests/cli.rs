use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join(relative)
}

#[test]
fn aqi_predict_reports_both_model_outputs() {
    let data = repo_path("test_data/aqi_sample.csv");
    let models = repo_path("models");
    let mut cmd = Command::cargo_bin("aqi-cli").unwrap();
    cmd.args([
        "predict",
        "--data",
        data.to_str().unwrap(),
        "--country",
        "USA",
        "--city",
        "Los Angeles",
        "--models-dir",
        models.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Predicted AQI Value:"))
    .stdout(predicate::str::contains("Predicted AQI Category:"))
    .stdout(predicate::str::contains("No matching data").not());
}

#[test]
fn aqi_predict_reports_no_match() {
    let data = repo_path("test_data/aqi_sample.csv");
    let models = repo_path("models");
    let mut cmd = Command::cargo_bin("aqi-cli").unwrap();
    cmd.args([
        "predict",
        "--data",
        data.to_str().unwrap(),
        "--country",
        "USA",
        "--city",
        "Springfield",
        "--models-dir",
        models.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "No matching data found for the specified Country and City.",
    ));
}

#[test]
fn aqi_predict_names_required_columns() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("no_lat.csv");
    fs::write(
        &data,
        "Country,City,CO AQI Value,Ozone AQI Value,NO2 AQI Value,PM2.5 AQI Value,lng\n\
         USA,Los Angeles,1,36,12,79,-118.24\n",
    )
    .unwrap();
    let models = repo_path("models");
    let mut cmd = Command::cargo_bin("aqi-cli").unwrap();
    cmd.args([
        "predict",
        "--data",
        data.to_str().unwrap(),
        "--country",
        "USA",
        "--city",
        "Los Angeles",
        "--models-dir",
        models.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("missing required columns"))
    .stdout(predicate::str::contains("lat"))
    .stdout(predicate::str::contains("PM2.5 AQI Value"))
    .stdout(predicate::str::contains("Predicted").not());
}

#[test]
fn aqi_analyze_writes_chart() {
    let out_dir = tempdir().unwrap();
    let out = out_dir.path().join("top_cities.png");
    let data = repo_path("test_data/aqi_sample.csv");
    let mut cmd = Command::cargo_bin("aqi-cli").unwrap();
    cmd.args([
        "analyze",
        "--data",
        data.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Chart written to"));
    assert!(out.exists());
}

#[test]
fn aqi_analyze_guards_missing_columns() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("no_aqi.csv");
    fs::write(&data, "City,Ozone\nDelhi,41\n").unwrap();
    let mut cmd = Command::cargo_bin("aqi-cli").unwrap();
    cmd.args(["analyze", "--data", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("missing required columns"))
        .stdout(predicate::str::contains("AQI Value"));
}
