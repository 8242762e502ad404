mod common;
use common::{rfc, setup_workspace};
use predicates::str::contains;
use rfidconv::config::Config;
use rfidconv::config::check::check_yaml;
use rfidconv::core::ConvertOptions;
use rfidconv::errors::AppError;
use rfidconv::models::RecordLayout;
use std::fs;

#[test]
fn test_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.input_file, "rfid_tags_original.csv");
    assert_eq!(cfg.output_dir, ".");
    assert_eq!(cfg.done_dir, "done");
    assert_eq!(cfg.delimiter_byte(), b';');
    assert_eq!(cfg.layout, RecordLayout::Combined);
    assert!(!cfg.envelope && !cfg.processing_time && !cfg.dwell);
}

#[test]
fn test_partial_yaml_fills_defaults() {
    let cfg = Config::from_yaml("layout: split\nenvelope: true\n").expect("parse");
    assert_eq!(cfg.layout, RecordLayout::Split);
    assert!(cfg.envelope);
    assert_eq!(cfg.input_file, "rfid_tags_original.csv");

    let opts = ConvertOptions::from_config(&cfg);
    assert!(opts.annotations.envelope);
    assert!(!opts.annotations.processing_time);
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("").expect("parse"), Config::default());
}

#[test]
fn test_non_ascii_delimiter_rejected() {
    let err = Config::from_yaml("delimiter: '§'\n").unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_check_reports_missing_and_unknown_keys() {
    let report = check_yaml("input_file: a.csv\ncolour: blue\n").expect("check");
    assert!(report.missing.contains(&"done_dir".to_string()));
    assert!(!report.missing.contains(&"input_file".to_string()));
    assert_eq!(report.unknown, vec!["colour".to_string()]);
    assert!(!report.is_complete());

    let full = Config::default().to_yaml().expect("yaml");
    assert!(check_yaml(&full).expect("check").is_complete());
}

#[test]
fn test_config_init_then_convert_uses_file() {
    let dir = setup_workspace("config_init");
    let conf = dir.join("rfidconv.conf");
    let conf_str = conf.to_string_lossy().to_string();

    rfc(&dir)
        .args(["--config", &conf_str, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Configuration file written"));
    assert!(conf.exists());

    // second init without --force must refuse
    rfc(&dir)
        .args(["--config", &conf_str, "config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    fs::write(&conf, "input_file: entries.csv\nlayout: split\n").expect("write conf");
    fs::write(
        dir.join("entries.csv"),
        "id;rfid_number;date;time\n1;AA001;01.03.2024;08:00:00\n",
    )
    .expect("write csv");

    rfc(&dir)
        .args(["--config", &conf_str, "convert"])
        .assert()
        .success();

    let value = common::read_single_output(&dir);
    assert_eq!(value[0]["date"], "2024-03-01");
    assert!(dir.join("done").join("entries.csv").exists());
}

#[test]
fn test_config_print_and_check() {
    let dir = setup_workspace("config_print");
    let conf = dir.join("rfidconv.conf");
    fs::write(&conf, "dwell: true\n").expect("write conf");
    let conf_str = conf.to_string_lossy().to_string();

    rfc(&dir)
        .args(["--config", &conf_str, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("dwell: true"))
        .stdout(contains("input_file: rfid_tags_original.csv"));

    rfc(&dir)
        .args(["--config", &conf_str, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing key 'input_file'"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = setup_workspace("config_invalid");
    let conf = dir.join("rfidconv.conf");
    fs::write(&conf, "layout: diagonal\n").expect("write conf");
    let conf_str = conf.to_string_lossy().to_string();

    rfc(&dir)
        .args(["--config", &conf_str, "convert"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}

#[test]
fn test_config_init_force_repairs_broken_file() {
    let dir = setup_workspace("config_repair");
    let conf = dir.join("rfidconv.conf");
    fs::write(&conf, "layout: diagonal\n").expect("write conf");
    let conf_str = conf.to_string_lossy().to_string();

    rfc(&dir)
        .args(["--config", &conf_str, "config", "--init", "--force"])
        .assert()
        .success()
        .stdout(contains("Configuration file written"));

    let content = fs::read_to_string(&conf).expect("read conf");
    assert_eq!(Config::from_yaml(&content).expect("valid again"), Config::default());

    // without --init a broken file is still fatal
    fs::write(&conf, "layout: diagonal\n").expect("write conf");
    rfc(&dir)
        .args(["--config", &conf_str, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("Failed to parse configuration"));
}
