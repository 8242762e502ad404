#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "id;rfid_number;date;time";

/// Binary under test, running inside `dir` with no user config in sight.
pub fn rfc(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rfidconv");
    cmd.current_dir(dir)
        .env("RFIDCONV_CONFIG", dir.join("no_such_config.conf"))
        .env_remove("RUST_LOG");
    cmd
}

/// Create an empty, unique working directory inside the system temp dir
pub fn setup_workspace(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rfidconv_{}_{}", name, std::process::id()));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create workspace");
    path
}

/// Write a CSV made of `HEADER` plus the given data lines.
pub fn write_input(dir: &Path, file: &str, rows: &[&str]) -> PathBuf {
    let mut content = String::from(HEADER);
    for r in rows {
        content.push('\n');
        content.push_str(r);
    }
    content.push('\n');
    let path = dir.join(file);
    fs::write(&path, content).expect("write input csv");
    path
}

/// All `rfid_tags_*.json` files in `dir`.
pub fn json_outputs(dir: &Path) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = fs::read_dir(dir)
        .expect("read workspace")
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .map(|n| {
                    let n = n.to_string_lossy();
                    n.starts_with("rfid_tags_") && n.ends_with(".json")
                })
                .unwrap_or(false)
        })
        .collect();
    out.sort();
    out
}

/// Parse the single JSON output of a run.
pub fn read_single_output(dir: &Path) -> serde_json::Value {
    let outputs = json_outputs(dir);
    assert_eq!(outputs.len(), 1, "expected exactly one output file");
    let content = fs::read_to_string(&outputs[0]).expect("read output");
    serde_json::from_str(&content).expect("valid json")
}
