use assert_cmd::prelude::*;
use std::{fs, process::Command};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> String {
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

fn pov(config: &str) -> Command {
    let mut cmd = Command::cargo_bin("pov").unwrap();
    cmd.env_remove("POV_LOG").args(["--config", config]);
    cmd
}

fn ids(stdout: &[u8]) -> Vec<u64> {
    let events: Vec<serde_json::Value> = serde_json::from_slice(stdout).unwrap();
    events.iter().map(|e| e["id"].as_u64().unwrap()).collect()
}

#[test]
fn deck_filters_in_seed_order() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let out = pov(&config)
        .args(["deck", "--filter", "Festas"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(ids(&out.stdout), vec![1, 5]);

    let out = pov(&config).arg("deck").output().unwrap();
    assert_eq!(ids(&out.stdout), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn deck_uses_config_default_filter() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "default_filter = \"Bares\"\n");

    let out = pov(&config).arg("deck").output().unwrap();
    assert!(out.status.success());
    assert_eq!(ids(&out.stdout), vec![2, 6]);
}

#[test]
fn deck_writes_yaml_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");
    let output = dir.path().join("deck.yaml");

    pov(&config)
        .args(["deck", "--filter", "show", "--format", "yaml", "-o"])
        .arg(&output)
        .assert()
        .success();

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("name: Indie Sessions"));
    assert!(yaml.contains("ticket:"));
    assert!(!yaml.contains("Samba do Beco"));
}

#[test]
fn unknown_filter_is_rejected() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    pov(&config)
        .args(["deck", "--filter", "Baladas"])
        .assert()
        .failure();
}

#[test]
fn show_prints_one_event() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let out = pov(&config).args(["show", "4"]).output().unwrap();
    assert!(out.status.success());
    let event: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(event["name"], "Cine-Arte na Praça");
    assert_eq!(event["vibe"], "Em tempo real");
    assert_eq!(event["featured"], false);
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let out = pov(&config).args(["show", "42"]).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Event not found: 42"));
}

#[test]
fn custom_seed_is_validated() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "");

    let event = serde_json::json!({
        "id": 7,
        "name": "Sarau",
        "image": "https://example.com/sarau.jpg",
        "category": "Cultural",
        "music_style": "MPB",
        "distance": "1 km",
        "status": "fraco",
        "description": "Poesia e violão.",
        "address": "Rua X, 1"
    });

    let good = dir.path().join("good.json");
    fs::write(&good, serde_json::to_string(&[&event]).unwrap()).unwrap();
    let out = pov(&config)
        .args(["deck", "--seed"])
        .arg(&good)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(ids(&out.stdout), vec![7]);

    let dup = dir.path().join("dup.json");
    fs::write(&dup, serde_json::to_string(&[&event, &event]).unwrap()).unwrap();
    let out = pov(&config)
        .args(["deck", "--seed"])
        .arg(&dup)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("duplicate event id in seed: 7"));
}
