//! Integration tests for the rscodec binary

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn rscodec() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rscodec"))
}

#[test]
fn test_help_lists_commands() {
    let output = rscodec().arg("--help").output().expect("Failed to execute rscodec");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("encode"));
    assert!(stdout.contains("corrupt"));
    assert!(stdout.contains("decode"));
}

#[test]
fn test_encode_corrupt_decode_cycle() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("message.txt");
    let data = "The quick brown fox jumps over the lazy dog. ".repeat(40);
    fs::write(&input, &data).unwrap();

    let status = rscodec()
        .args(["encode", input.to_str().unwrap(), "-e", "12", "-q"])
        .status()
        .unwrap();
    assert!(status.success());
    let encoded = dir.path().join("Encoded_File.txt");
    assert!(encoded.exists());

    let status = rscodec()
        .args(["corrupt", encoded.to_str().unwrap(), "-e", "12", "--seed", "3", "-q"])
        .status()
        .unwrap();
    assert!(status.success());
    let corrupted = dir.path().join("Corrupted_File.txt");
    assert_ne!(fs::read(&corrupted).unwrap(), fs::read(&encoded).unwrap());

    let decoded = dir.path().join("restored.txt");
    let status = rscodec()
        .args([
            "decode",
            corrupted.to_str().unwrap(),
            "-e",
            "12",
            "-o",
            decoded.to_str().unwrap(),
            "-q",
        ])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(fs::read_to_string(&decoded).unwrap(), data);
}

#[test]
fn test_unrepairable_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.bin");
    fs::write(&input, vec![0x42u8; 600]).unwrap();

    let encoded = dir.path().join("enc.bin");
    let status = rscodec()
        .args(["encode", input.to_str().unwrap(), "-e", "16", "-o", encoded.to_str().unwrap(), "-q"])
        .status()
        .unwrap();
    assert!(status.success());

    let corrupted = dir.path().join("bad.bin");
    let status = rscodec()
        .args([
            "corrupt",
            encoded.to_str().unwrap(),
            "-e",
            "16",
            "--errors",
            "40",
            "--seed",
            "8",
            "-o",
            corrupted.to_str().unwrap(),
            "-q",
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let output = rscodec()
        .args(["decode", corrupted.to_str().unwrap(), "-e", "16", "-o", dir.path().join("out.bin").to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("could not be repaired"));
}

#[test]
fn test_rejects_unsupported_primitive() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("x");
    fs::write(&input, b"x").unwrap();
    let output = rscodec()
        .args(["encode", input.to_str().unwrap(), "-p", "300"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}
