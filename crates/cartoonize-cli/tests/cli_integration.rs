//! CLI Integration Tests
//!
//! These tests verify the CLI commands work end-to-end, including a real
//! upload against a synthetic cartoonize server.

use std::net::SocketAddr;
use std::path::PathBuf;

use assert_cmd::Command;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const RESULT_BYTES: &[u8] = b"cartoonized result";

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cartoonize").expect("Failed to find cartoonize binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Write a file with the given name into `dir`
fn write_image(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Start a server on its own runtime thread; it lives until the test exits.
fn spawn_server(status: StatusCode) -> SocketAddr {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let app = Router::new().route(
                "/image/cartoon",
                post(move |mut multipart: Multipart| async move {
                    let mut saw_image = false;
                    while let Ok(Some(field)) = multipart.next_field().await {
                        saw_image |= field.name() == Some("image");
                    }
                    if !saw_image {
                        return (StatusCode::BAD_REQUEST, Vec::new());
                    }
                    (status, RESULT_BYTES.to_vec())
                }),
            );
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    rx.recv().unwrap()
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server URL: http://localhost:5000"))
        .stdout(predicate::str::contains("Endpoint: http://localhost:5000/image/cartoon"))
        .stdout(predicate::str::contains("local_storage.json"));
}

#[test]
fn test_config_set_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["config", "set", "--server-url", "http://cartoon.example:9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration saved."));

    cli_cmd(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server URL: http://cartoon.example:9000"));
}

#[test]
fn test_config_set_without_values_keeps_config() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["config", "set", "--server-url", "http://kept"])
        .assert()
        .success();

    cli_cmd(&data_dir)
        .args(["config", "set"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server URL: http://kept"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_accepts_png() {
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "cat.png", b"\x89PNG\r\n\x1a\n");

    cli_cmd(&data_dir)
        .arg("check")
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: cat.png (image/png, 8 bytes)"));
}

#[test]
fn test_check_rejects_gif() {
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "anim.gif", b"GIF89a");

    cli_cmd(&data_dir)
        .arg("check")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("You can only upload JPG/PNG file!"));
}

#[test]
fn test_check_rejects_oversized() {
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "huge.jpg", &vec![0u8; 10 * 1024 * 1024]);

    cli_cmd(&data_dir)
        .arg("check")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image must be smaller than 10MB!"));
}

#[test]
fn test_convert_rejects_sparse_oversized_file() {
    let data_dir = TempDir::new().unwrap();
    let image = data_dir.path().join("giant.png");
    let file = std::fs::File::create(&image).unwrap();
    file.set_len(1024 * 1024 * 1024).unwrap();
    drop(file);

    cli_cmd(&data_dir)
        .arg("convert")
        .arg(&image)
        .arg("--server-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image must be smaller than 10MB!"));
}

#[test]
fn test_check_missing_file() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["check", "/no/such/image.png"])
        .assert()
        .failure();
}

// ============================================================================
// Convert Command Tests
// ============================================================================

#[test]
fn test_convert_saves_server_result() {
    let addr = spawn_server(StatusCode::OK);
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "cat.png", b"png bytes");

    cli_cmd(&data_dir)
        .args(["config", "set", "--server-url"])
        .arg(format!("http://{}", addr))
        .assert()
        .success();

    cli_cmd(&data_dir)
        .arg("convert")
        .arg(&image)
        .arg("--output")
        .arg(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Uploading cat.png (9 bytes)"))
        .stdout(predicate::str::contains("Saved:"));

    let saved = std::fs::read(data_dir.path().join("imgutil.jpeg")).unwrap();
    assert_eq!(saved, RESULT_BYTES);
}

#[test]
fn test_convert_server_url_override_is_not_persisted() {
    let addr = spawn_server(StatusCode::OK);
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "cat.jpg", b"jpeg bytes");
    let output = data_dir.path().join("out.jpeg");

    cli_cmd(&data_dir)
        .arg("convert")
        .arg(&image)
        .arg("--output")
        .arg(&output)
        .arg("--server-url")
        .arg(format!("http://{}", addr))
        .assert()
        .success();
    assert_eq!(std::fs::read(&output).unwrap(), RESULT_BYTES);

    cli_cmd(&data_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Server URL: http://localhost:5000"));
}

#[test]
fn test_convert_reports_server_error() {
    let addr = spawn_server(StatusCode::INTERNAL_SERVER_ERROR);
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "cat.png", b"png bytes");

    cli_cmd(&data_dir)
        .arg("convert")
        .arg(&image)
        .arg("--output")
        .arg(data_dir.path())
        .arg("--server-url")
        .arg(format!("http://{}", addr))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Transformation failed: Server responded with status 500",
        ));

    assert!(!data_dir.path().join("imgutil.jpeg").exists());
}

#[test]
fn test_convert_rejects_unsupported_type_without_request() {
    let data_dir = TempDir::new().unwrap();
    let image = write_image(&data_dir, "notes.txt", b"hello");

    cli_cmd(&data_dir)
        .arg("convert")
        .arg(&image)
        .arg("--server-url")
        .arg("http://127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("You can only upload JPG/PNG file!"));
}
