use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use url::Url;

use snapsight::config::SnapConfig;
use snapsight::pipeline;
use snapsight::vision::client::NO_DESCRIPTION_PLACEHOLDER;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("snapsight_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes a shell script standing in for the screenshot utility. It writes
/// fake image bytes to the path following the -o flag.
fn stub_capture(dir: &Path) -> PathBuf {
    stub_capture_with(
        dir,
        r#"while [ "$1" ]; do if [ "$1" = "-o" ]; then out="$2"; fi; shift; done
printf 'PNGDATA' > "$out""#,
    )
}

fn stub_capture_with(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("stub-capture.sh");
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn config(dir: &Path, server_url: &str) -> SnapConfig {
    SnapConfig {
        launch: None,
        delay: 0.0,
        output: dir.join("shot.png"),
        describe: false,
        model: "llama3.2-vision:11b".to_string(),
        ollama_url: Url::parse(server_url).unwrap(),
        active_only: true,
        prompt: None,
        expect_title: None,
        capture_cmd: stub_capture(dir).to_string_lossy().into_owned(),
    }
}

#[tokio::test]
async fn test_describe_writes_sibling_text_file() {
    let dir = test_dir("describe");
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response": "A calculator app"}"#)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.describe = true;

    pipeline::run(&config).await.unwrap();

    assert!(dir.join("shot.png").exists());
    let description = fs::read_to_string(dir.join("shot.txt")).unwrap();
    assert_eq!(description, "A calculator app");
}

#[tokio::test]
async fn test_no_description_requested_means_no_vision_call() {
    let dir = test_dir("novision");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .expect(0)
        .create_async()
        .await;

    let config = config(&dir, &server.url());
    pipeline::run(&config).await.unwrap();

    assert!(dir.join("shot.png").exists());
    assert!(!dir.join("shot.txt").exists());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_capture_without_output_file_fails() {
    let dir = test_dir("missingfile");
    let mut server = mockito::Server::new_async().await;

    let mut config = config(&dir, &server.url());
    config.capture_cmd = stub_capture_with(&dir, "exit 0")
        .to_string_lossy()
        .into_owned();

    let err = pipeline::run(&config).await.unwrap_err();
    assert!(err.to_string().contains("did not create"));
}

#[tokio::test]
async fn test_failed_verification_retries_once_then_fails() {
    let dir = test_dir("verifyfail");
    let mut server = mockito::Server::new_async().await;
    // Initial attempt plus one retry, nothing more
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response": "NO, title is Bar"}"#)
        .expect(2)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.expect_title = Some("Foo".to_string());

    let err = pipeline::run(&config).await.unwrap_err();
    assert!(err.to_string().contains("verification failed"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_loose_yes_match_passes_verification() {
    let dir = test_dir("looseyes");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"response": "NOPE, but actually yes it says Foo"}"#)
        .expect(1)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.expect_title = Some("Foo".to_string());

    pipeline::run(&config).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_response_field_writes_placeholder() {
    let dir = test_dir("placeholder");
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r#"{"done": true}"#)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.describe = true;

    pipeline::run(&config).await.unwrap();

    let description = fs::read_to_string(dir.join("shot.txt")).unwrap();
    assert_eq!(description, NO_DESCRIPTION_PLACEHOLDER);
}

#[tokio::test]
async fn test_custom_prompt_implies_description() {
    let dir = test_dir("customprompt");
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "prompt": "Is dark mode enabled?",
        })))
        .with_status(200)
        .with_body(r#"{"response": "Yes, dark mode is on"}"#)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.prompt = Some("Is dark mode enabled?".to_string());

    pipeline::run(&config).await.unwrap();

    let description = fs::read_to_string(dir.join("shot.txt")).unwrap();
    assert_eq!(description, "Yes, dark mode is on");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_launch_failure_does_not_block_capture() {
    let dir = test_dir("launchfail");
    let mut server = mockito::Server::new_async().await;

    let mut config = config(&dir, &server.url());
    config.launch = Some("definitely-not-a-real-application".to_string());

    pipeline::run(&config).await.unwrap();
    assert!(dir.join("shot.png").exists());
}

#[tokio::test]
async fn test_vision_outage_during_describe_is_not_fatal() {
    let dir = test_dir("outage");
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/generate")
        .with_status(503)
        .create_async()
        .await;

    let mut config = config(&dir, &server.url());
    config.describe = true;

    // The folded error message is written like a real description
    pipeline::run(&config).await.unwrap();
    let description = fs::read_to_string(dir.join("shot.txt")).unwrap();
    assert!(description.starts_with("Error calling Ollama:"));
}
