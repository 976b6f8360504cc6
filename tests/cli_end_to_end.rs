#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::str::contains;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mapper-admin"))
}

#[test]
fn mappings_list_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/rest/entity-mapper/1/mapping");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1,"key":"duty","value":"alice"}]"#);
    });

    let assert = cmd()
        .env("MAPPER_SITE_URL", server.base_url())
        .arg("mappings")
        .arg("list")
        .assert()
        .success();

    let output = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(output.contains("\"key\": \"duty\""));
    mock.assert();
}

#[test]
fn audit_list_renders_flat_rows() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/rest/entity-mapper/1/audit/records");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"[{"id":9,"date":"07.11.2022 10:15:00","initiator":"admin","event":"CREATE","mappingId":3,"additionalInformation":{"key":"duty","value":"alice"}}]"#,
            );
    });

    cmd()
        .env("MAPPER_SITE_URL", server.base_url())
        .arg("audit")
        .arg("list")
        .assert()
        .success()
        .stdout(contains("[07.11.2022 10:15:00] admin CREATE #3: duty: alice"));
    mock.assert();
}

#[test]
fn custom_rest_prefix_is_honored() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/rest/entity-mapper/2/audit/records");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    cmd()
        .env("MAPPER_SITE_URL", server.base_url())
        .env("MAPPER_REST_PREFIX", "rest/entity-mapper/2")
        .arg("audit")
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No audit records found"));
    mock.assert();
}

#[test]
fn missing_site_fails_fast() {
    cmd()
        .arg("mappings")
        .arg("list")
        .env_remove("MAPPER_SITE_URL")
        .assert()
        .failure()
        .stderr(contains("Operation failed"));
}

#[test]
fn server_error_message_reaches_the_flag() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/rest/entity-mapper/1/settings");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"mappingsEnabledInProjects":false}"#);
    });
    server.mock(|when, then| {
        when.method("PUT").path("/rest/entity-mapper/1/settings");
        then.status(409)
            .header("content-type", "application/json")
            .body(r#"{"errorMessage":"Per-project management is locked"}"#);
    });

    cmd()
        .env("MAPPER_SITE_URL", server.base_url())
        .arg("settings")
        .arg("set-project-mappings")
        .arg("--enabled")
        .arg("true")
        .assert()
        .failure()
        .stderr(contains("Per-project management is locked"));
}
