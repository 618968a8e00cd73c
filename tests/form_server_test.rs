use std::fs;
use std::sync::Arc;
use backup_config_form::config::constants::SUCCESS_MESSAGE;
use backup_config_form::structs::config::server_settings::ServerSettings;
use backup_config_form::structs::source_config::SourceConfig;
use backup_config_form::ui::form_server::{routes, FormContext};
use backup_config_form::ui::template_registry::TemplateRegistry;
use tempfile::TempDir;

use crate::common::parse_single;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn context_for(dir: &TempDir, output_name: &str) -> Arc<FormContext> {
    let settings = ServerSettings {
        output_path: dir.path().join(output_name).display().to_string(),
        static_dir: dir.path().join("static").display().to_string(),
        ..ServerSettings::default()
    };
    Arc::new(FormContext::new(TemplateRegistry::new(), &settings))
}

fn post_generate(body: &str) -> warp::test::RequestBuilder {
    warp::test::request()
        .method("POST")
        .path("/generate")
        .header("content-type", FORM_CONTENT_TYPE)
        .body(body.to_string())
}

#[tokio::test]
async fn index_serves_the_form() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));

    let response = warp::test::request().method("GET").path("/").reply(&api).await;

    assert_eq!(response.status(), 200);
    let body = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(body.contains("name=\"github-token\""));
    assert!(body.contains("name=\"filter.languages[]\""));
    assert!(!body.contains("{{ERROR_BLOCK}}"));
}

#[tokio::test]
async fn successful_submission_writes_config_and_confirms() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));
    let body = "github-token=abc123&user=octocat&exclude%5B%5D=old-repo&wiki=on&filter.stars=5";

    let response = post_generate(body).reply(&api).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.body().as_ref(), SUCCESS_MESSAGE.as_bytes());

    let written = fs::read_to_string(dir.path().join("config.yaml")).unwrap();
    let parsed = parse_single(&written);
    assert_eq!(parsed.token, "abc123");
    assert_eq!(parsed.user, "octocat");
    assert_eq!(parsed.exclude, vec!["old-repo"]);
    assert!(parsed.wiki);
    assert_eq!(parsed.filter.stars, 5);
    assert!(parsed.filter.languages.is_empty());
}

#[tokio::test]
async fn repeated_array_fields_keep_order() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));
    let body = "filter.languages%5B%5D=Rust&filter.languages%5B%5D=Go&includeorgs%5B%5D=a%3Ab";

    let response = post_generate(body).reply(&api).await;

    assert_eq!(response.status(), 200);
    let parsed = parse_single(&fs::read_to_string(dir.path().join("config.yaml")).unwrap());
    assert_eq!(parsed.filter.languages, vec!["Rust", "Go"]);
    assert_eq!(parsed.include_orgs, vec!["a:b"]);
}

#[tokio::test]
async fn empty_submission_still_produces_valid_config() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));

    let response = post_generate("").reply(&api).await;

    assert_eq!(response.status(), 200);
    let parsed = parse_single(&fs::read_to_string(dir.path().join("config.yaml")).unwrap());
    assert_eq!(parsed, SourceConfig::default());
}

#[tokio::test]
async fn bind_failure_rerenders_form_with_400() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));

    let response = post_generate("user=octocat&filter.stars=lots").reply(&api).await;

    assert_eq!(response.status(), 400);
    let body = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(body.contains("action=\"/generate\""));
    assert!(body.contains("class=\"error\""));
    assert!(body.contains("filter.stars"));
    assert!(!dir.path().join("config.yaml").exists());
}

#[tokio::test]
async fn write_failure_returns_500_without_creating_a_file() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "missing/config.yaml"));

    let response = post_generate("github-token=abc123").reply(&api).await;

    assert_eq!(response.status(), 500);
    let body = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(!body.contains(SUCCESS_MESSAGE));
    assert!(body.contains("Failed to write"));
    assert!(!dir.path().join("missing").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn read_only_output_directory_returns_500_and_leaves_no_temp_file() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();
    fs::set_permissions(&out, fs::Permissions::from_mode(0o555)).unwrap();

    // Permission bits do not bind a privileged user.
    let check = out.join("writable-check");
    if fs::File::create(&check).is_ok() {
        fs::remove_file(&check).unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let api = routes(context_for(&dir, "out/config.yaml"));
    let response = post_generate("github-token=abc123&user=octocat").reply(&api).await;
    let leftovers: Vec<_> = fs::read_dir(&out).unwrap().collect();
    fs::set_permissions(&out, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(response.status(), 500);
    let body = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(body.contains("Failed to write"));
    assert!(!body.contains(SUCCESS_MESSAGE));
    assert!(!out.join("config.yaml").exists());
    assert!(leftovers.is_empty(), "left behind: {:?}", leftovers);
}

#[tokio::test]
async fn static_files_are_served() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("static")).unwrap();
    fs::write(dir.path().join("static").join("style.css"), "body {}").unwrap();
    let api = routes(context_for(&dir, "config.yaml"));

    let response = warp::test::request().method("GET").path("/static/style.css").reply(&api).await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.body().as_ref(), b"body {}");
}

#[tokio::test]
async fn get_on_generate_is_not_accepted() {
    let dir = TempDir::new().unwrap();
    let api = routes(context_for(&dir, "config.yaml"));

    let response = warp::test::request().method("GET").path("/generate").reply(&api).await;

    assert_eq!(response.status(), 405);
}
