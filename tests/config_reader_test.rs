use backup_config_form::services::config_reader::ConfigReader;
use backup_config_form::services::yaml_renderer::YamlRenderer;
use backup_config_form::errors::FormError;
use tempfile::TempDir;

use crate::common::{fully_populated, scenario_a};

#[test]
fn loads_a_rendered_config_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, YamlRenderer::new().render(&fully_populated()).unwrap()).unwrap();

    let document = ConfigReader::load(&path).unwrap();

    assert_eq!(document.github, vec![fully_populated()]);
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = ConfigReader::parse("github:\n  - token: [unclosed\n").unwrap_err();
    assert!(matches!(err, FormError::ParseError { .. }));
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.yaml");

    let err = ConfigReader::load(&path).unwrap_err();

    assert!(err.to_string().contains("nope.yaml"));
}

#[test]
fn summary_masks_secrets() {
    let document = ConfigReader::parse(&YamlRenderer::new().render(&scenario_a()).unwrap()).unwrap();
    let summary = ConfigReader::summarize(&document).join("\n");

    assert!(summary.contains("1 entries under 'github'"));
    assert!(summary.contains("user: octocat"));
    assert!(summary.contains("token: ****"));
    assert!(!summary.contains("abc123"));
}

#[test]
fn json_output_uses_yaml_key_names() {
    let document = ConfigReader::parse(&YamlRenderer::new().render(&scenario_a()).unwrap()).unwrap();
    let json = ConfigReader::to_json(&document).unwrap();

    assert!(json.contains("\"excludeorgs\""));
    assert!(json.contains("\"lastactivity\""));
}
