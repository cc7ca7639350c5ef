use std::fs::write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

use centroid_report::config::ReportConfig;
use centroid_report::load_config::load_config;

#[test]
fn test_load_config_overrides_only_given_keys() {
    let config_yaml = r#"
output_dir: ./tmp/reports
validate_ranges: false
search:
  base_url: "https://maps.example/search/"
  queries: [cafes, parks]
pdf:
  lines_per_page: 20
"#;
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), config_yaml).unwrap();

    let config = load_config(config_file.path()).expect("Config should load");

    assert_eq!(config.output_dir, PathBuf::from("./tmp/reports"));
    assert!(!config.validate_ranges);
    assert_eq!(config.search.base_url, "https://maps.example/search/");
    assert_eq!(config.search.queries, ["cafes", "parks"]);
    assert_eq!(config.search.zoom, 14);
    assert_eq!(config.pdf.lines_per_page, 20);
    assert_eq!(config.map, ReportConfig::default().map);
}

#[test]
fn test_load_config_errors_for_invalid_file() {
    let config_file = NamedTempFile::new().expect("temp file");
    write(config_file.path(), b"not-yaml: [:::").unwrap();

    let err = load_config(config_file.path()).unwrap_err();
    let msg = format!("{err:#}");
    assert!(
        msg.contains("parse") || msg.contains("YAML"),
        "Parse error expected, got: {msg}"
    );
}

#[test]
fn test_load_config_errors_for_missing_file() {
    let err = load_config("/no/such/run.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
