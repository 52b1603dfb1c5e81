use dirtree::config::Config;
use dirtree::Traversal;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn parse_complete_config_file() {
    let config_content = r#"
[render]
print_files = true
traversal = "recursive"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    assert!(config.render.print_files);
    assert_eq!(config.render.traversal, Traversal::Recursive);
}

#[test]
fn parse_partial_config_uses_defaults() {
    let config_content = r#"
[render]
print_files = true
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let config = Config::load(Some(file.path())).unwrap();

    // Explicit value
    assert!(config.render.print_files);
    // Default value
    assert_eq!(config.render.traversal, Traversal::Iterative);
}

#[test]
fn parse_invalid_toml_returns_error() {
    let config_content = "this is not valid toml [[[";

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = Config::load(Some(file.path()));
    assert!(result.is_err());
}

#[test]
fn parse_unknown_traversal_returns_error() {
    let config_content = r#"
[render]
traversal = "sideways"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn missing_explicit_config_returns_error() {
    let result = Config::load(Some(Path::new("/nonexistent/dirtree.toml")));
    assert!(result.is_err());
}

#[test]
fn default_path_lives_under_dirtree() {
    if let Some(path) = Config::default_path() {
        assert!(path.ends_with("dirtree/config.toml"));
    }
}
