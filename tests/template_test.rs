use crudgen::config::Config;
use crudgen::error::Error;
use crudgen::template::{resolve_template_dir, TemplateSource};
use std::path::PathBuf;
use tempfile::TempDir;

fn config_with_root(root: &std::path::Path) -> Config {
    let mut config = Config { templates_root: Some(root.to_path_buf()), ..Config::default() };
    config.templates.insert("admin".to_string(), "admin".to_string());
    config
}

#[test]
fn test_template_source_from_config() {
    let mut config = config_with_root(&PathBuf::from("/stubs"));
    config.templates.insert("custom".to_string(), "/opt/custom".to_string());

    assert_eq!(
        TemplateSource::from_config(&config, "custom").unwrap(),
        TemplateSource::Absolute(PathBuf::from("/opt/custom"))
    );
    let builtin = TemplateSource::from_config(&config, "admin").unwrap();
    assert_eq!(builtin.path(), PathBuf::from("/stubs/admin"));
    assert_eq!(format!("{builtin}"), "templates root '/stubs': 'admin'");
}

#[test]
fn test_resolve_relative_and_default_profiles() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(temp_dir.path().join("admin")).unwrap();
    std::fs::create_dir_all(temp_dir.path().join("laravel")).unwrap();
    let config = config_with_root(temp_dir.path());

    assert_eq!(
        resolve_template_dir(&config, Some("admin")).unwrap(),
        temp_dir.path().join("admin")
    );
    assert_eq!(resolve_template_dir(&config, None).unwrap(), temp_dir.path().join("laravel"));
}

#[test]
fn test_resolve_absolute_profile() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config
        .templates
        .insert("abs".to_string(), temp_dir.path().display().to_string());

    assert_eq!(resolve_template_dir(&config, Some("abs")).unwrap(), temp_dir.path());
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_with_root(temp_dir.path());

    match resolve_template_dir(&config, Some("admin")) {
        Err(Error::TemplateDoesNotExistError { template_dir }) => {
            assert!(template_dir.ends_with("admin"))
        }
        other => panic!("Expected TemplateDoesNotExistError, got {other:?}"),
    }
}

#[test]
fn test_unknown_profile() {
    let config = Config::default();
    assert!(matches!(
        resolve_template_dir(&config, Some("nope")),
        Err(Error::UnknownTemplateProfileError { .. })
    ));
}

#[test]
fn test_bundled_default_profile_exists() {
    let config = Config::default();
    let dir = resolve_template_dir(&config, None).unwrap();
    assert!(dir.join("Model.php.stub").is_file());
}
