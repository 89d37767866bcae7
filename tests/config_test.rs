use appbox::cli::Args;
use appbox::config::{find_config_file, parse_config, resolve_config, Config, ConfigFile};
use appbox::constants::CONFIG_FILES;
use appbox::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn empty_args() -> Args {
    Args {
        config: None,
        input: None,
        base_dir: None,
        template: None,
        verbose: false,
    }
}

#[test]
fn test_parse_json_config() {
    let content = r#"{"inputPath": "apps.csv", "baseDirectory": "Apps", "templatePath": "t.ini"}"#;
    let config = parse_config(content).unwrap();

    assert_eq!(config.input_path, Some(PathBuf::from("apps.csv")));
    assert_eq!(config.base_directory, Some(PathBuf::from("Apps")));
    assert_eq!(config.template_path, Some(PathBuf::from("t.ini")));
}

#[test]
fn test_parse_yaml_config() {
    let content = "inputPath: apps.csv\nbaseDirectory: Apps\n";
    let config = parse_config(content).unwrap();

    assert_eq!(config.input_path, Some(PathBuf::from("apps.csv")));
    assert_eq!(config.base_directory, Some(PathBuf::from("Apps")));
    assert_eq!(config.template_path, None);
}

#[test]
fn test_parse_invalid_config() {
    let result = parse_config("inputPath: [unclosed");
    match result {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("Invalid configuration format")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_merge_prefers_overrides() {
    let file = ConfigFile {
        input_path: Some(PathBuf::from("file.csv")),
        base_directory: Some(PathBuf::from("FileApps")),
        template_path: None,
    };
    let flags = ConfigFile {
        input_path: Some(PathBuf::from("flag.csv")),
        base_directory: None,
        template_path: Some(PathBuf::from("flag.ini")),
    };

    let merged = file.merge(flags);
    assert_eq!(merged.input_path, Some(PathBuf::from("flag.csv")));
    assert_eq!(merged.base_directory, Some(PathBuf::from("FileApps")));
    assert_eq!(merged.template_path, Some(PathBuf::from("flag.ini")));
}

#[test]
fn test_missing_key_is_error() {
    let file = ConfigFile {
        input_path: Some(PathBuf::from("a.csv")),
        base_directory: Some(PathBuf::from("Apps")),
        template_path: None,
    };
    match Config::try_from(file) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("templatePath")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_find_config_file_order() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(find_config_file(temp_dir.path(), &CONFIG_FILES), None);

    fs::write(temp_dir.path().join("appbox.yaml"), "").unwrap();
    fs::write(temp_dir.path().join("appbox.json"), "{}").unwrap();
    assert_eq!(
        find_config_file(temp_dir.path(), &CONFIG_FILES),
        Some(temp_dir.path().join("appbox.json"))
    );
}

#[test]
fn test_resolve_from_working_dir_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("appbox.yml"),
        "inputPath: data/apps.csv\nbaseDirectory: /srv/Apps\ntemplatePath: _template.ini\n",
    )
    .unwrap();

    let config = resolve_config(&empty_args(), temp_dir.path()).unwrap();
    assert_eq!(
        config,
        Config {
            input_path: temp_dir.path().join("data/apps.csv"),
            base_directory: PathBuf::from("/srv/Apps"),
            template_path: temp_dir.path().join("_template.ini"),
        }
    );
}

#[test]
fn test_resolve_explicit_config_with_overrides() {
    let temp_dir = TempDir::new().unwrap();
    let config_dir = temp_dir.path().join("conf");
    fs::create_dir(&config_dir).unwrap();
    let config_path = config_dir.join("custom.json");
    fs::write(
        &config_path,
        r#"{"inputPath": "apps.csv", "baseDirectory": "Apps", "templatePath": "t.ini"}"#,
    )
    .unwrap();

    let args = Args {
        config: Some(config_path),
        base_dir: Some(PathBuf::from("elsewhere")),
        ..empty_args()
    };
    let config = resolve_config(&args, temp_dir.path()).unwrap();

    assert_eq!(config.input_path, config_dir.join("apps.csv"));
    assert_eq!(config.base_directory, PathBuf::from("elsewhere"));
    assert_eq!(config.template_path, config_dir.join("t.ini"));
}

#[test]
fn test_resolve_flags_only() {
    let temp_dir = TempDir::new().unwrap();
    let args = Args {
        input: Some(PathBuf::from("a.csv")),
        base_dir: Some(PathBuf::from("Apps")),
        template: Some(PathBuf::from("t.ini")),
        ..empty_args()
    };

    let config = resolve_config(&args, temp_dir.path()).unwrap();
    assert_eq!(config.input_path, PathBuf::from("a.csv"));
}

#[test]
fn test_resolve_missing_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let args = Args {
        config: Some(temp_dir.path().join("nope.yaml")),
        ..empty_args()
    };

    assert!(matches!(
        resolve_config(&args, temp_dir.path()),
        Err(Error::ConfigError(_))
    ));
}
