use appbox::copier::copy_template;
use appbox::encoding::{read_utf16le, write_utf16le};
use appbox::error::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_copy_template() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("_template.ini");
    let content = "\u{FEFF}Name=[[APPNAME]]\nÜber=ñ";
    write_utf16le(&template, content).unwrap();

    let dest_folder = temp_dir.path().join("Chrome");
    fs::create_dir(&dest_folder).unwrap();

    let copied = copy_template(&template, &dest_folder, "Chrome.ini").unwrap();
    assert_eq!(copied, dest_folder.join("Chrome.ini"));
    assert_eq!(read_utf16le(&copied).unwrap(), content);
    assert_eq!(fs::read(&copied).unwrap(), fs::read(&template).unwrap());
}

#[test]
fn test_copy_missing_template() {
    let temp_dir = TempDir::new().unwrap();
    let result = copy_template(
        temp_dir.path().join("missing.ini"),
        temp_dir.path(),
        "X.ini",
    );

    assert!(matches!(result, Err(Error::CopyError { .. })));
    assert!(!temp_dir.path().join("X.ini").exists());
}

#[test]
fn test_copy_invalid_encoding() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("_template.ini");
    fs::write(&template, [b'a', 0, b'b']).unwrap();

    let result = copy_template(&template, temp_dir.path(), "X.ini");
    match result {
        Err(Error::CopyError { reason, .. }) => assert!(reason.contains("odd number of bytes")),
        other => panic!("Expected CopyError, got {other:?}"),
    }
}

#[test]
fn test_copy_into_missing_folder() {
    let temp_dir = TempDir::new().unwrap();
    let template = temp_dir.path().join("_template.ini");
    write_utf16le(&template, "x").unwrap();

    let result = copy_template(&template, temp_dir.path().join("nope"), "X.ini");
    assert!(matches!(result, Err(Error::CopyError { .. })));
}
