use std::fs;

use jscgen::{resolve_options, resolve_root};
use tempfile::tempdir;

#[test]
fn resolve_root_accepts_existing_directory() {
    let tmp = tempdir().expect("tempdir");
    let resolved = resolve_root(tmp.path().to_str().expect("utf8 path")).expect("resolve");
    assert_eq!(resolved, tmp.path());
}

#[test]
fn resolve_root_rejects_missing_directory() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("nope");
    let err = resolve_root(missing.to_str().expect("utf8 path")).unwrap_err();
    assert!(err.to_string().contains("Root is not a directory"), "unexpected error: {err}");
}

#[test]
fn resolve_root_rejects_plain_file() {
    let tmp = tempdir().expect("tempdir");
    let file = tmp.path().join("file.js");
    fs::write(&file, b"x").expect("write");
    let err = resolve_root(file.to_str().expect("utf8 path")).unwrap_err();
    assert!(err.to_string().contains("Root is not a directory"), "unexpected error: {err}");
}

#[test]
fn resolve_options_defaults_without_config_or_flags() {
    let options = resolve_options(None, &[], &[], None).expect("resolve");
    assert_eq!(options.extensions, vec!["js"]);
    assert_eq!(options.exclude, vec!["r2dec-test.js"]);
    assert_eq!(options.prefix, "jsc_");
}

#[test]
fn resolve_options_flags_override_config_file() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("embed.json");
    fs::write(&config, r#"{ "prefix": "cfg_", "extensions": ["lua"] }"#).expect("write config");

    let options = resolve_options(
        Some(&config),
        &[],
        &["skip.js".to_string()],
        Some("flag_"),
    )
    .expect("resolve");

    // File value survives where no flag was given; flags win elsewhere.
    assert_eq!(options.extensions, vec!["lua"]);
    assert_eq!(options.exclude, vec!["skip.js"]);
    assert_eq!(options.prefix, "flag_");
}

#[test]
fn resolve_options_rejects_malformed_config() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("embed.json");
    fs::write(&config, "not-json").expect("write config");

    let err = resolve_options(Some(&config), &[], &[], None).unwrap_err();
    assert!(err.to_string().contains("Failed to parse options JSON"), "unexpected error: {err}");
}

#[test]
fn resolve_options_rejects_missing_config() {
    let tmp = tempdir().expect("tempdir");
    let config = tmp.path().join("absent.json");

    let err = resolve_options(Some(&config), &[], &[], None).unwrap_err();
    assert!(err.to_string().contains("Failed to read options file"), "unexpected error: {err}");
}
