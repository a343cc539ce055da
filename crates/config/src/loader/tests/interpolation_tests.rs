//! End-to-end substitution scenarios for the configuration loader.
//!
//! Responsibilities:
//! - Test `${section:key}`, `{name}` and `{{TOKEN}}` together through `build()`.
//! - Test the ordering between the three substitution passes.

use tempfile::TempDir;

use super::{FixedTokens, write_cfg};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::{Source, TypedValue};

fn load(contents: &str) -> Result<crate::Configuration, ConfigError> {
    let temp_dir = TempDir::new().unwrap();
    let cfg = write_cfg(temp_dir.path(), "project.cfg", contents);
    ConfigLoader::new()
        .with_config_path(cfg)
        .with_override_path(temp_dir.path().join("none.cfg"))
        .with_token_source(FixedTokens)
        .build()
}

#[test]
fn test_default_placeholders() {
    let conf = load("[DEFAULT]\nuser = alice\nsuffix = _prod\n[section]\noutput = dataset_{user}{suffix}\n")
        .unwrap();

    assert_eq!(
        conf.get("section", "output"),
        Some(&TypedValue::from("dataset_alice_prod"))
    );
    assert_eq!(conf.source("section.output"), Some(Source::Default));
}

#[test]
fn test_extended_interpolation_then_runtime_token() {
    let conf = load(
        "[project]\nname = example_project\n[preprocess]\noutput_dir = ${project:name}/build/output/{{USER}}\n",
    )
    .unwrap();

    assert_eq!(
        conf.get("preprocess", "output_dir"),
        Some(&TypedValue::from("example_project/build/output/tester"))
    );
}

#[test]
fn test_default_placeholder_is_not_recursive() {
    let conf = load("[DEFAULT]\na = {b}\nb = x\n[s]\nv = {a}\n").unwrap();

    assert_eq!(conf.get("s", "v"), Some(&TypedValue::from("{b}")));
}

#[test]
fn test_unknown_placeholders_are_left_verbatim() {
    let conf = load("[s]\nv = {missing}/{{HOME}}\n").unwrap();

    assert_eq!(conf.get("s", "v"), Some(&TypedValue::from("{missing}/{{HOME}}")));
}

#[test]
fn test_default_placeholder_can_produce_token() {
    let conf = load("[DEFAULT]\nwho = {{USER}}\n[s]\nv = run_{who}\n").unwrap();

    // `{who}` expands to the raw DEFAULT text, which the token pass then resolves.
    assert_eq!(conf.get("s", "v"), Some(&TypedValue::from("run_tester")));
}

#[test]
fn test_escaped_dollar() {
    let conf = load("[s]\nprice = $$5\n").unwrap();

    assert_eq!(conf.get("s", "price"), Some(&TypedValue::from("$5")));
}

#[test]
fn test_missing_reference_aborts_load() {
    let err = load("[s]\nv = ${other:key}\n").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InterpolationMissing { ref section, ref key, .. }
            if section == "s" && key == "v"
    ));
}

#[test]
fn test_interpolated_value_is_typed_after_expansion() {
    let conf = load("[base]\nsize = 64\n[model]\nhidden = ${base:size}\n").unwrap();

    assert_eq!(conf.get("model", "hidden"), Some(&TypedValue::Integer(64)));
}
