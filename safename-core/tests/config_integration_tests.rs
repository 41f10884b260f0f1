// safename-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use safename_core::config::{EmptyPolicy, OptionOverrides, SanitizeOptions};
use safename_core::Sanitizer;

fn write_config(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_load_from_file() -> Result<()> {
    let file = write_config(
        r#"
extended: false
remove: true
empty_policy: reject
"#,
    )?;
    let options = SanitizeOptions::load_from_file(file.path())?;
    assert_eq!(
        options,
        SanitizeOptions {
            extended: false,
            remove: true,
            empty_policy: EmptyPolicy::Reject,
        }
    );
    Ok(())
}

#[test]
fn test_load_from_file_partial_keeps_defaults() -> Result<()> {
    let file = write_config("remove: true\n")?;
    let options = SanitizeOptions::load_from_file(file.path())?;
    assert!(options.extended);
    assert!(options.remove);
    assert_eq!(options.empty_policy, EmptyPolicy::Allow);
    Ok(())
}

#[test]
fn test_load_from_empty_file() -> Result<()> {
    let file = write_config("")?;
    assert_eq!(SanitizeOptions::load_from_file(file.path())?, SanitizeOptions::default());
    Ok(())
}

#[test]
fn test_load_from_missing_file_names_the_path() {
    let err = SanitizeOptions::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.yaml"));
}

#[test]
fn test_load_from_file_rejects_unknown_policy() -> Result<()> {
    let file = write_config("empty_policy: sometimes\n")?;
    let err = SanitizeOptions::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_loaded_options_drive_the_sanitizer() -> Result<()> {
    let file = write_config("extended: false\n")?;
    let options = SanitizeOptions::load_from_file(file.path())?;
    let sanitizer = Sanitizer::new(options);
    assert_eq!(sanitizer.sanitize("a[b]:c"), "a[b]：c");

    let sanitizer = Sanitizer::new(options.merge(&OptionOverrides {
        extended: Some(true),
        ..Default::default()
    }));
    assert_eq!(sanitizer.sanitize("a[b]:c"), "a［b］：c");
    Ok(())
}
