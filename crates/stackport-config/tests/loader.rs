use std::io::Write;

use stackport_config::{ConfigError, load_settings};

#[test]
fn load_settings_reads_file_and_validates() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "coreApiUrl": "http://127.0.0.1:6270",
            "corePingUrl": "http://127.0.0.1:6270/v1/ping",
            "dropboxAccessToken": "token",
            "subdomains": {{
                "team.id": {{ "registerUrl": "http://reg/register", "apiUrl": "http://reg" }}
            }}
        }}"#
    )?;

    let settings = load_settings(Some(file.path()))?;
    assert_eq!(settings.core_ping_url, "http://127.0.0.1:6270/v1/ping");
    assert!(settings.storage_connected());
    assert_eq!(settings.name_suffixes(), vec!["id", "team.id"]);
    Ok(())
}

#[test]
fn load_settings_rejects_invalid_endpoint() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "priceCheckUrl": "http://localhost:6270/v1/prices" }}"#)?;

    let err = load_settings(Some(file.path())).err();
    assert!(matches!(err, Some(ConfigError::InvalidField { .. })));
    Ok(())
}

#[test]
fn load_settings_reports_missing_file() {
    let err = load_settings(Some(std::path::Path::new("/nonexistent/stackport.json"))).err();
    assert!(matches!(err, Some(ConfigError::Io { .. })));
}
