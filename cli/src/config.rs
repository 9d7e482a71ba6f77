use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Version the configuration file must declare.
pub const APP_VERSION: &str = "0.1";

const DEFAULT_MAX_RESPONSES: usize = 5;

/// Parsed `config.json`: engine identity, response limit, document list.
#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    config: EngineSection,
    #[serde(default)]
    files: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct EngineSection {
    name: String,
    version: String,
    #[serde(default)]
    max_responses: Option<Value>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("{} is missing or cannot be opened", path.display()))?;
        let cfg: ConfigFile = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        if cfg.config.version != APP_VERSION {
            bail!("{} has incorrect file version", path.display());
        }
        Ok(cfg)
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn version(&self) -> &str {
        &self.config.version
    }

    /// Configured file list. Entries that are not strings stay in place as
    /// empty placeholder slots so document ids line up with positions.
    pub fn file_names(&self) -> Vec<Option<&str>> {
        self.files.iter().map(Value::as_str).collect()
    }

    /// Response limit; absent or non-numeric values fall back to the
    /// default, negative values clamp to zero. Floats truncate.
    pub fn max_responses(&self) -> usize {
        let value = match &self.config.max_responses {
            Some(value) => value,
            None => {
                tracing::warn!(
                    default = DEFAULT_MAX_RESPONSES,
                    "'max_responses' missing from config, using default"
                );
                return DEFAULT_MAX_RESPONSES;
            }
        };
        match value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)) {
            Some(n) => n.max(0) as usize,
            None => {
                tracing::warn!(
                    default = DEFAULT_MAX_RESPONSES,
                    "'max_responses' is not a number, using default"
                );
                DEFAULT_MAX_RESPONSES
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_complete_config() {
        let file = write_config(
            r#"{
                "config": { "name": "SiftEngine", "version": "0.1", "max_responses": 3 },
                "files": ["a.txt", "b.txt"]
            }"#,
        );
        let cfg = ConfigFile::load(file.path()).unwrap();
        assert_eq!(cfg.name(), "SiftEngine");
        assert_eq!(cfg.version(), "0.1");
        assert_eq!(cfg.max_responses(), 3);
        assert_eq!(cfg.file_names(), vec![Some("a.txt"), Some("b.txt")]);
    }

    #[test]
    fn rejects_wrong_version() {
        let file = write_config(
            r#"{ "config": { "name": "x", "version": "9.9" }, "files": [] }"#,
        );
        let err = ConfigFile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("incorrect file version"));
    }

    #[test]
    fn rejects_missing_config_section() {
        let file = write_config(r#"{ "files": [] }"#);
        assert!(ConfigFile::load(file.path()).is_err());
    }

    #[test]
    fn non_string_file_entries_become_placeholders() {
        let file = write_config(
            r#"{
                "config": { "name": "x", "version": "0.1" },
                "files": ["a.txt", 42, null, "b.txt"]
            }"#,
        );
        let cfg = ConfigFile::load(file.path()).unwrap();
        assert_eq!(
            cfg.file_names(),
            vec![Some("a.txt"), None, None, Some("b.txt")]
        );
    }

    #[test]
    fn max_responses_defaults_when_absent_or_invalid() {
        let absent = write_config(r#"{ "config": { "name": "x", "version": "0.1" }, "files": [] }"#);
        assert_eq!(ConfigFile::load(absent.path()).unwrap().max_responses(), 5);

        let invalid = write_config(
            r#"{ "config": { "name": "x", "version": "0.1", "max_responses": "ten" }, "files": [] }"#,
        );
        assert_eq!(ConfigFile::load(invalid.path()).unwrap().max_responses(), 5);
    }

    #[test]
    fn max_responses_accepts_floats_and_clamps_negatives() {
        let float = write_config(
            r#"{ "config": { "name": "x", "version": "0.1", "max_responses": 2.9 }, "files": [] }"#,
        );
        assert_eq!(ConfigFile::load(float.path()).unwrap().max_responses(), 2);

        let negative = write_config(
            r#"{ "config": { "name": "x", "version": "0.1", "max_responses": -4 }, "files": [] }"#,
        );
        assert_eq!(ConfigFile::load(negative.path()).unwrap().max_responses(), 0);
    }
}
