use crate::config::ConfigRecord;
use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Recognized config file names at a project root, in precedence order.
pub const CONFIG_FILE_NAMES: [&str; 3] = [".commitlintrc.json", ".commitlintrc", "commitlint.toml"];

/// File written by `init`.
pub const DEFAULT_FILE_NAME: &str = ".commitlintrc.json";

#[derive(Debug)]
pub enum ConfigFileError {
    NotFound(PathBuf),
    AlreadyExists(PathBuf),
    Read(io::Error),
    Write(io::Error),
    ParseJson(serde_json::Error),
    ParseToml(toml::de::Error),
}

impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFileError::NotFound(root) => write!(
                f,
                "no commitlint config found in {} (looked for {})",
                root.display(),
                CONFIG_FILE_NAMES.join(", ")
            ),
            ConfigFileError::AlreadyExists(path) => {
                write!(f, "{} already exists (use --force to overwrite)", path.display())
            }
            ConfigFileError::Read(e) => write!(f, "failed to read config: {}", e),
            ConfigFileError::Write(e) => write!(f, "failed to write config: {}", e),
            ConfigFileError::ParseJson(e) => write!(f, "failed to parse config: {}", e),
            ConfigFileError::ParseToml(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigFileError {}

/// Find the first config file at `root` by filename convention.
pub fn discover(root: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parse a single config file. Format is chosen by extension:
/// `.toml` is TOML, everything else is JSON.
pub fn load_file(path: &Path) -> Result<ConfigRecord, ConfigFileError> {
    let text = fs::read_to_string(path).map_err(ConfigFileError::Read)?;
    if path.extension() == Some(OsStr::new("toml")) {
        toml::from_str(&text).map_err(ConfigFileError::ParseToml)
    } else {
        serde_json::from_str(&text).map_err(ConfigFileError::ParseJson)
    }
}

/// Discover and load the config at a project root.
pub fn load(root: &Path) -> Result<(PathBuf, ConfigRecord), ConfigFileError> {
    let path = discover(root).ok_or_else(|| ConfigFileError::NotFound(root.to_path_buf()))?;
    let record = load_file(&path)?;
    Ok((path, record))
}

/// Write the canonical conventional record to `root` as pretty JSON.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_default(root: &Path, force: bool) -> Result<PathBuf, ConfigFileError> {
    let path = root.join(DEFAULT_FILE_NAME);
    if path.exists() && !force {
        return Err(ConfigFileError::AlreadyExists(path));
    }

    let record = ConfigRecord::conventional();
    let mut text = serde_json::to_string_pretty(&record).map_err(ConfigFileError::ParseJson)?;
    text.push('\n');
    fs::write(&path, text).map_err(ConfigFileError::Write)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RuleParam, Severity};
    use tempfile::TempDir;

    #[test]
    fn discover_nothing_in_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert_eq!(discover(dir.path()), None);
    }

    #[test]
    fn discover_prefers_json_over_toml() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("commitlint.toml"), "extends = []\n").unwrap();
        fs::write(dir.path().join(".commitlintrc.json"), "{}").unwrap();

        let found = discover(dir.path()).unwrap();
        assert_eq!(found.file_name().unwrap(), ".commitlintrc.json");
    }

    #[test]
    fn load_reports_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::NotFound(_)));
    }

    #[test]
    fn load_json_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".commitlintrc.json"),
            r#"{
                "extends": ["@commitlint/config-conventional"],
                "rules": {
                    "subject-case": [0],
                    "header-max-length": [2, "always", 100]
                }
            }"#,
        )
        .unwrap();

        let (path, record) = load(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), ".commitlintrc.json");
        assert!(record.rule("subject-case").unwrap().is_off());
        assert_eq!(
            record.rule("header-max-length").unwrap().param,
            Some(RuleParam::Bound(100))
        );
    }

    #[test]
    fn load_extensionless_rc_as_json() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".commitlintrc"),
            r#"{"rules": {"subject-case": [0]}}"#,
        )
        .unwrap();

        let (_, record) = load(dir.path()).unwrap();
        assert!(record.rule("subject-case").unwrap().is_off());
    }

    #[test]
    fn load_toml_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("commitlint.toml"),
            r#"
extends = ["@commitlint/config-conventional"]

[rules]
"type-enum" = [2, "always", ["feat", "fix"]]
"header-max-length" = [2, "always", 100]
"#,
        )
        .unwrap();

        let (_, record) = load(dir.path()).unwrap();
        let type_enum = record.rule("type-enum").unwrap();
        assert_eq!(type_enum.severity, Severity::Error);
        assert_eq!(
            type_enum.param,
            Some(RuleParam::Allowed(vec!["feat".into(), "fix".into()]))
        );
    }

    #[test]
    fn load_rejects_malformed_severity() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".commitlintrc.json"),
            r#"{"rules": {"subject-case": [7]}}"#,
        )
        .unwrap();

        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::ParseJson(_)));
    }

    #[test]
    fn write_default_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = write_default(dir.path(), false).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_FILE_NAME);

        let (_, record) = load(dir.path()).unwrap();
        assert_eq!(record, ConfigRecord::conventional());
    }

    #[test]
    fn write_default_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        write_default(dir.path(), false).unwrap();
        let err = write_default(dir.path(), false).unwrap_err();
        assert!(matches!(err, ConfigFileError::AlreadyExists(_)));
    }

    #[test]
    fn write_default_force_overwrites() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_FILE_NAME), "not json").unwrap();
        write_default(dir.path(), true).unwrap();

        let (_, record) = load(dir.path()).unwrap();
        assert_eq!(record, ConfigRecord::conventional());
    }
}
