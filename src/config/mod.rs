use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub pages: Option<String>,
    pub documents: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "min_a11y")]
    pub min_accessibility: Option<u8>,
    pub library: Option<String>,
    pub sensitivity: Option<String>,
    #[serde(alias = "synced_to_teams")]
    pub teams: Option<bool>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub timeout: Option<u64>,
    pub no_color: Option<bool>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".contentdash").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_config(path: &PathBuf) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

pub fn parse_config(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
    // an empty or comment-only file deserializes to unit, not a mapping
    if contents
        .lines()
        .all(|l| l.trim().is_empty() || l.trim_start().starts_with('#'))
    {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str::<ConfigFile>(contents)
}

fn default_config_yaml() -> String {
    r#"# contentdash config
#
# Location (default):
#   ~/.contentdash/config.yml

# Data sources: local paths or http(s) URLs
pages: ./pages.json
documents: ./documents.json

# Pages filters (leave empty to show everything)
# search: contact
# status: Draft
# min_accessibility: 80

# Documents filters
# library: Finance
# sensitivity: Restricted
# teams: true

# Output (optional)
# output: ./dashboard.html
# output_format: html
no_color: false

# Per-request timeout in seconds for URL sources
# timeout: 10
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses() {
        let cfg = parse_config(&default_config_yaml()).unwrap();
        assert_eq!(cfg.pages.as_deref(), Some("./pages.json"));
        assert_eq!(cfg.no_color, Some(false));
        assert_eq!(cfg.min_accessibility, None);
    }

    #[test]
    fn comment_only_config_is_default() {
        assert_eq!(parse_config("# nothing\n\n").unwrap(), ConfigFile::default());
    }

    #[test]
    fn typed_filters_parse() {
        let cfg = parse_config("min_a11y: 75\nteams: false\nlibrary: HR\n").unwrap();
        assert_eq!(cfg.min_accessibility, Some(75));
        assert_eq!(cfg.teams, Some(false));
        assert_eq!(cfg.library.as_deref(), Some("HR"));
    }

    #[test]
    fn ensure_default_config_creates_then_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yml");
        ensure_default_config_file(&path).unwrap();
        assert!(path.exists());
        std::fs::write(&path, "timeout: 4\n").unwrap();
        ensure_default_config_file(&path).unwrap();
        assert_eq!(load_config(&path).unwrap().timeout, Some(4));
    }

    #[test]
    fn missing_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("config file not found"));
    }
}
