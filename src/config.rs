use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    #[serde(default = "default_content_path")]
    pub path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: default_content_path(),
        }
    }
}

fn default_content_path() -> PathBuf {
    PathBuf::from("content.json")
}

/// Window for the simulated typing delay applied by the chat session.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatConfig {
    #[serde(default = "default_typing_delay_min_ms")]
    pub typing_delay_min_ms: u64,
    #[serde(default = "default_typing_delay_max_ms")]
    pub typing_delay_max_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: default_typing_delay_min_ms(),
            typing_delay_max_ms: default_typing_delay_max_ms(),
        }
    }
}

fn default_typing_delay_min_ms() -> u64 {
    1000
}
fn default_typing_delay_max_ms() -> u64 {
    2000
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate chat delay window
    if config.chat.typing_delay_min_ms > config.chat.typing_delay_max_ms {
        anyhow::bail!(
            "chat.typing_delay_min_ms ({}) must not exceed chat.typing_delay_max_ms ({})",
            config.chat.typing_delay_min_ms,
            config.chat.typing_delay_max_ms
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("engine.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.content.path, PathBuf::from("content.json"));
        assert_eq!(config.chat.typing_delay_min_ms, 1000);
        assert_eq!(config.chat.typing_delay_max_ms, 2000);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("engine.toml");
        fs::write(
            &path,
            r#"
[chat]
typing_delay_min_ms = 0
typing_delay_max_ms = 0

[content]
path = "data/portfolio.json"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.chat.typing_delay_min_ms, 0);
        assert_eq!(config.content.path, PathBuf::from("data/portfolio.json"));
    }

    #[test]
    fn test_inverted_delay_window_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("engine.toml");
        fs::write(
            &path,
            r#"
[chat]
typing_delay_min_ms = 3000
typing_delay_max_ms = 1000
"#,
        )
        .unwrap();

        assert!(load_config(&path).is_err());
    }
}
