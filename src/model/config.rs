use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the key files. None = platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Delay before a focus-loss edit commit fires
    #[serde(default = "default_blur_commit_delay_ms")]
    pub blur_commit_delay_ms: u64,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Theme overrides by color name, values like "#FF4444"
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Tag colors keyed by category label
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            blur_commit_delay_ms: default_blur_commit_delay_ms(),
            show_key_hints: true,
            mouse: true,
            colors: HashMap::new(),
            category_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_blur_commit_delay_ms() -> u64 {
    100
}
