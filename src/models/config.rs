use super::MappingMode;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "s2nav.toml";

// =============================================================================
// Generator Configuration
// =============================================================================

/// Which generation backend answers reasoning and completion calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// OpenAI-compatible chat completions over HTTP
    #[default]
    Http,
    /// Local LLM CLI fed through stdin
    Cli,
    /// No backend; every call falls back
    Disabled,
}

/// Generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub backend: BackendKind,
    /// Model name (overridden by `LLM_MODEL`)
    #[serde(default = "default_model")]
    pub model: String,
    /// Chat-completions endpoint for the HTTP backend
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Token budget for mapping calls
    #[serde(default = "default_mapping_max_tokens")]
    pub mapping_max_tokens: u32,
    /// Token budget for paragraph completion calls
    #[serde(default = "default_enhance_max_tokens")]
    pub enhance_max_tokens: u32,
    /// Hard limit on a single backend call
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// CLI command for the CLI backend
    #[serde(default = "default_command")]
    pub command: String,
    /// Extra arguments for the CLI backend
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Spinner on the terminal while the CLI backend runs
    #[serde(default)]
    pub show_progress: bool,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_mapping_max_tokens() -> u32 {
    2000
}

fn default_enhance_max_tokens() -> u32 {
    800
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_command() -> String {
    "claude".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-p".to_string()]
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            model: default_model(),
            endpoint: default_endpoint(),
            api_key_env: default_api_key_env(),
            temperature: default_temperature(),
            mapping_max_tokens: default_mapping_max_tokens(),
            enhance_max_tokens: default_enhance_max_tokens(),
            timeout_secs: default_timeout_secs(),
            command: default_command(),
            args: default_args(),
            show_progress: false,
        }
    }
}

// =============================================================================
// Server / Defaults
// =============================================================================

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Request defaults applied when a caller omits a field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_industry")]
    pub industry: String,
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    #[serde(default)]
    pub mode: MappingMode,
}

fn default_industry() -> String {
    "IT services".to_string()
}

fn default_jurisdiction() -> String {
    "IFRS".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            industry: default_industry(),
            jurisdiction: default_jurisdiction(),
            mode: MappingMode::default(),
        }
    }
}

// =============================================================================
// Navigator Configuration
// =============================================================================

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl NavigatorConfig {
    /// Load config from an explicit path, `./s2nav.toml`, or the user config dir,
    /// falling back to defaults when none exists.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env();
        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: NavigatorConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config as pretty TOML
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("s2nav").join("config.toml"))
            .filter(|path| path.exists())
    }

    fn apply_env(&mut self) {
        if let Ok(model) = std::env::var("LLM_MODEL") {
            if !model.trim().is_empty() {
                self.generator.model = model;
            }
        }
    }
}
