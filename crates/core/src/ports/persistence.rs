use crate::domain::MenuCommand;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// 64-bit install location, checked first
pub const TORTOISEGIT_PROC_X64: &str = r"C:\Program Files\TortoiseGit\bin\TortoiseGitProc.exe";
/// 32-bit install location
pub const TORTOISEGIT_PROC_X86: &str =
    r"C:\Program Files (x86)\TortoiseGit\bin\TortoiseGitProc.exe";

/// Configuration store interface
pub trait ConfigStore: Send + Sync {
    /// Load configuration from storage
    fn load(&self) -> Result<AppConfig>;

    /// Save configuration to storage
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,
    #[serde(default)]
    pub tool: ToolConfig,
    /// Menu command name -> bindings, replacing the defaults for that command
    #[serde(default)]
    pub keybindings: BTreeMap<String, Vec<String>>,
}

/// Where to find TortoiseGitProc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Explicit executable, tried before `search_paths`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from(TORTOISEGIT_PROC_X64),
        PathBuf::from(TORTOISEGIT_PROC_X86),
    ]
}

impl AppConfig {
    /// Ordered executable candidates; the first existing one wins
    pub fn tool_candidates(&self) -> Vec<PathBuf> {
        self.tool
            .path
            .iter()
            .chain(self.tool.search_paths.iter())
            .cloned()
            .collect()
    }

    /// Bindings for `command`, honoring configured overrides
    pub fn keybindings_for(&self, command: MenuCommand) -> Vec<String> {
        self.keybindings
            .iter()
            .find(|(name, _)| {
                name.parse::<MenuCommand>()
                    .map(|c| c == command)
                    .unwrap_or(false)
            })
            .map(|(_, bindings)| bindings.clone())
            .unwrap_or_else(|| command.default_keybindings())
    }

    /// Names in `[keybindings]` that do not match any menu command
    pub fn unknown_keybinding_commands(&self) -> Vec<&str> {
        self.keybindings
            .keys()
            .filter(|name| name.parse::<MenuCommand>().is_err())
            .map(String::as_str)
            .collect()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            tool: ToolConfig::default(),
            keybindings: BTreeMap::new(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            path: None,
            search_paths: default_search_paths(),
        }
    }
}
