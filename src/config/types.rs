// Configuration type definitions

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
    Memory,
}

/// How recognised shortcuts are carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InterceptMode {
    /// Forward to the host's built-in command of the same name
    Native,
    /// Perform the clipboard and selection work directly
    #[default]
    Manual,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Interceptor configuration section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InterceptorConfig {
    #[serde(default)]
    pub mode: InterceptMode,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub interceptor: InterceptorConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
