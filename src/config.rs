// src/config.rs
//! Runtime configuration for the crack binary — loaded once at startup.
//!
//! The library API never reads this; searches take their inputs as
//! explicit arguments.

use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: Input,
    pub search: Search,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    /// Path to the flat '0'/'1' ciphertext file.
    pub ciphertext_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
    pub mode: Mode,
    /// Worker pool size for the triple search; 0 means one per hardware
    /// thread.
    pub workers: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Single,
    Triple,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("SDES_CONFIG").unwrap_or_else(|_| "crack-config.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read crack config");
            toml::from_str(&content).expect("Invalid TOML in crack config")
        } else {
            eprintln!("Warning: {config_path} not found — using built-in defaults");
            Config {
                input: Input {
                    ciphertext_path: "ciphertext.txt".into(),
                },
                search: Search {
                    mode: Mode::Single,
                    workers: 0,
                },
            }
        }
    })
}
