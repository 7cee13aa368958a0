use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use cashflow_pipeline::DEFAULT_BUDGET;

pub const CONFIG_ENV: &str = "CASHFLOW_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocab: VocabSection,
    pub pipeline: PipelineSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabSection {
    /// Keyword → category JSON file
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSection {
    /// Constant written to the Budget column
    pub budget: String,
}

impl Default for VocabSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/vocab.json"),
        }
    }
}

impl Default for PipelineSection {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET.to_string(),
        }
    }
}

pub fn cashflow_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cashflow"))
}

/// `$CASHFLOW_CONFIG` if set, otherwise `~/.cashflow/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(p) => Ok(PathBuf::from(p)),
        None => Ok(cashflow_home()?.join("config.toml")),
    }
}

/// Defaults when no config location can be resolved (no HOME, no override).
pub fn load_config() -> Result<Config> {
    match config_path() {
        Ok(p) => load_config_from(&p),
        Err(_) => Ok(Config::default()),
    }
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config(cfg: &Config, p: &Path) -> Result<()> {
    if let Some(dir) = p.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}
