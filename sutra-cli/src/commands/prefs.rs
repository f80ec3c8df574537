//! Preference commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sutra_core::Config;
use sutra_store::PrefStore;

fn prefs_path(config_path: &Path) -> Result<PathBuf> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    Ok(config.stories_dir().join(".prefs.json"))
}

pub fn prefs_get(config_path: &Path, key: &str) -> Result<()> {
    let store = PrefStore::open(prefs_path(config_path)?)?;
    match store.get(key) {
        Some(value) => {
            println!("{value}");
            Ok(())
        }
        None => anyhow::bail!("preference '{key}' is not set"),
    }
}

pub fn prefs_set(config_path: &Path, key: &str, value: &str) -> Result<()> {
    let mut store = PrefStore::open(prefs_path(config_path)?)?;
    store.set(key, value)?;
    Ok(())
}
