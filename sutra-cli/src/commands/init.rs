//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"site:
  title: My Stories
  author: ~
  description: ~
  url: ~

paths:
  stories: stories
  output: public
"#;

/// Initialize a new sutra project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config_path = root.join("sutra.yml");
    if config_path.exists() {
        println!("sutra.yml already exists at {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {:?}", config_path))?;
        println!("Created {:?}", config_path);
    }

    fs::create_dir_all(root.join("stories"))?;

    println!("✓ sutra initialized in {:?}", root);
    println!("  - Edit sutra.yml to customize site metadata");
    println!("  - Create a story with `sutra new <title>`");
    Ok(())
}
