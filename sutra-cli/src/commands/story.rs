//! Story commands: new, list, show, apply.

use std::path::Path;

use anyhow::{Context, Result};
use sutra_core::{Config, Story};
use sutra_store::StoryStore;
use sutra_types::{BlockOp, StoryId};

fn open_store(config_path: &Path) -> Result<StoryStore> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    StoryStore::open(config.stories_dir()).context("Failed to open story store")
}

/// Create a story with its seed heading block and save it.
pub fn new_story(config_path: &Path, title: &str) -> Result<()> {
    let store = open_store(config_path)?;
    let story = Story::new(title);
    if store.exists(&story.id) {
        anyhow::bail!("story '{}' already exists", story.id);
    }
    store.save(&story)?;
    println!("{}", story.id);
    Ok(())
}

pub fn list_stories(config_path: &Path) -> Result<()> {
    let store = open_store(config_path)?;
    for id in store.list()? {
        println!("{}", id);
    }
    Ok(())
}

pub fn show_story(config_path: &Path, id: &str, json: bool) -> Result<()> {
    let store = open_store(config_path)?;
    let story = store.load(&StoryId::new(id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&story)?);
    } else {
        println!("{} ({})", story.title, story.id);
        for block in &story.blocks {
            let preview = block.content.lines().next().unwrap_or("");
            println!("  [{}] {} {}", block.id.as_u64(), block.kind.as_str(), preview);
        }
    }
    Ok(())
}

/// Apply one operation or an array of operations, in order, then save.
pub fn apply_ops(config_path: &Path, id: &str, ops_json: &str) -> Result<()> {
    let ops: Vec<BlockOp> = if ops_json.trim_start().starts_with('[') {
        serde_json::from_str(ops_json).context("Failed to parse operation array")?
    } else {
        vec![serde_json::from_str(ops_json).context("Failed to parse operation")?]
    };

    let store = open_store(config_path)?;
    let mut story = store.load(&StoryId::new(id))?;
    let mut doc = story.document()?;
    for op in &ops {
        doc = doc.apply(op);
    }
    story.set_document(&doc);
    store.save(&story)?;
    println!("applied {} op(s) to {}", ops.len(), story.id);
    Ok(())
}
