//! Export command: render a story page to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sutra_core::Config;
use sutra_render::render_story_page;
use sutra_store::StoryStore;
use sutra_types::StoryId;

pub fn export_story(config_path: &Path, id: &str, out: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;
    let store = StoryStore::open(config.stories_dir())?;
    let story = store.load(&StoryId::new(id))?;

    let out_dir = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.output_dir())
        .join(story.id.as_str());
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {:?}", out_dir))?;

    let page = render_story_page(&story)?;
    let target = out_dir.join("index.html");
    fs::write(&target, page).with_context(|| format!("Failed to write {:?}", target))?;

    println!("exported {} -> {:?}", story.id, target);
    Ok(())
}
