//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};

use crate::content::loader::ContentLoader;
use crate::content::Section;
use crate::generator::{Generator, SiteContent};
use crate::{Folio, CONFIG_FILE};

/// Load the records of every section
pub fn load_content(folio: &Folio) -> Result<SiteContent> {
    let loader = ContentLoader::new(folio);
    Ok(SiteContent {
        blog: loader.load_section(Section::Blog)?,
        projects: loader.load_section(Section::Projects)?,
    })
}

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    let start = Instant::now();

    let content = load_content(folio)?;
    tracing::info!(
        "Loaded {} posts and {} projects",
        content.blog.len(),
        content.projects.len()
    );

    let generator = Generator::new(folio)?;
    generator.generate(&content)?;

    tracing::info!("Generated in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

/// Watch content, static assets and the config file, rebuilding on change
pub async fn watch(folio: &Folio) -> Result<()> {
    let folio = folio.clone();
    tokio::task::spawn_blocking(move || watch_blocking(&folio)).await?
}

fn watch_blocking(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for dir in [&folio.content_dir, &folio.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
            tracing::debug!("Watching: {:?}", dir);
        }
    }
    let config_path = folio.base_dir.join(CONFIG_FILE);
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| is_relevant(&e.path))
                    .collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                // Re-read the config so edits to _config.yml apply
                match Folio::new(&folio.base_dir).and_then(|site| run(&site)) {
                    Ok(()) => tracing::info!("Regenerated successfully"),
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

/// Skip editor swap files and VCS noise
fn is_relevant(path: &Path) -> bool {
    let in_git_dir = path
        .components()
        .any(|c| c.as_os_str() == ".git");
    let path_str = path.to_string_lossy();
    !in_git_dir
        && !path_str.ends_with(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}
