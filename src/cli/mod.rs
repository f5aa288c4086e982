//! Terminal commands that print index results to stdout.

pub mod tree_render;

use anyhow::Result;

use crate::config::Config;
use crate::index::ProjectIndex;

pub fn list_projects(index: &ProjectIndex) {
    let projects = index.discover_all();
    if projects.is_empty() {
        println!("No projects found. Add one with `devpattern config add-project <path>`.");
        return;
    }
    print!("{}", tree_render::render_projects(&projects));
}

pub fn list_documents(index: &ProjectIndex, project_id: &str) -> Result<()> {
    let documents = index.list_documents(project_id)?;
    if documents.is_empty() {
        println!("No documents.");
    } else {
        print!("{}", tree_render::render_documents(&documents));
    }
    Ok(())
}

pub fn print_config(index: &ProjectIndex, config: &Config) -> Result<()> {
    println!("# {}", index.store().path().display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
