use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Project;

/// Replace the dataset at `path` with `projects`, pretty-printed.
pub fn write_projects(path: &Path, projects: &[Project]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(projects)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
