use anyhow::{Context, Result};
use progress_core::config::Config;
use progress_core::paths;
use progress_core::screenshots::list_screenshots;
use std::path::Path;

use crate::output::{print_json, print_table};

pub fn run(root: &Path, dir: Option<&Path>, json: bool) -> Result<()> {
    let config = Config::load(root)?;
    let dir = match dir {
        Some(d) => paths::resolve(root, d),
        None => config.screenshots_path(root),
    };

    let shots = list_screenshots(&dir, &config.public_prefix())
        .with_context(|| format!("cannot read screenshot directory {}", dir.display()))?;

    if json {
        return print_json(&shots);
    }

    if shots.is_empty() {
        println!("No screenshots in {}.", dir.display());
        return Ok(());
    }

    let rows = shots
        .iter()
        .map(|s| vec![s.name.clone(), s.src.clone()])
        .collect();
    print_table(&["NAME", "PATH"], rows);
    Ok(())
}
