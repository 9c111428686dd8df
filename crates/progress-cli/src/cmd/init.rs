use anyhow::Result;
use progress_core::config::Config;
use progress_core::fallback::demo_payload;
use progress_core::{io, paths};
use std::path::Path;

pub fn run(root: &Path) -> Result<()> {
    let config_path = paths::config_path(root);
    let config = if config_path.exists() {
        println!("  exists   {}", paths::CONFIG_FILE);
        Config::load(root)?
    } else {
        let config = Config::default();
        config.save(root)?;
        println!("  created  {}", paths::CONFIG_FILE);
        config
    };

    let data = serde_json::to_string_pretty(&demo_payload())?;
    let data_path = config.progress_file_path(root);
    let status = if io::write_if_missing(&data_path, data.as_bytes())? {
        "created"
    } else {
        "exists "
    };
    println!("  {status}  {}", config.progress_file.display());

    let shots = config.screenshots_path(root);
    std::fs::create_dir_all(&shots)?;
    println!("  ready    {}", config.screenshots_dir.display());

    println!("\nRun `progress serve` to open the dashboard.");
    Ok(())
}
