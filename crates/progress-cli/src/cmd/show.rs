use anyhow::{bail, Result};
use progress_core::config::Config;
use progress_core::loader::{DataSource, ProgressLoader};
use progress_core::paths;
use progress_core::render::format_percent;
use progress_core::types::{ProgressPayload, Status};
use std::path::Path;

use crate::output::{print_json, print_table};

pub fn run(root: &Path, url: Option<&str>, strict: bool, json: bool) -> Result<()> {
    let config = Config::load(root)?;
    let url = match url {
        Some(u) => u.to_string(),
        None => config.progress_url_for_port(paths::DEFAULT_PORT),
    };
    let loader = ProgressLoader::new(url, config.fetch_timeout())?;

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(loader.load());

    if strict {
        if let DataSource::Fallback { reason } = &outcome.source {
            bail!("could not load progress from {}: {reason}", loader.url());
        }
        outcome.payload.validate()?;
    }

    if json {
        return print_json(&outcome);
    }

    println!("{}\n", config.project);
    print_payload(&outcome.payload);
    Ok(())
}

/// Terminal rendition of the dashboard: overall, milestones in order, then
/// the feature grid as a table.
pub fn print_payload(payload: &ProgressPayload) {
    println!(
        "Overall project completion: {}",
        format_percent(payload.overall)
    );
    println!();

    let milestones = payload
        .milestones
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.title.clone(),
                status_cell(m.status),
                format_percent(m.percent),
            ]
        })
        .collect();
    print_table(&["#", "MILESTONE", "STATUS", "PROGRESS"], milestones);
    println!();

    let features = payload
        .features
        .iter()
        .map(|f| vec![f.id.clone(), f.title.clone(), status_cell(f.status)])
        .collect();
    print_table(&["ID", "FEATURE", "STATUS"], features);
    println!();

    println!(
        "{} done, {} in progress, {} to-do",
        payload.feature_count(Status::Done),
        payload.feature_count(Status::InProgress),
        payload.feature_count(Status::Todo)
    );
}

fn status_cell(status: Status) -> String {
    let badge = status.badge();
    format!("{} {}", badge.icon.symbol(), badge.label)
}
