use anyhow::Result;
use progress_core::fallback::demo_payload;

use super::show::print_payload;
use crate::output::print_json;

pub fn run(json: bool) -> Result<()> {
    let payload = demo_payload();
    if json {
        return print_json(&payload);
    }
    print_payload(&payload);
    Ok(())
}
