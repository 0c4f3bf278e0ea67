//! `wft locations` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::locations;

#[derive(Args)]
pub struct LocationsArgs {
    /// Only show locations containing this text
    pub query: Option<String>,
}

pub async fn run(args: LocationsArgs) -> Result<()> {
    let matches = locations::suggest(args.query.as_deref().unwrap_or(""));
    if matches.is_empty() {
        println!("No matching locations.");
        return Ok(());
    }
    for location in matches {
        println!("{}", location);
    }
    Ok(())
}
