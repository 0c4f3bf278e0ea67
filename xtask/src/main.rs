//! xtask - Development tasks for warframe-tasks

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;

use warframe_tasks::task::locations::LOCATIONS;
use warframe_tasks::task::model::{seed_constant_tasks, seed_tasks};
use warframe_tasks::task::Backup;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for warframe-tasks")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs,
    /// Write an export of the seed data, usable as an import example
    GenSample,
}

fn main() {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs => generate_cli_docs(),
        Commands::GenSample => generate_sample_export(),
    }
}

fn docs_dir() -> &'static Path {
    let dir = Path::new("docs");
    fs::create_dir_all(dir.join("cli")).expect("Failed to create docs directory");
    dir
}

fn generate_cli_docs() {
    let mut markdown = clap_markdown::help_markdown::<warframe_tasks::cli::Cli>();
    markdown.push_str("\n## Known locations\n\n");
    for location in LOCATIONS {
        markdown.push_str(&format!("- {}\n", location));
    }

    let output_path = docs_dir().join("cli").join("reference.md");
    fs::write(&output_path, markdown).expect("Failed to write CLI reference");

    println!("Generated CLI documentation at {}", output_path.display());
}

fn generate_sample_export() {
    let backup = Backup::new(&seed_tasks(), &seed_constant_tasks());
    let json = backup.to_json().expect("Failed to serialize sample export");

    let output_path = docs_dir().join("sample-export.json");
    fs::write(&output_path, json).expect("Failed to write sample export");

    println!("Generated sample export at {}", output_path.display());
}
