// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use filekit::logic::upload::check_files;
use filekit::models::file::CandidateFile;
use filekit::models::policy::{DEFAULT_ENDPOINT, FileConfig};
use filekit::utils::classify;
use filekit::utils::format::format_size;
use filekit::utils::localize::English;

#[derive(Parser)]
#[command(name = "filekit")]
#[command(about = "Classify file types and check uploads against endpoint policies")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the display descriptor for MIME types or categories
    Describe {
        /// Type keys such as `application/pdf`, `text/x-python` or `csv`
        #[arg(required = true)]
        types: Vec<String>,
    },
    /// Validate local files against an endpoint's upload policy
    Check {
        /// Files to check, in selection order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// JSON file configuration; built-in defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,

        /// Endpoint whose policy applies
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Describe { types } => {
            for key in types {
                let descriptor = classify(&key);
                println!(
                    "{key}\t{} {}\t{}\t{}",
                    descriptor.icon.glyph(),
                    descriptor.icon.as_str(),
                    descriptor.fill,
                    descriptor.title
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            files,
            config,
            endpoint,
        } => {
            let config = match config {
                Some(path) => FileConfig::load(&path)?,
                None => FileConfig::default(),
            };
            let policy = config.endpoint(&endpoint);
            let candidates = files
                .iter()
                .map(|path| CandidateFile::from_path(path))
                .collect::<Result<Vec<_>>>()?;

            match check_files(&candidates, &[], &policy) {
                Ok(checked) => {
                    for file in checked {
                        println!("{}\t{}\t{}", file.name, file.mime, format_size(file.size));
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("{}", err.localized(&English));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
