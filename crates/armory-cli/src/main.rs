#![forbid(unsafe_code)]

use armory_model::{validate_entity, EntityKind, LOCALE_FILE};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const MAX_PRINTED_ISSUES: usize = 50;

#[derive(Parser)]
#[command(name = "armory", version, about = "Armory catalog data tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every entity locale file under a data root.
    Validate {
        #[arg(long, default_value = "assets/data")]
        root: PathBuf,
    },
}

/// One error per failing file; validation of a single file stops at
/// its first violation, the batch keeps going.
struct Issue {
    location: String,
    message: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Validate { root } => validate_tree(&root),
    }
}

fn validate_tree(root: &Path) -> ExitCode {
    let mut issues = Vec::new();
    let mut counts = [0usize; 2];
    for (slot, kind) in [EntityKind::Character, EntityKind::Weapon]
        .into_iter()
        .enumerate()
    {
        let dir = root.join(kind.dir_name());
        let names = list_entry_names(&dir);
        counts[slot] = names.len();
        for name in names {
            let file = dir.join(&name).join(LOCALE_FILE);
            if let Some(issue) = validate_file(&file, kind) {
                issues.push(issue);
            }
        }
    }

    println!(
        "validate: characters={} weapons={} errors={}",
        counts[0],
        counts[1],
        issues.len()
    );
    for issue in issues.iter().take(MAX_PRINTED_ISSUES) {
        println!("- {}: {}", issue.location, issue.message);
    }
    if issues.len() > MAX_PRINTED_ISSUES {
        println!("...and {} more", issues.len() - MAX_PRINTED_ISSUES);
    }

    if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn list_entry_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn validate_file(file: &Path, kind: EntityKind) -> Option<Issue> {
    let location = file.display().to_string();
    let raw = match std::fs::read(file) {
        Ok(raw) => raw,
        Err(err) => {
            return Some(Issue {
                location,
                message: format!("failed to read: {err}"),
            })
        }
    };
    let value: Value = match serde_json::from_slice(&raw) {
        Ok(value) => value,
        Err(err) => {
            return Some(Issue {
                location,
                message: format!("invalid JSON: {err}"),
            })
        }
    };
    match validate_entity(kind, &value) {
        Ok(()) => None,
        Err(err) => Some(Issue {
            location,
            message: err.to_string(),
        }),
    }
}
