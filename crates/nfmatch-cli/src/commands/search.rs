//! Search command - classify invoice numbers against a source folder
//! without copying anything.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;

use nfmatch_core::{resolve_all, search_batch, IndexCache, SearchResults};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Source folder to index
    #[arg(short, long)]
    source: PathBuf,

    /// Invoice numbers
    numbers: Vec<String>,

    /// Read additional numbers from a file, one per line
    #[arg(short = 'f', long)]
    numbers_file: Option<PathBuf>,

    /// Document extension to index
    #[arg(long, default_value = "pdf")]
    extension: String,

    /// List every candidate file per number (ambiguity preview)
    #[arg(long)]
    ambiguous: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AmbiguityEntry {
    number: String,
    candidates: Vec<PathBuf>,
}

pub fn run(args: SearchArgs) -> anyhow::Result<()> {
    let mut numbers = args.numbers.clone();
    if let Some(path) = &args.numbers_file {
        let content = fs::read_to_string(path)?;
        numbers.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(ToString::to_string),
        );
    }
    if numbers.is_empty() {
        anyhow::bail!("no invoice numbers given (positional or --numbers-file)");
    }

    let cache = IndexCache::new(args.extension.clone());
    let index = cache.get(&args.source);

    if args.ambiguous {
        let entries: Vec<AmbiguityEntry> = numbers
            .iter()
            .map(|number| AmbiguityEntry {
                number: number.clone(),
                candidates: resolve_all(number, &index),
            })
            .collect();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            print_ambiguity(&entries);
        }
        return Ok(());
    }

    let results = search_batch(&numbers, &index);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }

    Ok(())
}

fn print_results(results: &SearchResults) {
    for found in &results.found {
        println!(
            "{} {} -> {}",
            style("✓").green(),
            found.number,
            found.path.display()
        );
    }
    for number in &results.not_found {
        println!("{} {} not found", style("✗").red(), number);
    }
    for number in &results.ignored {
        println!("{} {} ignored (number too short)", style("-").yellow(), number);
    }

    println!();
    println!(
        "{} found, {} not found, {} ignored",
        results.found.len(),
        results.not_found.len(),
        results.ignored.len()
    );
}

fn print_ambiguity(entries: &[AmbiguityEntry]) {
    for entry in entries {
        match entry.candidates.len() {
            0 => println!("{} {}: no candidates", style("✗").red(), entry.number),
            1 => println!(
                "{} {}: {}",
                style("✓").green(),
                entry.number,
                entry.candidates[0].display()
            ),
            n => {
                println!(
                    "{} {}: {} candidates",
                    style("!").yellow(),
                    entry.number,
                    n
                );
                for candidate in &entry.candidates {
                    println!("    {}", candidate.display());
                }
            }
        }
    }
}
