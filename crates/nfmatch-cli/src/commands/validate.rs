//! Validate command - check destination folders for a list of due dates.

use chrono::NaiveDate;
use clap::Args;
use console::style;

use nfmatch_core::validate_dest_folders;

use super::load_config;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Due dates to check (YYYY-MM-DD)
    #[arg(required = true)]
    dates: Vec<NaiveDate>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let statuses = validate_dest_folders(&config, &args.dates);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&statuses)?);
        return Ok(());
    }

    for status in &statuses {
        if !status.exists {
            println!(
                "{} {} {} (missing - create it before running)",
                style("✗").red(),
                status.due_date,
                status.path.display()
            );
        } else if status.empty {
            println!(
                "{} {} {} (empty, ready)",
                style("✓").green(),
                status.due_date,
                status.path.display()
            );
        } else {
            println!(
                "{} {} {} ({} file(s) already present)",
                style("!").yellow(),
                status.due_date,
                status.path.display(),
                status.file_count
            );
        }
    }

    Ok(())
}
