use anyhow::{Context, anyhow};

use crate::args::{Args, Command, resolve_config};
use crate::flows;
use crate::select::select_latest;
use crate::utils::log_utils::init_logging;

/// Run the subcommand selected in `args`
///
/// # Errors
///
/// Returns an error if the configuration cannot be resolved or the store
/// operation fails.
pub fn run_app(args: &Args) -> anyhow::Result<()> {
    init_logging(args.verbose);

    let config = resolve_config(args).map_err(|e| anyhow!(e))?;

    match &args.command {
        Command::Upload { file } => {
            let uploaded = flows::write_file(&config, file)
                .with_context(|| format!("Upload of '{}' failed", file.display()))?;
            println!("uploaded {}/{}", uploaded.bucket, uploaded.key);
        }
        Command::ReadLast { dest_dir } => {
            let downloaded = flows::read_last_file(&config, dest_dir.as_deref())
                .context("Download of the latest object failed")?;
            println!("{}", downloaded.uri());
        }
        Command::List { json } => {
            let objects = flows::list_bucket(&config).context("Listing failed")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&objects)?);
            } else {
                let latest = select_latest(&objects).map(|o| o.key.as_str());
                for object in &objects {
                    let marker = if Some(object.key.as_str()) == latest { "*" } else { " " };
                    println!("{marker} {object}");
                }
            }
        }
    }

    Ok(())
}
