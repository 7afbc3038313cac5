use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::dataset::source::refresh_dataset;
use crate::domain::models::JsonOut;
use crate::services::layout::catalog_report;
use crate::services::output::{print_one, print_out};

/// Commands that never need the dataset in memory. Returns `false` when the
/// command belongs to another handler.
pub fn handle_setup_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Fetch => {
            let report = refresh_dataset(
                &config.dataset.source,
                config.dataset.fetch_timeout_ms,
                cli.offline,
            )?;
            print_one(cli.json, report, |r| match &r.cache_path {
                Some(cache) => format!(
                    "{} {} ({} bytes) -> {}",
                    r.status, r.source, r.bytes, cache
                ),
                None => format!("{} {} ({} bytes)", r.status, r.source, r.bytes),
            })?;
        }
        Commands::Catalog => {
            let report = catalog_report(config);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                let entries: Vec<_> = report.features.iter().chain(&report.groups).collect();
                print_out(false, &entries, |e| {
                    format!("{}\t{}\t{}", e.role, e.column, e.question)
                })?;
                println!(
                    "default: {} x {}",
                    report.default_feature, report.default_group
                );
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}
