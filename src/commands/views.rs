use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::dataset::DatasetStore;
use crate::domain::models::{BoxStats, JsonOut};
use crate::services::distribution::metric_by_sex;
use crate::services::facets::prestige_facets;
use crate::services::layout::dashboard;
use crate::services::output::print_out;
use crate::services::profile::describe;
use crate::services::summary::means_by_sex;
use crate::services::trend::prestige_income_scatter;

/// Static views over the loaded dataset.
pub fn handle_view_commands(
    cli: &Cli,
    config: &Config,
    store: &DatasetStore,
) -> anyhow::Result<bool> {
    let dataset = store.get_dataset();
    match &cli.command {
        Commands::Describe => {
            let profile = describe(dataset, store.source());
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: profile
                    })?
                );
            } else {
                println!("source: {}", profile.source);
                println!("records: {}", profile.records);
                for c in &profile.columns {
                    let levels = c
                        .levels
                        .as_ref()
                        .map(|ls| {
                            ls.iter()
                                .map(|l| format!("{}={}", l.level, l.count))
                                .collect::<Vec<_>>()
                                .join(", ")
                        })
                        .unwrap_or_default();
                    println!(
                        "{}\t{}\tnon_null={}\tnulls={}\t{}",
                        c.name, c.kind, c.non_null, c.nulls, levels
                    );
                }
            }
        }
        Commands::Summary => {
            let rows = means_by_sex(dataset);
            print_out(cli.json, &rows, |r| {
                format!(
                    "{}\tn={}\tincome={}\tjob_prestige={}\tsocioeconomic_index={}\teducation={}",
                    r.sex,
                    r.respondents,
                    fmt_opt(r.income),
                    fmt_opt(r.job_prestige),
                    fmt_opt(r.socioeconomic_index),
                    fmt_opt(r.education)
                )
            })?;
        }
        Commands::Scatter { no_points } => {
            let report = prestige_income_scatter(dataset, !no_points);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                for s in &report.series {
                    match &s.trend {
                        Some(t) => println!(
                            "{}\tn={}\t{} = {:.2} + {:.2} * {} (r2={:.3})",
                            s.sex, t.n, report.y, t.intercept, t.slope, report.x, t.r_squared
                        ),
                        None => println!("{}\tno trend", s.sex),
                    }
                }
            }
        }
        Commands::Boxplot { metric } => {
            let report = metric_by_sex(dataset, *metric);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("{}", report.label);
                for b in &report.boxes {
                    println!("{}", box_line(b));
                }
            }
        }
        Commands::Facets { bins } => {
            let bins = bins.map(usize::from).unwrap_or(config.facets.bins);
            let report = prestige_facets(dataset, bins);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                for f in &report.facets {
                    println!("{}", f.label);
                    for b in &f.boxes {
                        println!("  {}", box_line(b));
                    }
                }
            }
        }
        Commands::Dashboard => {
            let report = dashboard(dataset, config)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("{}", report.title);
                for (i, tab) in report.tabs.iter().enumerate() {
                    println!("{}. {}", i + 1, tab.label);
                }
            }
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.2}", x))
        .unwrap_or_else(|| "n/a".to_string())
}

fn box_line(b: &BoxStats) -> String {
    format!(
        "{}\tn={}\tmin={:.2}\tq1={:.2}\tmedian={:.2}\tq3={:.2}\tmax={:.2}\toutliers={}",
        b.sex,
        b.n,
        b.min,
        b.q1,
        b.median,
        b.q3,
        b.max,
        b.outliers.len()
    )
}
