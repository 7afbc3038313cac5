use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::models::{CrosstabReport, ErrorBody, ErrorOut, JsonOut};
use crate::domain::records::Dataset;
use crate::services::output::{envelope_line, error_envelope};
use crate::services::reactive::ReactiveBinding;
use std::io::{BufRead, Write};

pub fn handle_explore_commands(
    cli: &Cli,
    config: &Config,
    dataset: &Dataset,
) -> anyhow::Result<bool> {
    let binding = ReactiveBinding::new(dataset);
    match &cli.command {
        Commands::Crosstab { feature, group } => {
            let feature = feature
                .as_deref()
                .unwrap_or(&config.explore.default_feature);
            let group = group.as_deref().unwrap_or(&config.explore.default_group);
            let report = binding.report(feature, group)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                for line in crosstab_lines(&report) {
                    println!("{}", line);
                }
            }
        }
        Commands::Explore => {
            let initial = (
                config.explore.default_feature.as_str(),
                config.explore.default_group.as_str(),
            );
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_session(
                &binding,
                cli.json,
                initial,
                stdin.lock(),
                &mut stdout.lock(),
            )?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

pub fn crosstab_lines(report: &CrosstabReport) -> Vec<String> {
    let table = &report.table;
    let mut lines = vec![
        format!(
            "{} x {}\ttotal={}\tdropped={}",
            table.feature,
            table.group,
            table.total(),
            report.dropped
        ),
        report.feature_label.clone(),
    ];
    if table.is_empty() {
        lines.push("(no respondent answered both)".to_string());
    }
    for row in &table.rows {
        lines.push(format!(
            "{}\t{}\t{}",
            row.feature_value, row.group_value, row.count
        ));
    }
    lines
}

/// Splits `feature group` or `feature,group`. Blank and `#` lines are skipped.
fn parse_selection(line: &str) -> Option<Result<(&str, &str), String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    match parts.as_slice() {
        [feature, group] => Some(Ok((*feature, *group))),
        _ => Some(Err(format!(
            "expected `<feature> <group>`, got: {}",
            line
        ))),
    }
}

/// One event per input line, answered in order; the default selection is
/// answered first. Bad selections are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    binding: &ReactiveBinding<'_>,
    json: bool,
    initial: (&str, &str),
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    respond(binding, json, initial.0, initial.1, out)?;
    let mut events = 1usize;
    for line in input.lines() {
        let line = line?;
        match parse_selection(&line) {
            None => continue,
            Some(Ok((feature, group))) => respond(binding, json, feature, group, out)?,
            Some(Err(message)) => {
                let body = ErrorOut {
                    ok: false,
                    error: ErrorBody {
                        code: "MALFORMED_SELECTION".to_string(),
                        message,
                    },
                };
                if json {
                    writeln!(out, "{}", serde_json::to_string(&body)?)?;
                } else {
                    writeln!(out, "error: {}\n", body.error.message)?;
                }
            }
        }
        events += 1;
        out.flush()?;
    }
    tracing::debug!(events, "explore session ended");
    Ok(())
}

fn respond<W: Write>(
    binding: &ReactiveBinding<'_>,
    json: bool,
    feature: &str,
    group: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    match binding.report(feature, group) {
        Ok(report) if json => writeln!(out, "{}", envelope_line(&report)?)?,
        Ok(report) => {
            for line in crosstab_lines(&report) {
                writeln!(out, "{}", line)?;
            }
            writeln!(out)?;
        }
        Err(err) => {
            let err = anyhow::Error::from(err);
            if json {
                writeln!(out, "{}", serde_json::to_string(&error_envelope(&err))?)?;
            } else {
                writeln!(out, "error: {}\n", err)?;
            }
        }
    }
    Ok(())
}
