use crate::domain::records::Record;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gss-explorer",
    version,
    about = "Explore the GSS 2018 gender income gap"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dataset source (local csv path or http(s) url); overrides the config file"
    )]
    pub source: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/gss-explorer/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Never fetch; serve remote sources from the cache"
    )]
    pub offline: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download a remote dataset into the local cache
    Fetch,
    /// Row count, null counts and category levels of the loaded dataset
    Describe,
    /// Selectable feature and group dimensions
    Catalog,
    /// Mean income, prestige, socioeconomic index and education by sex
    Summary,
    /// Income against occupational prestige with a trend line per sex
    Scatter {
        #[arg(long, default_value_t = false)]
        no_points: bool,
    },
    /// Box statistics of a metric by sex
    Boxplot {
        #[arg(long, value_enum, default_value_t = Metric::Income)]
        metric: Metric,
    },
    /// Income by sex within occupational prestige bins
    Facets {
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        bins: Option<u16>,
    },
    /// Cross-tabulate one opinion question against one demographic
    Crosstab {
        #[arg(long)]
        feature: Option<String>,
        #[arg(long)]
        group: Option<String>,
    },
    /// Read `feature group` selections from stdin, one result per line
    Explore,
    /// Every dashboard tab in one document
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Metric {
    Income,
    JobPrestige,
}

impl Metric {
    pub fn column(self) -> &'static str {
        match self {
            Metric::Income => "income",
            Metric::JobPrestige => "job_prestige",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Income => "Income",
            Metric::JobPrestige => "Occupational Prestige",
        }
    }

    pub fn value(self, record: &Record) -> Option<f64> {
        match self {
            Metric::Income => record.income,
            Metric::JobPrestige => record.job_prestige,
        }
    }
}
