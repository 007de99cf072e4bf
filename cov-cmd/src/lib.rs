//! Command implementations for COV CLI.
//!
//! Offline inspection of the warehouse extracts the dashboard embeds, plus a
//! `fetch` command to refresh them from an export endpoint.

use clap::{Args, Subcommand};
use cov_core::config::DashboardConfig;
use cov_data::selection::Selection;

pub mod extract;
pub mod fetch;
pub mod report;

/// Paths to the three extracts. Files ending in `.gz` are decompressed.
#[derive(Args, Debug, Clone)]
pub struct DataFiles {
    /// State-level series CSV
    #[arg(short = 's', long, default_value = "fixtures/state_series.csv")]
    pub state_csv: String,

    /// County-level series CSV (optional)
    #[arg(short = 'c', long)]
    pub county_csv: Option<String>,

    /// Demography breakdown CSV (optional)
    #[arg(short = 'd', long)]
    pub demography_csv: Option<String>,
}

/// Location and metric overrides; unset flags fall back to the dashboard defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Location to chart ("US" is the national aggregate)
    #[arg(short = 'l', long)]
    pub location: Option<String>,

    /// Primary metric label, e.g. "cases"
    #[arg(long)]
    pub metric1: Option<String>,

    /// Secondary metric label; pass an empty string for none
    #[arg(long)]
    pub metric2: Option<String>,
}

impl SelectionArgs {
    /// Apply the overrides to the defaults and check the metric labels.
    pub fn resolve(&self) -> anyhow::Result<Selection> {
        let defaults = DashboardConfig::default();
        let config = DashboardConfig {
            default_location: self.location.clone().unwrap_or(defaults.default_location),
            default_primary: self.metric1.clone().unwrap_or(defaults.default_primary),
            default_secondary: self.metric2.clone().unwrap_or(defaults.default_secondary),
        };
        config.validate()?;
        Ok(Selection::from(&config))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the locations offered by the location picker
    Locations {
        #[command(flatten)]
        data: DataFiles,
    },

    /// Print the long-format table (date,metric,value) for a selection
    Series {
        #[command(flatten)]
        data: DataFiles,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Write the time-series chart spec as JSON
    Chart {
        #[command(flatten)]
        data: DataFiles,

        #[command(flatten)]
        selection: SelectionArgs,

        /// Output path (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Print a metric picker's options with the other picker's value disabled
    Options {
        /// Value currently held by the other picker
        #[arg(long, default_value = "")]
        other: String,
    },

    /// Print the demography breakdown as CSV
    Demography {
        #[command(flatten)]
        data: DataFiles,

        /// Only include this category, e.g. "age_group"
        #[arg(long)]
        category: Option<String>,
    },

    /// Download fresh extracts from a warehouse export endpoint
    Fetch {
        /// Base URL; each extract is fetched from `<base-url>/<file name>`
        #[arg(short = 'u', long)]
        base_url: String,

        /// Directory to write the extracts into
        #[arg(short = 'o', long, default_value = "fixtures")]
        out_dir: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Locations { data } => {
            let dataset = extract::load(&data)?;
            print!("{}", report::locations(&dataset));
            Ok(())
        }
        Command::Series { data, selection } => {
            let dataset = extract::load(&data)?;
            print!("{}", report::series_csv(&dataset, &selection.resolve()?)?);
            Ok(())
        }
        Command::Chart {
            data,
            selection,
            output,
        } => {
            let dataset = extract::load(&data)?;
            let json = report::chart_json(&dataset, &selection.resolve()?)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &json)?;
                    log::info!("[COV] chart spec written to {}", path);
                }
                None => println!("{}", json),
            }
            Ok(())
        }
        Command::Options { other } => {
            println!("{}", report::options_json(&other)?);
            Ok(())
        }
        Command::Demography { data, category } => {
            let dataset = extract::load(&data)?;
            print!("{}", report::demography_csv(&dataset, category.as_deref())?);
            Ok(())
        }
        Command::Fetch { base_url, out_dir } => fetch::run_fetch(&base_url, &out_dir).await,
    }
}
