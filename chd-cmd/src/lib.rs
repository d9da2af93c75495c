//! Command implementations for the housing dashboard CLI.
//!
//! Every command reads the housing table (embedded by default, or a CSV file
//! given with `--data`) and writes JSON or plain text to the given writer.

use chd_data::{Column, HousingTable};
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub mod describe;
pub mod export;

/// Where to read the housing table from.
#[derive(Args, Debug, Clone, Default)]
pub struct DataSource {
    /// CSV file (optionally `.gz`) to use instead of the embedded dataset
    #[arg(short = 'd', long = "data")]
    pub path: Option<PathBuf>,
}

impl DataSource {
    pub fn load(&self) -> anyhow::Result<HousingTable> {
        let table = match &self.path {
            Some(path) => HousingTable::from_path(path)?,
            None => chd_data::embedded::load()?,
        };
        Ok(table)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the dataset column labels
    Columns,

    /// Print count, min, max, mean and standard deviation per column
    Describe {
        #[command(flatten)]
        source: DataSource,
    },

    /// Print the scatter plot specification as JSON
    Scatter {
        /// X-axis column
        #[arg(short = 'x', long)]
        x: Column,

        /// Y-axis column
        #[arg(short = 'y', long, default_value = "Median_House_Value")]
        y: Column,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        source: DataSource,
    },

    /// Print the histogram specification as JSON
    Histogram {
        /// Column to bucket
        #[arg(short = 'f', long)]
        feature: Column,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        source: DataSource,
    },

    /// Convert the raw census block-group file into the dashboard CSV
    Import {
        /// StatLib `cal_housing.data` file (headerless, per-block totals)
        census: PathBuf,

        /// Output CSV path; stdout when omitted
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

/// Run a command, writing its output to stdout.
pub fn run(command: Command) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_to(command, &mut out)
}

/// Run a command, writing its output to `out`.
pub fn run_to<W: Write>(command: Command, out: &mut W) -> anyhow::Result<()> {
    match command {
        Command::Columns => describe::write_columns(out),
        Command::Describe { source } => {
            let table = source.load()?;
            describe::write_summary(&table, out)
        }
        Command::Scatter { x, y, pretty, source } => {
            let table = source.load()?;
            export::write_scatter(&table, x, y, pretty, out)
        }
        Command::Histogram {
            feature,
            pretty,
            source,
        } => {
            let table = source.load()?;
            export::write_histogram(&table, feature, pretty, out)
        }
        Command::Import { census, out: dest } => {
            let raw = std::fs::read_to_string(&census)?;
            let table = chd_data::census::from_census_csv(&raw)?;
            match dest {
                Some(path) => {
                    table.write_csv(std::fs::File::create(&path)?)?;
                    log::info!("import: wrote {} rows to {}", table.len(), path.display());
                }
                None => table.write_csv(out)?,
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_writes_labelled_csv() {
        let census = std::env::temp_dir().join(format!("chd-import-{}.data", std::process::id()));
        std::fs::write(
            &census,
            "-122.23,37.88,41.0,880.0,129.0,322.0,126.0,8.3252,452600.0\n",
        )
        .unwrap();

        let mut out = Vec::new();
        run_to(Command::Import { census: census.clone(), out: None }, &mut out).unwrap();
        std::fs::remove_file(&census).unwrap();

        let table = HousingTable::from_csv(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.column(Column::HouseAge), &[41.0]);
        assert_eq!(table.column(Column::MedianHouseValue), &[4.526]);
    }

    #[test]
    fn import_of_missing_file_fails() {
        let census = PathBuf::from("/nonexistent/cal_housing.data");
        assert!(run_to(Command::Import { census, out: None }, &mut Vec::new()).is_err());
    }
}
