//! Column listing and summary statistics.

use chd_data::summary::summarize;
use chd_data::{Column, HousingTable};
use std::io::Write;

/// Write the six column labels, one per line.
pub fn write_columns<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for column in Column::ALL {
        writeln!(out, "{}", column)?;
    }
    Ok(())
}

/// Write a fixed-width summary table of every column.
pub fn write_summary<W: Write>(table: &HousingTable, out: &mut W) -> anyhow::Result<()> {
    let summaries = summarize(table);
    log::info!("Summarized {} columns over {} rows", summaries.len(), table.len());

    writeln!(
        out,
        "{:<20} {:>8} {:>12} {:>12} {:>12} {:>12}",
        "column", "count", "min", "max", "mean", "std"
    )?;
    for s in &summaries {
        writeln!(
            out,
            "{:<20} {:>8} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            s.column.label(),
            s.count,
            s.min,
            s.max,
            s.mean,
            s.std_dev
        )?;
    }
    Ok(())
}
