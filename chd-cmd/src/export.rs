//! JSON export of chart specifications.

use chd_charts::{update_histogram, update_scatter, ChartSpec};
use chd_data::{Column, HousingTable};
use std::io::Write;

fn write_document<S: ChartSpec, W: Write>(chart: &S, pretty: bool, out: &mut W) -> anyhow::Result<()> {
    let document = chart.to_document()?;
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &document)?;
    } else {
        serde_json::to_writer(&mut *out, &document)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn write_scatter<W: Write>(
    table: &HousingTable,
    x: Column,
    y: Column,
    pretty: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let chart = update_scatter(table, x, y);
    log::info!("Exporting \"{}\" ({} points)", chart.title, chart.points.len());
    write_document(&chart, pretty, out)
}

pub fn write_histogram<W: Write>(
    table: &HousingTable,
    feature: Column,
    pretty: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    let chart = update_histogram(table, feature);
    log::info!("Exporting \"{}\" ({} buckets)", chart.title, chart.buckets.len());
    write_document(&chart, pretty, out)
}
