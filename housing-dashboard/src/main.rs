//! California Housing Dashboard
//!
//! Scatter plot and histogram over the California housing dataset, with
//! dropdowns choosing the columns each chart plots.
//!
//! Data flow:
//! 1. `chd-data/build.rs` gzips `fixtures/california_housing.csv` at compile
//!    time and the bytes are embedded in the WASM binary.
//! 2. On mount: decompress, parse and rename the columns into a read-only
//!    `HousingTable` shared through `AppState`.
//! 3. On X/Y change: rebuild the scatter spec and re-render via D3.js.
//! 4. On histogram feature change: rebuild the histogram spec and re-render.

use chd_chart_ui::components::{
    ChartContainer, ColumnDropdown, DashboardHeader, ErrorDisplay, LoadingSpinner,
};
use chd_chart_ui::js_bridge;
use chd_chart_ui::state::AppState;
use chd_charts::{update_histogram, update_scatter, DashboardLayout};
use dioxus::prelude::*;
use std::rc::Rc;

/// D3.js v7, loaded before the chart scripts are evaluated.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("housing-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let layout = use_hook(DashboardLayout::california_housing);

    // ─── Effect 1: Load the embedded dataset once on mount ───
    use_effect(move || {
        match chd_data::embedded::load() {
            Ok(table) => {
                log::info!(
                    "Loaded housing table: {} rows, columns {:?}",
                    table.len(),
                    table.column_names()
                );
                state.table.set(Some(Rc::new(table)));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load housing dataset: {}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Scatter plot ───
    // Re-runs whenever the table, x_axis or y_axis change.
    use_effect(move || {
        let x_axis = (state.x_axis)();
        let y_axis = (state.y_axis)();
        let Some(table) = (state.table)() else {
            return;
        };

        let chart = update_scatter(&table, x_axis, y_axis);
        let queued = js_bridge::render_scatter_chart(chd_charts::layout::SCATTER_GRAPH, &chart);
        let current = *state.scatter_phase.peek();
        let next = current.after_render(queued);
        if next != current {
            state.scatter_phase.set(next);
        }
    });

    // ─── Effect 3: Histogram ───
    use_effect(move || {
        let feature = (state.histogram_feature)();
        let Some(table) = (state.table)() else {
            return;
        };

        let chart = update_histogram(&table, feature);
        let queued = js_bridge::render_histogram_chart(chd_charts::layout::HISTOGRAM_GRAPH, &chart);
        let current = *state.histogram_phase.peek();
        let next = current.after_render(queued);
        if next != current {
            state.histogram_phase.set(next);
        }
    });

    // ─── Render ───
    rsx! {
        document::Script { src: D3_SRC }

        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px 16px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardHeader {
                title: layout.title.to_string(),
                subtitle: layout.subtitle.to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; margin-bottom: 24px;",
                    div {
                        style: "flex: 0 0 33%;",
                        ColumnDropdown { spec: layout.x_axis.clone() }
                    }
                    div {
                        style: "flex: 0 0 33%;",
                        ColumnDropdown { spec: layout.y_axis.clone() }
                    }
                }

                ChartContainer {
                    graph: layout.scatter.clone(),
                    phase: (state.scatter_phase)(),
                }

                div {
                    style: "margin-top: 24px;",
                    ColumnDropdown { spec: layout.histogram_feature.clone() }
                    ChartContainer {
                        graph: layout.histogram.clone(),
                        phase: (state.histogram_phase)(),
                    }
                }
            }
        }
    }
}
