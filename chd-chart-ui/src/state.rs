//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use chd_charts::DashboardLayout;
use chd_data::{Column, HousingTable};
use dioxus::prelude::*;
use std::rc::Rc;

/// Lifecycle of one chart placeholder, as seen from the Rust side.
///
/// Rendering is fire-and-forget: `js_bridge` queues a D3 call that runs once
/// D3 and the container exist, and nothing reports back when it draws.
/// `Rendered` therefore means "a render for the current selection has been
/// handed to the bridge", not "pixels are on screen". The container overlay
/// sits above the chart div, so it is only dropped once a render is queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPhase {
    /// No render queued yet.
    AwaitingFirstRender,
    /// A render for the current selection has been queued with the bridge.
    Rendered,
}

impl ChartPhase {
    /// Phase after an attempt to queue a render. A failed attempt (the chart
    /// could not be serialized) leaves the phase unchanged.
    pub fn after_render(self, queued: bool) -> Self {
        if queued {
            ChartPhase::Rendered
        } else {
            self
        }
    }

    /// Whether the "Loading chart..." overlay should be shown.
    pub fn shows_placeholder(self) -> bool {
        self == ChartPhase::AwaitingFirstRender
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Housing table (None until loaded). Read-only once set.
    pub table: Signal<Option<Rc<HousingTable>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Scatter plot X column
    pub x_axis: Signal<Column>,
    /// Scatter plot Y column
    pub y_axis: Signal<Column>,
    /// Histogram column
    pub histogram_feature: Signal<Column>,
    pub scatter_phase: Signal<ChartPhase>,
    pub histogram_phase: Signal<ChartPhase>,
}

impl AppState {
    /// Create a new AppState with selections taken from the layout defaults.
    pub fn new() -> Self {
        let layout = DashboardLayout::california_housing();
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            x_axis: Signal::new(layout.x_axis.default),
            y_axis: Signal::new(layout.y_axis.default),
            histogram_feature: Signal::new(layout.histogram_feature.default),
            scatter_phase: Signal::new(ChartPhase::AwaitingFirstRender),
            histogram_phase: Signal::new(ChartPhase::AwaitingFirstRender),
        }
    }

    /// The selection signal bound to a dropdown id, if any.
    pub fn selection(&self, dropdown_id: &str) -> Option<Signal<Column>> {
        match dropdown_id {
            chd_charts::layout::X_AXIS_DROPDOWN => Some(self.x_axis),
            chd_charts::layout::Y_AXIS_DROPDOWN => Some(self.y_axis),
            chd_charts::layout::HISTOGRAM_DROPDOWN => Some(self.histogram_feature),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_render_leaves_placeholder() {
        let phase = ChartPhase::AwaitingFirstRender;
        assert!(phase.shows_placeholder());
        let phase = phase.after_render(true);
        assert_eq!(phase, ChartPhase::Rendered);
        assert!(!phase.shows_placeholder());
    }

    #[test]
    fn failed_render_keeps_phase() {
        assert_eq!(
            ChartPhase::AwaitingFirstRender.after_render(false),
            ChartPhase::AwaitingFirstRender
        );
        assert_eq!(ChartPhase::Rendered.after_render(false), ChartPhase::Rendered);
    }

    #[test]
    fn rendered_is_terminal() {
        assert_eq!(ChartPhase::Rendered.after_render(true), ChartPhase::Rendered);
    }
}
