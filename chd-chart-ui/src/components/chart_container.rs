//! Chart placeholder with a first-render overlay.

use crate::state::ChartPhase;
use chd_charts::layout::GraphSpec;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Placeholder id and height from the layout
    pub graph: GraphSpec,
    /// Overlay a message until the first render is queued
    #[props(default = ChartPhase::AwaitingFirstRender)]
    pub phase: ChartPhase,
}

/// A fixed-height div that D3.js renders into.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%; background: rgb(17,17,17);",
        props.graph.height_px
    );

    rsx! {
        div {
            style: "{style}",
            if props.phase.shows_placeholder() {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #aaa;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.graph.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
