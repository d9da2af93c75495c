//! Dropdown for picking a dataset column.

use crate::state::AppState;
use chd_charts::layout::DropdownSpec;
use chd_data::Column;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ColumnDropdownProps {
    pub spec: DropdownSpec,
}

/// Renders a layout dropdown and writes the selection bound to its id.
///
/// The select is never clearable: it has no empty option, and every option
/// value is a column label, so the change handler only ever sees known columns.
#[component]
pub fn ColumnDropdown(props: ColumnDropdownProps) -> Element {
    let state = use_context::<AppState>();
    let spec = props.spec;
    let Some(mut selection) = state.selection(spec.id) else {
        log::warn!("dropdown {} has no bound selection", spec.id);
        return rsx! {};
    };
    let selected = selection();
    let id = spec.id;

    let on_change = move |evt: Event<FormData>| {
        match evt.value().parse::<Column>() {
            Ok(column) => {
                log::info!("{}: selected {}", id, column);
                selection.set(column);
            }
            Err(e) => log::warn!("{}: ignoring selection: {}", id, e),
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{spec.id}",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{spec.label}"
            }
            select {
                id: "{spec.id}",
                style: "width: 100%; padding: 6px;",
                onchange: on_change,
                for opt in spec.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
