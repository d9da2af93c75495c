//! Page heading: centered title and description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    rsx! {
        div {
            style: "text-align: center; margin: 20px 0 12px 0;",
            h1 {
                style: "margin: 0 0 8px 0;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; color: #555;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
