//! Dioxus RSX components rendering the dashboard layout.

mod chart_container;
mod column_dropdown;
mod dashboard_header;
mod error_display;
mod loading_spinner;

pub use chart_container::ChartContainer;
pub use column_dropdown::ColumnDropdown;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
