//! Fixed user-facing copy.

/// Page title shown in the header.
pub const APP_TITLE: &str = "🚀 Barebones App";
/// Subtitle under the page title.
pub const APP_SUBTITLE: &str = "A simple Rust + Yew application";
/// Label preceding the health indicator.
pub const STATUS_LABEL: &str = "API Status:";
/// Footer line.
pub const FOOTER: &str = "Built with Rust + Yew";
/// Heading of the data section.
pub const DATA_HEADING: &str = "Data from API";
/// Refresh button label.
pub const REFRESH_LABEL: &str = "🔄 Refresh";
/// Health indicator before the probe resolves.
pub const HEALTH_CHECKING: &str = "checking...";
/// Marker prefixed to the reported status on a successful probe.
pub const HEALTH_OK_MARKER: &str = "✅";
/// Health indicator after any probe failure.
pub const HEALTH_UNAVAILABLE: &str = "❌ API not available";
/// Loading indicator for the data section.
pub const LOADING: &str = "Loading...";
/// Banner shown after any data fetch failure.
pub const FETCH_FAILED: &str = "Failed to fetch data from API";
/// Placeholder for an empty item list.
pub const NO_DATA: &str = "No data available";
