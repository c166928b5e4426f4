/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Used when the page origin cannot be resolved (no `window`).
    pub const FALLBACK_BASE_URL: &'static str = "http://localhost:5000";

    /// Endpoint receiving the monthly reconciliation spreadsheet
    pub const UPLOAD_PATH: &'static str = "/upload";

    /// Endpoint serving balance history for one colectiva
    pub const DATA_PATH: &'static str = "/get_data";

    /// Query parameter carrying the colectiva id
    pub const COLECTIVA_PARAM: &'static str = "colectiva";

    /// DOM id of the chart mount point
    pub const CHART_ID: &'static str = "trend-chart";

    /// Fallback chart size used when the container has not been laid out yet
    pub const CHART_FALLBACK_WIDTH: u32 = 800;
    pub const CHART_FALLBACK_HEIGHT: u32 = 400;

    /// Delay before redrawing the chart after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;
}
