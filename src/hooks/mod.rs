pub mod use_chart_search;
pub mod use_upload;
