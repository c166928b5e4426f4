pub mod chart;
pub mod search;
pub mod status;
pub mod upload_form;

pub use search::ColectivaSearch;
pub use upload_form::UploadForm;
