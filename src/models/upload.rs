use serde::Deserialize;

/// A file picked in the upload form, read into memory.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Payload for `POST /upload`. Built fresh for each submission.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadRequest {
    /// `None` when nothing was selected; the server rejects that case.
    pub file: Option<UploadFile>,
    /// Raw value of the month input, e.g. `2025-09`. Not validated here.
    pub month_date: String,
}

/// Success body of `/upload`
#[derive(Deserialize, Debug)]
pub struct UploadMessage {
    pub message: String,
}

/// Failure body shared by both endpoints
#[derive(Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
