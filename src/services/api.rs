use crate::config::Config;
use crate::models::{
    balances::ChartDataset,
    error::AppError,
    upload::{ErrorBody, UploadMessage, UploadRequest},
};
use reqwest::{
    StatusCode, Url,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;

// API CONFIGURATION
/// Where the reconciliation endpoints live.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of the upload endpoint.
    pub fn upload_url(&self) -> Result<Url, AppError> {
        self.endpoint(Config::UPLOAD_PATH)
    }

    /// Absolute URL of the data endpoint with the colectiva query-encoded.
    pub fn data_url(&self, colectiva: &str) -> Result<Url, AppError> {
        let mut url = self.endpoint(Config::DATA_PATH)?;
        url.query_pairs_mut()
            .append_pair(Config::COLECTIVA_PARAM, colectiva);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| AppError::ConfigError(format!("Invalid URL {}{path}: {e}", self.base_url)))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`, defaulting to the origin the page was served from.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .or_else(page_origin)
                .unwrap_or_else(|| Config::FALLBACK_BASE_URL.to_string()),
        }
    }
}

/// `reqwest` on wasm only accepts absolute URLs, so relative endpoint paths
/// are resolved against the serving origin.
fn page_origin() -> Option<String> {
    if !cfg!(target_arch = "wasm32") {
        return None;
    }
    web_sys::window().and_then(|w| w.location().origin().ok())
}

// RESPONSE HANDLING
/// Decodes a response body: `T` on success, the server's `{error}` text otherwise.
pub fn parse_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, AppError> {
    if !status.is_success() {
        return Err(error_for_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| AppError::DecodeError(e.to_string()))
}

/// Non-OK bodies carry `{error}`; a body that does not decode reports the decode failure.
fn error_for_status(status: StatusCode, body: &str) -> AppError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => AppError::ServerError(error),
        Err(e) => AppError::DecodeError(format!("{e} (HTTP {status})")),
    }
}

/// Builds the multipart body with the `file` and `month_date` fields.
pub fn multipart_form(request: UploadRequest) -> Result<Form, AppError> {
    let mut form = Form::new();

    if let Some(file) = request.file {
        let mut part = Part::bytes(file.bytes).file_name(file.name);
        if !file.mime.is_empty() {
            part = part
                .mime_str(&file.mime)
                .map_err(|e| AppError::FileError(format!("Invalid MIME type: {e}")))?;
        }
        form = form.part("file", part);
    }

    Ok(form.text("month_date", request.month_date))
}

// CONCILIACION CLIENT
/// HTTP client for the reconciliation backend.
pub struct ConciliacionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ConciliacionClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Uploads a spreadsheet and returns the server's confirmation message.
    pub async fn upload(&self, request: UploadRequest) -> Result<String, AppError> {
        let url = self.config.upload_url()?;
        gloo::console::log!(&format!("POST {url} (month_date={})", request.month_date));

        let form = multipart_form(request)?;
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let body: UploadMessage = Self::decode(response).await?;
        Ok(body.message)
    }

    /// Fetches the balance history for one colectiva.
    pub async fn fetch_chart_data(&self, colectiva: &str) -> Result<ChartDataset, AppError> {
        let url = self.config.data_url(colectiva)?;
        gloo::console::log!(&format!("GET {url}"));

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let dataset: ChartDataset = Self::decode(response).await?;
        dataset.validate()?;
        Ok(dataset)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to read response body: {e}")))?;

        parse_response(status, &body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::NetworkError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::NetworkError(format!("Request error: {error}"))
        } else {
            AppError::NetworkError(error.to_string())
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Uploads a spreadsheet using default configuration.
pub async fn upload_statement(request: UploadRequest) -> Result<String, AppError> {
    ConciliacionClient::new()?.upload(request).await
}

/// Fetches balance history using default configuration.
pub async fn fetch_chart_data(colectiva: &str) -> Result<ChartDataset, AppError> {
    ConciliacionClient::new()?.fetch_chart_data(colectiva).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ApiConfig {
        ApiConfig::builder()
            .base_url("http://localhost:5000")
            .build()
    }

    #[test]
    fn test_config_defaults_to_fallback_off_wasm() {
        let config = ApiConfig::builder().build();
        assert_eq!(config.base_url(), Config::FALLBACK_BASE_URL);
    }

    #[test]
    fn test_upload_url_construction() {
        let url = config().upload_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/upload");
    }

    #[test]
    fn test_data_url_construction() {
        let url = config().data_url("42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/get_data?colectiva=42");
    }

    #[test]
    fn test_data_url_encodes_query() {
        let url = config().data_url("A&B=1").unwrap();
        assert_eq!(url.query(), Some("colectiva=A%26B%3D1"));
    }

    #[test]
    fn test_endpoint_ignores_base_path() {
        let config = ApiConfig::builder()
            .base_url("https://example.com/app/index.html")
            .build();
        let url = config.upload_url().unwrap();
        assert_eq!(url.as_str(), "https://example.com/upload");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ApiConfig::builder().base_url("not a url").build();
        assert!(matches!(config.upload_url(), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_error_body_is_surfaced_verbatim() {
        let err = parse_response::<UploadMessage>(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Falta el archivo o la fecha"}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Falta el archivo o la fecha");
    }

    #[test]
    fn test_non_json_error_body_reports_decode_failure() {
        let err = parse_response::<UploadMessage>(
            StatusCode::INTERNAL_SERVER_ERROR,
            "<html>Internal Server Error</html>",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::DecodeError(_)));
        assert!(err.to_string().starts_with("Failed to parse response: "));
    }

    #[test]
    fn test_ok_body_that_is_not_json() {
        let err = parse_response::<UploadMessage>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, AppError::DecodeError(_)));
    }

    #[test]
    fn test_ok_body_decodes() {
        let message: UploadMessage = parse_response(
            StatusCode::OK,
            r#"{"message": "Datos del 2025-09 guardados correctamente."}"#,
        )
        .unwrap();
        assert_eq!(message.message, "Datos del 2025-09 guardados correctamente.");
    }

    #[test]
    fn test_multipart_form_with_and_without_file() {
        let with_file = UploadRequest {
            file: Some(crate::models::upload::UploadFile {
                name: "conciliacion.xlsx".to_string(),
                mime: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                    .to_string(),
                bytes: vec![1, 2, 3],
            }),
            month_date: "2025-09".to_string(),
        };
        assert!(multipart_form(with_file).is_ok());

        let without_file = UploadRequest {
            file: None,
            month_date: String::new(),
        };
        assert!(multipart_form(without_file).is_ok());
    }

    #[test]
    fn test_multipart_form_rejects_bad_mime() {
        let request = UploadRequest {
            file: Some(crate::models::upload::UploadFile {
                name: "x".to_string(),
                mime: "not a mime".to_string(),
                bytes: vec![],
            }),
            month_date: "2025-09".to_string(),
        };
        assert!(matches!(multipart_form(request), Err(AppError::FileError(_))));
    }
}
