use web_sys::HtmlFormElement;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{
    error::AppError,
    upload::{UploadFile, UploadRequest},
};
use crate::services::api::upload_statement;

/// What the status region shows for the upload form.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Processing,
    Success(String),
    Error(String),
}

impl UploadState {
    pub fn from_result(result: Result<String, AppError>) -> Self {
        match result {
            Ok(message) => UploadState::Success(message),
            Err(e) => UploadState::Error(e.to_string()),
        }
    }

    /// Text for the status region
    pub fn text(&self) -> String {
        match self {
            UploadState::Idle => String::new(),
            UploadState::Processing => "Procesando...".to_string(),
            UploadState::Success(message) => message.clone(),
            UploadState::Error(message) => format!("Error: {message}"),
        }
    }

    /// CSS class for the status region
    pub fn class(&self) -> &'static str {
        match self {
            UploadState::Idle => "message",
            UploadState::Processing => "message info",
            UploadState::Success(_) => "message success",
            UploadState::Error(_) => "message error",
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, UploadState::Processing)
    }

    /// The form is only cleared after the server accepted the upload.
    pub fn clears_form(&self) -> bool {
        matches!(self, UploadState::Success(_))
    }
}

/// Raw form values captured on submit.
pub struct UploadInput {
    pub file: Option<web_sys::File>,
    pub month_date: String,
}

/// Handle returned by `use_upload` hook
#[derive(Clone, PartialEq)]
pub struct UploadHandle {
    pub state: UploadState,
    pub submit: Callback<UploadInput>,
}

/// Submits the upload form and tracks its status. `form_ref` is reset on success.
#[hook]
pub fn use_upload(form_ref: NodeRef) -> UploadHandle {
    let state = use_state(UploadState::default);

    let submit = {
        let state = state.clone();
        Callback::from(move |input: UploadInput| {
            let state = state.clone();
            let form_ref = form_ref.clone();

            state.set(UploadState::Processing);

            spawn_local(async move {
                let result = match read_upload(input).await {
                    Ok(request) => upload_statement(request).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = &result {
                    gloo::console::error!(&format!("Upload failed: {e}"));
                }

                let next = UploadState::from_result(result);
                if next.clears_form() {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                state.set(next);
            });
        })
    };

    UploadHandle {
        state: (*state).clone(),
        submit,
    }
}

async fn read_upload(input: UploadInput) -> Result<UploadRequest, AppError> {
    let file = match input.file {
        Some(raw) => {
            let file = gloo::file::File::from(raw);
            let bytes = gloo::file::futures::read_as_bytes(&file)
                .await
                .map_err(|e| AppError::FileError(e.to_string()))?;
            Some(UploadFile {
                name: file.name(),
                mime: file.raw_mime_type(),
                bytes,
            })
        }
        None => None,
    };

    Ok(UploadRequest {
        file,
        month_date: input.month_date,
    })
}
