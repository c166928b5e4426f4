use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::status::Status;
use crate::hooks::use_upload::{UploadInput, use_upload};

/// Monthly spreadsheet upload form
#[function_component(UploadForm)]
pub fn upload_form() -> Html {
    let form_ref = use_node_ref();
    let file_ref = use_node_ref();
    let month_ref = use_node_ref();
    let upload = use_upload(form_ref.clone());

    let onsubmit = {
        let submit = upload.submit.clone();
        let file_ref = file_ref.clone();
        let month_ref = month_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let file = file_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let month_date = month_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();

            submit.emit(UploadInput { file, month_date });
        })
    };

    html! {
        <>
            <form id="upload-form" class="upload-form" ref={form_ref} {onsubmit}>
                <label for="file-input">{"Archivo"}</label>
                <input type="file" id="file-input" accept=".xlsx,.xls" ref={file_ref} />
                <label for="month-date">{"Mes"}</label>
                <input type="month" id="month-date" ref={month_ref} />
                <button type="submit">{"Cargar"}</button>
            </form>
            <Status state={upload.state.clone()} />
        </>
    }
}
