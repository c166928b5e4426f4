use crate::hooks::use_upload::UploadState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: UploadState,
}

/// Status region of the upload form
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let state = &props.state;

    html! {
        <div id="status-message" class={state.class()} role="status">
            if state.is_processing() {
                <div class="spinner"></div>
            }
            {state.text()}
        </div>
    }
}
