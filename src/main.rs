use conciliacion_dashboard::components::{ColectivaSearch, UploadForm};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Conciliación Bancaria"}</h1>
            </header>

            <main class="app-main">
                <section class="upload-section">
                    <h2>{"Cargar conciliación mensual"}</h2>
                    <UploadForm />
                </section>

                <section class="chart-section">
                    <h2>{"Evolución de saldos"}</h2>
                    <ColectivaSearch />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
