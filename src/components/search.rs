use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::chart::Chart;
use crate::hooks::use_chart_search::use_chart_search;

/// Colectiva search bar and the trend chart it feeds
#[function_component(ColectivaSearch)]
pub fn colectiva_search() -> Html {
    let search = use_chart_search();

    let oninput = {
        let set_query = search.set_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_query.emit(input.value());
        })
    };

    let onclick = search.search.reform(|_: MouseEvent| ());

    html! {
        <>
            <div class="search-bar">
                <input
                    type="text"
                    id="colectiva-search"
                    placeholder="ID de Colectiva"
                    value={search.query.clone()}
                    {oninput}
                />
                <button id="search-btn" type="button" {onclick}>{"Buscar"}</button>
            </div>
            <Chart
                data={search.chart.data.clone()}
                generation={search.chart.generation}
                colectiva={AttrValue::from(search.query.clone())}
            />
        </>
    }
}
