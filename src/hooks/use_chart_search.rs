use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::{balances::ChartDataset, error::AppError};
use crate::services::api::fetch_chart_data;

pub const EMPTY_QUERY_ALERT: &str = "Por favor, introduce un ID de Colectiva.";
pub const NO_DATA_ALERT: &str = "No se encontraron datos para esa Colectiva.";
const SEARCH_ERROR_PREFIX: &str = "Error al buscar datos: ";

/// Trims the search field. `None` means there is nothing to search for.
pub fn prepare_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// What a finished search leads to.
#[derive(Debug, PartialEq)]
pub enum SearchOutcome {
    Render(ChartDataset),
    Alert(String),
}

impl SearchOutcome {
    pub fn from_result(result: Result<ChartDataset, AppError>) -> Self {
        match result {
            Ok(data) if data.is_empty() => SearchOutcome::Alert(NO_DATA_ALERT.to_string()),
            Ok(data) => SearchOutcome::Render(data),
            Err(e) => SearchOutcome::Alert(format!("{SEARCH_ERROR_PREFIX}{e}")),
        }
    }
}

/// Latest dataset to chart. `generation` grows with every successful search,
/// including ones that return the same data.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SearchState {
    pub data: Option<Rc<ChartDataset>>,
    pub generation: u32,
}

impl Reducible for SearchState {
    type Action = Rc<ChartDataset>;

    fn reduce(self: Rc<Self>, data: Self::Action) -> Rc<Self> {
        Rc::new(SearchState {
            data: Some(data),
            generation: self.generation.wrapping_add(1),
        })
    }
}

/// Handle returned by `use_chart_search` hook
#[derive(Clone, PartialEq)]
pub struct ChartSearchHandle {
    /// Current text of the search field, untrimmed
    pub query: String,
    pub set_query: Callback<String>,
    pub search: Callback<()>,
    pub chart: SearchState,
}

/// Looks up balance history for the colectiva typed in the search field.
///
/// Responses are applied in arrival order: a slow earlier search can replace
/// the chart of a later one.
#[hook]
pub fn use_chart_search() -> ChartSearchHandle {
    let query = use_state(String::new);
    let chart = use_reducer(SearchState::default);

    let set_query = {
        let query = query.clone();
        Callback::from(move |value: String| query.set(value))
    };

    let search = {
        let query = query.clone();
        let chart = chart.clone();
        Callback::from(move |()| {
            let Some(colectiva) = prepare_query(&query) else {
                gloo::dialogs::alert(EMPTY_QUERY_ALERT);
                return;
            };

            let colectiva = colectiva.to_string();
            let chart = chart.clone();
            spawn_local(async move {
                match SearchOutcome::from_result(fetch_chart_data(&colectiva).await) {
                    SearchOutcome::Render(data) => chart.dispatch(Rc::new(data)),
                    SearchOutcome::Alert(message) => {
                        gloo::console::warn!(&message);
                        gloo::dialogs::alert(&message);
                    }
                }
            });
        })
    };

    ChartSearchHandle {
        query: (*query).clone(),
        set_query,
        search,
        chart: (*chart).clone(),
    }
}
