use charming::{
    Chart as CharmingChart, Echarts,
    component::{Axis, Grid, Legend, Title},
    datatype::CompositeValue,
    element::{AxisType, ItemStyle, LineStyle, TextStyle, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};
use yew::prelude::*;

use crate::config::Config;
use crate::models::{balances::ChartDataset, error::AppError};
use crate::utils::debounce::create_debounced_resize_listener;

const TITLE_PREFIX: &str = "Evolución de Saldos para Colectiva: ";

/// ECharts leaves a gap in the line at this value.
const MISSING_VALUE: &str = "-";

/// One plotted line.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSpec {
    pub label: &'static str,
    pub color: &'static str,
    pub values: Vec<Option<f64>>,
}

impl SeriesSpec {
    fn points(&self) -> Vec<CompositeValue> {
        self.values
            .iter()
            .map(|v| match v {
                Some(value) => CompositeValue::from(*value),
                None => CompositeValue::from(MISSING_VALUE),
            })
            .collect()
    }
}

/// Everything needed to draw the balance trend, independent of the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TrendChart {
    pub title: String,
    pub labels: Vec<String>,
    pub series: [SeriesSpec; 2],
}

impl TrendChart {
    /// `colectiva` is the search field's value at render time, not the one
    /// that produced `data`.
    pub fn new(data: &ChartDataset, colectiva: &str) -> Self {
        Self {
            title: format!("{TITLE_PREFIX}{colectiva}"),
            labels: data.labels.clone(),
            series: [
                SeriesSpec {
                    label: "Saldo Contabilidad",
                    color: "rgb(75, 192, 192)",
                    values: data.saldo_contabilidad.clone(),
                },
                SeriesSpec {
                    label: "Saldo Conciliado",
                    color: "rgb(255, 99, 132)",
                    values: data.saldo_conciliado.clone(),
                },
            ],
        }
    }

    pub fn to_charming(&self) -> CharmingChart {
        let chart = CharmingChart::new()
            .title(
                Title::new()
                    .text(self.title.as_str())
                    .left("center")
                    .text_style(TextStyle::new().font_size(16)),
            )
            .legend(Legend::new().top("8%"))
            .tooltip(Tooltip::new().trigger(Trigger::Axis))
            .grid(Grid::new().top("18%").contain_label(true))
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(self.labels.clone()),
            )
            .y_axis(Axis::new().type_(AxisType::Value));

        self.series.iter().fold(chart, |chart, s| {
            chart.series(
                Line::new()
                    .name(s.label)
                    .data(s.points())
                    .smooth(true)
                    .line_style(LineStyle::new().color(s.color))
                    .item_style(ItemStyle::new().color(s.color)),
            )
        })
    }
}

/// Something that can put a chart on screen and take it down again.
pub trait ChartBackend {
    type Handle;

    fn draw(&mut self, chart: &TrendChart) -> Result<Self::Handle, AppError>;
    fn dispose(&mut self, handle: Self::Handle);
}

/// Owns the single live chart. A new chart is only drawn after the previous
/// one has been disposed, so the canvas never hosts two instances.
pub struct ChartSlot<B: ChartBackend> {
    backend: B,
    current: Option<B::Handle>,
    last: Option<TrendChart>,
}

impl<B: ChartBackend> ChartSlot<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: None,
            last: None,
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Disposes the live chart, if any, then draws `chart`.
    pub fn replace(&mut self, chart: TrendChart) -> Result<(), AppError> {
        self.dispose();
        let handle = self.backend.draw(&chart)?;
        self.current = Some(handle);
        self.last = Some(chart);
        Ok(())
    }

    /// Draws the last chart again, e.g. after the container was resized.
    pub fn redraw(&mut self) -> Result<(), AppError> {
        match self.last.clone() {
            Some(chart) => self.replace(chart),
            None => Ok(()),
        }
    }

    pub fn dispose(&mut self) {
        if let Some(handle) = self.current.take() {
            self.backend.dispose(handle);
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = echarts, js_name = dispose)]
    fn dispose_echarts(chart: &JsValue);
}

/// Draws through ECharts into the element with the given id.
pub struct EchartsBackend {
    element_id: &'static str,
}

impl EchartsBackend {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    fn container_size(&self) -> (u32, u32) {
        let size = gloo::utils::document()
            .get_element_by_id(self.element_id)
            .and_then(|el| el.parent_element())
            .map(|parent| {
                (
                    parent.client_width().cast_unsigned(),
                    parent.client_height().cast_unsigned(),
                )
            });

        match size {
            Some((w, h)) if w > 0 && h > 0 => (w, h),
            _ => (
                Config::CHART_FALLBACK_WIDTH,
                Config::CHART_FALLBACK_HEIGHT,
            ),
        }
    }
}

impl ChartBackend for EchartsBackend {
    type Handle = Echarts;

    fn draw(&mut self, chart: &TrendChart) -> Result<Echarts, AppError> {
        let (width, height) = self.container_size();
        WasmRenderer::new(width, height)
            .render(self.element_id, &chart.to_charming())
            .map_err(|e| AppError::RenderError(format!("{e:?}")))
    }

    fn dispose(&mut self, handle: Echarts) {
        dispose_echarts(&handle);
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub data: Option<Rc<ChartDataset>>,
    /// Bumped on every successful search so identical results still redraw.
    pub generation: u32,
    /// Current text of the search field.
    pub colectiva: AttrValue,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let slot = use_mut_ref(|| ChartSlot::new(EchartsBackend::new(Config::CHART_ID)));

    {
        let slot = slot.clone();
        let data = props.data.clone();
        let colectiva = props.colectiva.clone();

        use_effect_with(props.generation, move |_| {
            if let Some(data) = data {
                let chart = TrendChart::new(&data, &colectiva);
                if let Err(e) = slot.borrow_mut().replace(chart) {
                    web_sys::console::error_1(&format!("Chart error: {e}").into());
                }
            }
            || ()
        });
    }

    {
        let slot = slot.clone();
        use_effect_with((), move |_| {
            let resize_slot = slot.clone();
            let listener = create_debounced_resize_listener(
                move || {
                    if let Err(e) = resize_slot.borrow_mut().redraw() {
                        web_sys::console::error_1(&format!("Chart error: {e}").into());
                    }
                },
                Config::RESIZE_DEBOUNCE_MS,
            );

            move || {
                drop(listener);
                slot.borrow_mut().dispose();
            }
        });
    }

    html! {
        <div class="chart-container">
            <div id={Config::CHART_ID} />
        </div>
    }
}
