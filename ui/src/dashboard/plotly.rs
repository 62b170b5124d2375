//! [`ChartRenderer`] backed by the page's global `Plotly`.

use super::bootstrap::ChartRenderer;
use super::figures::Figure;
use super::ChartError;

#[derive(Debug, Default, Clone, Copy)]
pub struct PlotlyRenderer;

impl ChartRenderer for PlotlyRenderer {
    fn has_target(&self, target: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(target))
                .is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = target;
            false
        }
    }

    fn render(&self, target: &str, figure: &Figure) -> Result<(), ChartError> {
        #[cfg(target_arch = "wasm32")]
        {
            new_plot(target, figure).map_err(|message| ChartError::Render {
                target: target.to_string(),
                message,
            })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = figure;
            Err(ChartError::Render {
                target: target.to_string(),
                message: "Plotly is only available in the browser".to_string(),
            })
        }
    }
}

/// `Plotly.newPlot(target, data, layout, config)`.
#[cfg(target_arch = "wasm32")]
fn new_plot(target: &str, figure: &Figure) -> Result<(), String> {
    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let plotly = Reflect::get(&js_sys::global(), &JsValue::from_str("Plotly"))
        .map_err(|_| "Plotly lookup failed".to_string())?;
    if plotly.is_undefined() {
        return Err("Plotly is not loaded".into());
    }
    let new_plot: Function = Reflect::get(&plotly, &JsValue::from_str("newPlot"))
        .map_err(|_| "Plotly.newPlot lookup failed".to_string())?
        .dyn_into()
        .map_err(|_| "Plotly.newPlot is not a function".to_string())?;

    let args = Array::of4(
        &JsValue::from_str(target),
        &to_js(&figure.data)?,
        &to_js(&figure.layout)?,
        &to_js(&figure.config)?,
    );
    Reflect::apply(&new_plot, &plotly, &args)
        .map(|_| ())
        .map_err(|err| format!("Plotly.newPlot threw: {err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn to_js<T: serde::Serialize>(value: &T) -> Result<wasm_bindgen::JsValue, String> {
    let text = serde_json::to_string(value).map_err(|err| err.to_string())?;
    js_sys::JSON::parse(&text).map_err(|_| "figure is not valid JSON".to_string())
}
