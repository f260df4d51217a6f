//! # Calculator Handle
//!
//! WASM-friendly wrapper around a [`Calculator`] session.

use bodies::BodyKind;
use calculator::{Calculator, Results, UnitSelection};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::BindingResult;
use crate::to_js_error;

/// A calculator session owned by JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const calc = new CalculatorHandle();
/// calc.select("cube");
/// const results = JSON.parse(calc.change_value("lado", input.value));
/// volumeField.value = results.volumeText;
/// ```
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct CalculatorHandle {
    inner: Calculator,
}

/// Results as sent to JavaScript.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultsView {
    volume: f64,
    surface: f64,
    volume_text: String,
    surface_text: String,
}

#[wasm_bindgen]
impl CalculatorHandle {
    /// Creates a session with no body selected.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CalculatorHandle {
        CalculatorHandle::default()
    }

    /// Message to show while no body is selected.
    pub fn greeting(&self) -> String {
        self.inner.greeting().to_string()
    }

    /// Title for the page header.
    pub fn title(&self) -> String {
        self.inner.title().to_string()
    }

    /// Selects a body by kind (`"sphere"`) or name (`"esfera"`).
    pub fn select(&mut self, kind: &str) -> Result<(), JsValue> {
        self.select_internal(kind).map_err(to_js_error)
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Applies a parameter field and returns the results as JSON.
    pub fn change_value(&mut self, key: &str, text: &str) -> Result<String, JsValue> {
        self.change_value_internal(key, text).map_err(to_js_error)
    }

    /// Sets the input length unit and the output area/volume units.
    pub fn set_units(&mut self, length: &str, area: &str, volume: &str) -> Result<(), JsValue> {
        self.set_units_internal(length, area, volume)
            .map_err(to_js_error)
    }

    /// Current results as JSON.
    pub fn results(&self) -> Result<String, JsValue> {
        self.results_internal().map_err(to_js_error)
    }

    /// Capitalized name of the selected body.
    pub fn display_name(&self) -> Option<String> {
        self.inner.body().map(|body| body.display_name())
    }

    /// Image file name expected for the selected body, relative to the page.
    pub fn image_path(&self) -> Option<String> {
        self.inner.body().map(|body| {
            body.image_path(self.inner.images_dir())
                .to_string_lossy()
                .replace('\\', "/")
        })
    }

    /// Parameters of the selected body as a JSON array of `[key, value]`.
    pub fn parameters_json(&self) -> Result<String, JsValue> {
        self.parameters_json_internal().map_err(to_js_error)
    }
}

impl CalculatorHandle {
    /// Host-side twin of [`CalculatorHandle::select`].
    pub fn select_internal(&mut self, kind: &str) -> BindingResult<()> {
        let kind: BodyKind = kind.parse().map_err(calculator::CalculatorError::from)?;
        self.inner.select(kind);
        Ok(())
    }

    /// Host-side twin of [`CalculatorHandle::change_value`].
    pub fn change_value_internal(&mut self, key: &str, text: &str) -> BindingResult<String> {
        let results = self.inner.change_value(key, text)?;
        self.render(results)
    }

    /// Host-side twin of [`CalculatorHandle::set_units`].
    pub fn set_units_internal(
        &mut self,
        length: &str,
        area: &str,
        volume: &str,
    ) -> BindingResult<()> {
        self.inner.set_units(UnitSelection::new(length, area, volume))?;
        Ok(())
    }

    /// Host-side twin of [`CalculatorHandle::results`].
    pub fn results_internal(&self) -> BindingResult<String> {
        let results = self.inner.results()?;
        self.render(results)
    }

    /// Host-side twin of [`CalculatorHandle::parameters_json`].
    pub fn parameters_json_internal(&self) -> BindingResult<String> {
        let parameters = self
            .inner
            .body()
            .map(|body| body.parameters())
            .unwrap_or_default();
        Ok(serde_json::to_string(&parameters)?)
    }

    fn render(&self, results: Results) -> BindingResult<String> {
        let text = results.format(self.inner.config());
        let view = ResultsView {
            volume: results.volume,
            surface: results.surface,
            volume_text: text.volume,
            surface_text: text.surface,
        };
        Ok(serde_json::to_string(&view)?)
    }
}
