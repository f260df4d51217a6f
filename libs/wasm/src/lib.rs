//! WASM-facing entry points for the volumetric calculator.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let liters = calculator_wasm::convert_volume_internal(1.0, "m3", "l").unwrap();
//! assert_eq!(liters, 1000.0);
//! ```

use bodies::{Body, BodyKind};
use serde::Serialize;
use units::Dimension;
use wasm_bindgen::prelude::*;

mod calculator_handle;
mod error;

pub use calculator_handle::CalculatorHandle;
pub use error::{BindingError, BindingResult};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "calculator-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub(crate) fn to_js_error(err: BindingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Converts a length between two unit codes.
///
/// # Errors
/// Returns a JavaScript error naming the invalid unit.
#[wasm_bindgen]
pub fn convert_length(value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    convert_length_internal(value, from, to).map_err(to_js_error)
}

/// Host-only twin of [`convert_length`].
pub fn convert_length_internal(value: f64, from: &str, to: &str) -> BindingResult<f64> {
    Ok(units::convert_length(value, from, to)?)
}

/// Converts an area between two unit codes (only `m2` is available).
///
/// # Errors
/// Returns a JavaScript error naming the invalid unit.
#[wasm_bindgen]
pub fn convert_area(value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    convert_area_internal(value, from, to).map_err(to_js_error)
}

/// Host-only twin of [`convert_area`].
pub fn convert_area_internal(value: f64, from: &str, to: &str) -> BindingResult<f64> {
    Ok(units::convert_area(value, from, to)?)
}

/// Converts a volume between two unit codes.
///
/// # Errors
/// Returns a JavaScript error naming the invalid unit.
#[wasm_bindgen]
pub fn convert_volume(value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
    convert_volume_internal(value, from, to).map_err(to_js_error)
}

/// Host-only twin of [`convert_volume`].
pub fn convert_volume_internal(value: f64, from: &str, to: &str) -> BindingResult<f64> {
    Ok(units::convert_volume(value, from, to)?)
}

/// Lists the units of a dimension (`"length"`, `"area"`, `"volume"`) as JSON
/// `[{"code": ..., "name": ...}]`, in menu order.
///
/// # Errors
/// Returns a JavaScript error for an unknown dimension.
#[wasm_bindgen]
pub fn unit_codes(dimension: &str) -> Result<String, JsValue> {
    unit_codes_internal(dimension).map_err(to_js_error)
}

#[derive(Serialize)]
struct UnitView {
    code: &'static str,
    name: &'static str,
}

/// Host-only twin of [`unit_codes`].
///
/// ```
/// let json = calculator_wasm::unit_codes_internal("area").unwrap();
/// assert_eq!(json, r#"[{"code":"m2","name":"Metro cuadrado"}]"#);
/// ```
pub fn unit_codes_internal(dimension: &str) -> BindingResult<String> {
    let dimension = parse_dimension(dimension)?;
    let views: Vec<UnitView> = dimension
        .table()
        .units
        .iter()
        .map(|unit| UnitView {
            code: unit.code,
            name: unit.name,
        })
        .collect();
    Ok(serde_json::to_string(&views)?)
}

fn parse_dimension(name: &str) -> BindingResult<Dimension> {
    Dimension::ALL
        .into_iter()
        .find(|dimension| dimension.as_str() == name)
        .ok_or_else(|| BindingError::UnknownDimension(name.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BodyKindView {
    id: &'static str,
    name: &'static str,
    display_name: String,
    parameters: &'static [&'static str],
}

/// Lists the available bodies as JSON, in menu order.
#[wasm_bindgen]
pub fn body_kinds() -> Result<String, JsValue> {
    body_kinds_internal().map_err(to_js_error)
}

/// Host-only twin of [`body_kinds`].
pub fn body_kinds_internal() -> BindingResult<String> {
    let views: Vec<BodyKindView> = BodyKind::ALL
        .into_iter()
        .map(|kind| {
            let body = Body::create(kind, None);
            BodyKindView {
                id: kind.id(),
                name: kind.name(),
                display_name: body.display_name(),
                parameters: body.parameter_keys(),
            }
        })
        .collect();
    Ok(serde_json::to_string(&views)?)
}

/// Formats a result for display.
#[wasm_bindgen]
pub fn format_value(value: f64) -> String {
    calculator::format_value(value)
}

#[cfg(test)]
mod tests;
