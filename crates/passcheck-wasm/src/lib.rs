//! Passcheck WASM
//!
//! WebAssembly bindings for the password-change form checks.
//! Paints inline feedback using the same decisions as `passcheck-validation`.
//!
//! # Example (JavaScript)
//! ```javascript
//! <form onsubmit="return validatestrongpassword() && validatepasswords()">
//! ```

pub mod dom;

use passcheck_validation::{
    check_match, CharClass, FeedbackConfig, MatchValidator, StrengthValidator,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::dom::{InputField, MessageElement};

/// Set panic hook and console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // The host page may already have installed a logger.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Parse an optional JS config object; `undefined`/`null` mean defaults
fn config_from(value: JsValue) -> Result<FeedbackConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(FeedbackConfig::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn log_lookup_failure(err: dom::DomError) -> JsValue {
    tracing::warn!(%err, "password form element lookup failed");
    err.into()
}

/// Check `#newpassword` against the composition policy and paint the result.
///
/// Element ids can be overridden through `config.elements`.
#[wasm_bindgen(js_name = validatestrongpassword)]
pub fn validate_strong_password_by_id(config: JsValue) -> Result<bool, JsValue> {
    let config = config_from(config)?;
    let document = dom::document().map_err(log_lookup_failure)?;
    let mut field =
        dom::lookup_input(&document, &config.elements.new_password).map_err(log_lookup_failure)?;
    let mut message =
        dom::lookup_message(&document, &config.elements.message).map_err(log_lookup_failure)?;

    let verdict = StrengthValidator::new(config).validate(&mut field, &mut message);
    Ok(verdict.is_valid())
}

/// Check that `#confirmpassword` equals `#newpassword` and paint the result
#[wasm_bindgen(js_name = validatepasswords)]
pub fn validate_passwords_by_id(config: JsValue) -> Result<bool, JsValue> {
    let config = config_from(config)?;
    let document = dom::document().map_err(log_lookup_failure)?;
    let new_password =
        dom::lookup_input(&document, &config.elements.new_password).map_err(log_lookup_failure)?;
    let mut confirm = dom::lookup_input(&document, &config.elements.confirm_password)
        .map_err(log_lookup_failure)?;
    let mut message =
        dom::lookup_message(&document, &config.elements.message).map_err(log_lookup_failure)?;

    let verdict = MatchValidator::new(config).validate(&new_password, &mut confirm, &mut message);
    Ok(verdict.is_valid())
}

/// Strength check against caller-supplied elements
#[wasm_bindgen(js_name = validateStrength)]
pub fn validate_strength(
    field: HtmlInputElement,
    message: HtmlElement,
    config: JsValue,
) -> Result<bool, JsValue> {
    let validator = StrengthValidator::new(config_from(config)?);
    let verdict = validator.validate(&mut InputField(field), &mut MessageElement(message));
    Ok(verdict.is_valid())
}

/// Match check against caller-supplied elements
#[wasm_bindgen(js_name = validateMatch)]
pub fn validate_match(
    new_password: HtmlInputElement,
    confirm: HtmlInputElement,
    message: HtmlElement,
    config: JsValue,
) -> Result<bool, JsValue> {
    let validator = MatchValidator::new(config_from(config)?);
    let verdict = validator.validate(
        &InputField(new_password),
        &mut InputField(confirm),
        &mut MessageElement(message),
    );
    Ok(verdict.is_valid())
}

/// Outcome of a strength check, as returned to JavaScript
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub valid: bool,
    pub too_short: bool,
    pub missing: Vec<CharClass>,
}

impl StrengthReport {
    pub fn new(password: &str, config: &FeedbackConfig) -> Self {
        match config.policy.check(password) {
            Ok(()) => Self {
                valid: true,
                too_short: false,
                missing: Vec::new(),
            },
            Err(weak) => Self {
                valid: false,
                too_short: weak.is_too_short(),
                missing: weak.missing_classes(),
            },
        }
    }
}

/// Pure strength check, no DOM access
///
/// # Returns
/// `{ valid, tooShort, missing: ["lowercase" | "uppercase" | "digit" | "special"] }`
#[wasm_bindgen(js_name = checkStrength)]
pub fn check_strength_js(password: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from(config)?;
    let report = StrengthReport::new(password, &config);
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Pure match check, no DOM access
#[wasm_bindgen(js_name = checkMatch)]
pub fn check_match_js(new_password: &str, confirmation: &str) -> bool {
    check_match(new_password, confirmation).is_ok()
}
