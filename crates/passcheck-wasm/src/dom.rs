//! `web-sys` adapters for the form elements

use passcheck_validation::{MessageSink, StyledField};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A password `<input>`
pub struct InputField(pub HtmlInputElement);

impl StyledField for InputField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_background_color(&mut self, color: &str) {
        if let Err(err) = self.0.style().set_property("background-color", color) {
            tracing::warn!(?err, id = %self.0.id(), "failed to set background color");
        }
    }
}

/// The element showing the current message
pub struct MessageElement(pub HtmlElement);

impl MessageSink for MessageElement {
    fn set_text_color(&mut self, color: &str) {
        if let Err(err) = self.0.style().set_property("color", color) {
            tracing::warn!(?err, id = %self.0.id(), "failed to set message color");
        }
    }

    fn set_text(&mut self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

fn element_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

pub fn lookup_input(document: &Document, id: &str) -> Result<InputField, DomError> {
    element_by_id::<HtmlInputElement>(document, id, "an <input> element").map(InputField)
}

pub fn lookup_message(document: &Document, id: &str) -> Result<MessageElement, DomError> {
    element_by_id::<HtmlElement>(document, id, "an HTML element").map(MessageElement)
}
