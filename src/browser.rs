//! Browser access: request cookies and submitted form fields

use todo_board_core::name_field;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlFormElement, HtmlInputElement, SubmitEvent};

/// Cookie header of the current page, empty when unavailable
pub fn document_cookie() -> String {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .unwrap_or_default()
}

/// Value of the submitted form's `name` input, or `""`
pub fn submitted_name(ev: &SubmitEvent) -> String {
    let Some(form) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
    else {
        return String::new();
    };

    let elements = form.elements();
    let fields: Vec<(String, String)> = (0..elements.length())
        .filter_map(|i| elements.item(i))
        .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| (input.name(), input.value()))
        .collect();

    name_field(fields.iter().map(|(key, value)| (key.as_str(), value.as_str())))
}
