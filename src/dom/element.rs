// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener <body>
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener <input> por ID (None si no existe o no es un input)
pub fn get_input_by_id(id: &str) -> Option<HtmlInputElement> {
    get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Query selector all sobre el documento
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Alternar clase; devuelve si quedó puesta
pub fn toggle_class(element: &Element, class: &str) -> Result<bool, JsValue> {
    element.class_list().toggle(class)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Mostrar u ocultar vía style.display
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    html.style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Habilitar/deshabilitar un control (button o input)
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
        return Ok(());
    }
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
        return Ok(());
    }
    if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Bloquear el scroll de la página (modal abierto)
pub fn lock_page_scroll() -> Result<(), JsValue> {
    if let Some(body) = body() {
        body.style().set_property("overflow", "hidden")?;
    }
    Ok(())
}

/// Restaurar el scroll de la página
pub fn unlock_page_scroll() -> Result<(), JsValue> {
    if let Some(body) = body() {
        body.style().remove_property("overflow")?;
    }
    Ok(())
}

/// window.alert
pub fn alert(message: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(message) {
            log::error!("❌ [DOM] alert falló: {:?}", e);
        }
    }
}

/// window.confirm (false si no hay window o falla)
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Navegar a otra URL
pub fn navigate(url: &str) -> Result<(), JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .set_href(url)
}
