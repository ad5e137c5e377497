// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// - Listeners en elementos del DOM: el navegador los limpia al destruir el
//   elemento, closure.forget() es seguro.
// - Listeners en contenedores estables (form, modal, document): se registran
//   UNA VEZ al montar el componente. El contenido interno puede reemplazarse
//   sin volver a registrar nada (delegación con `closest`).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, InputEvent, KeyboardEvent, MouseEvent};

/// Listener genérico sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    target.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para keydown (Escape, Enter...)
pub fn on_keydown<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(KeyboardEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(KeyboardEvent)>);
    target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para submit de formularios
pub fn on_submit<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    on_event(target, "submit", handler)
}

/// Delegación: elemento más cercano al target del evento que cumple `selector`
pub fn delegated_target(event: &Event, selector: &str) -> Option<Element> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// ID del elemento que originó el evento
pub fn target_id(event: &Event) -> Option<String> {
    event
        .target()?
        .dyn_into::<Element>()
        .ok()
        .map(|element| element.id())
}
