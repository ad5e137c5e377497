// ============================================================================
// CONSENT GATE - LOGIN + BANNER DE COOKIES (RUST + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: componentes que poseen sus nodos DOM y registran listeners
// - ViewModels: validación y decisiones, sin DOM
// - Services: SOLO comunicación API
// - State: estado local con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::app::App;
use crate::config::CONFIG;
use crate::views::{ConsentBanner, LoginGatekeeper};

// Instancia única de la app
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Consent Gate - Rust + WASM");

    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if still_loading(&document.ready_state()) {
        // Registrado una sola vez: DOMContentLoaded solo se dispara una vez
        dom::on_event(&document, "DOMContentLoaded", |_e| boot())?;
    } else {
        boot();
    }

    Ok(())
}

/// `document.readyState` es un string: "loading", "interactive" o "complete"
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn boot() {
    match App::new() {
        Ok(app) => {
            app.start();
            APP.with(|cell| *cell.borrow_mut() = Some(app));
        }
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!("❌ [APP] Error montando la app: {:?}", e)));
        }
    }
}

// Se clona el Rc para no mantener el borrow de APP durante el handler
fn current_banner() -> Option<Rc<ConsentBanner>> {
    let banner = APP.with(|cell| cell.borrow().as_ref().and_then(|app| app.banner()));
    if banner.is_none() {
        log::warn!("⚠️ [APP] No hay banner de cookies montado");
    }
    banner
}

fn current_gatekeeper() -> Option<Rc<LoginGatekeeper>> {
    let gatekeeper = APP.with(|cell| cell.borrow().as_ref().and_then(|app| app.gatekeeper()));
    if gatekeeper.is_none() {
        log::warn!("⚠️ [APP] No hay formulario de login montado");
    }
    gatekeeper
}

// ============================================================================
// FUNCIONES GLOBALES - para handlers inline del markup (onclick="...")
// ============================================================================

#[wasm_bindgen(js_name = openCookieModal)]
pub fn open_cookie_modal() {
    if let Some(banner) = current_banner() {
        banner.open();
    }
}

#[wasm_bindgen(js_name = closeCookieModal)]
pub fn close_cookie_modal() {
    if let Some(banner) = current_banner() {
        banner.close();
    }
}

#[wasm_bindgen(js_name = acceptAllCookies)]
pub fn accept_all_cookies() {
    if let Some(banner) = current_banner() {
        banner.accept_all();
    }
}

#[wasm_bindgen(js_name = acceptSelectedCookies)]
pub fn accept_selected_cookies() {
    if let Some(banner) = current_banner() {
        banner.accept_selected();
    }
}

#[wasm_bindgen(js_name = rejectAllCookies)]
pub fn reject_all_cookies() {
    if let Some(banner) = current_banner() {
        banner.reject_all();
    }
}

#[wasm_bindgen(js_name = checkCookieStatus)]
pub fn check_cookie_status() {
    if let Some(gatekeeper) = current_gatekeeper() {
        gatekeeper.check_cookie_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boots_immediately_once_the_document_is_parsed() {
        assert!(still_loading("loading"));
        assert!(!still_loading("interactive"));
        assert!(!still_loading("complete"));
    }
}
