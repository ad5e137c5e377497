// ============================================================================
// DASHBOARD SHELL - Sidebar, menú, panel de filtros y búsqueda
// ============================================================================
// Cada binding se omite si sus elementos no están en la página.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, Node};
use crate::dom::{
    add_class, document, get_element_by_id, has_class, on_click, on_keydown,
    query_selector_all, remove_class, toggle_class,
};
use crate::utils::{
    ACTIVE_CLASS, COLLAPSED_CLASS, EXPANDED_CLASS, FILTER_BUTTON_ID, FILTER_CONTENT_ID,
    MAIN_CONTENT_ID, MENU_ITEM_SELECTOR, MENU_TOGGLE_ID, SEARCH_FORM_ID, SEARCH_INPUT_SELECTOR,
    SHOW_CLASS, SIDEBAR_ID,
};

pub struct DashboardShell {
    sidebar: Option<Element>,
    main_content: Option<Element>,
    filter_button: Option<Element>,
    filter_content: Option<Element>,
}

impl DashboardShell {
    pub fn mount() -> Result<Option<Rc<Self>>, JsValue> {
        let shell = Rc::new(Self {
            sidebar: get_element_by_id(SIDEBAR_ID),
            main_content: get_element_by_id(MAIN_CONTENT_ID),
            filter_button: get_element_by_id(FILTER_BUTTON_ID),
            filter_content: get_element_by_id(FILTER_CONTENT_ID),
        });

        let menu_items = query_selector_all(MENU_ITEM_SELECTOR)?;
        let search_inputs = query_selector_all(SEARCH_INPUT_SELECTOR)?;

        let nothing_to_bind = shell.sidebar.is_none()
            && shell.filter_content.is_none()
            && menu_items.is_empty()
            && search_inputs.is_empty();
        if nothing_to_bind {
            return Ok(None);
        }

        shell.bind_sidebar()?;
        bind_menu_items(menu_items)?;
        shell.bind_filter()?;
        bind_search(search_inputs)?;

        log::info!("✅ [SHELL] Página principal montada");
        Ok(Some(shell))
    }

    fn bind_sidebar(self: &Rc<Self>) -> Result<(), JsValue> {
        let Some(menu_toggle) = get_element_by_id(MENU_TOGGLE_ID) else {
            return Ok(());
        };
        let this = Rc::clone(self);
        on_click(&menu_toggle, move |_e| {
            if let Err(e) = this.toggle_sidebar() {
                log::error!("❌ [SHELL] Error alternando sidebar: {:?}", e);
            }
        })
    }

    /// Plegar/desplegar la sidebar; el contenido principal ocupa el hueco
    pub fn toggle_sidebar(&self) -> Result<(), JsValue> {
        let Some(sidebar) = &self.sidebar else {
            return Ok(());
        };
        let collapsed = toggle_class(sidebar, COLLAPSED_CLASS)?;
        if let Some(main_content) = &self.main_content {
            if collapsed {
                add_class(main_content, EXPANDED_CLASS)?;
            } else {
                remove_class(main_content, EXPANDED_CLASS)?;
            }
        }
        log::debug!("📐 [SHELL] Sidebar {}", if collapsed { "plegada" } else { "desplegada" });
        Ok(())
    }

    fn bind_filter(self: &Rc<Self>) -> Result<(), JsValue> {
        let (Some(button), Some(_)) = (&self.filter_button, &self.filter_content) else {
            return Ok(());
        };

        {
            let this = Rc::clone(self);
            on_click(button, move |e| {
                // Evita que el listener de document lo cierre en el mismo clic
                e.stop_propagation();
                if let Err(e) = this.toggle_filter() {
                    log::error!("❌ [SHELL] Error alternando filtros: {:?}", e);
                }
            })?;
        }

        // Clic fuera del panel: cerrar
        let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let this = Rc::clone(self);
        on_click(&document, move |e| {
            let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
            if let Err(e) = this.close_filter_unless_inside(target.as_ref()) {
                log::error!("❌ [SHELL] Error cerrando filtros: {:?}", e);
            }
        })
    }

    pub fn toggle_filter(&self) -> Result<(), JsValue> {
        if let Some(content) = &self.filter_content {
            toggle_class(content, SHOW_CLASS)?;
        }
        Ok(())
    }

    fn close_filter_unless_inside(&self, target: Option<&Node>) -> Result<(), JsValue> {
        let Some(content) = &self.filter_content else {
            return Ok(());
        };
        if !has_class(content, SHOW_CLASS) {
            return Ok(());
        }

        let inside = |element: &Option<Element>| {
            element.as_ref().map_or(false, |element| element.contains(target))
        };
        if inside(&self.filter_content) || inside(&self.filter_button) {
            return Ok(());
        }
        remove_class(content, SHOW_CLASS)
    }
}

/// Un único `.menu-item` activo a la vez
fn bind_menu_items(items: Vec<Element>) -> Result<(), JsValue> {
    let items = Rc::new(items);
    for item in items.iter() {
        let items = Rc::clone(&items);
        let selected = item.clone();
        on_click(item, move |_e| {
            let result = items
                .iter()
                .try_for_each(|other| remove_class(other, ACTIVE_CLASS))
                .and_then(|_| add_class(&selected, ACTIVE_CLASS));
            if let Err(e) = result {
                log::error!("❌ [SHELL] Error marcando menú activo: {:?}", e);
            }
        })?;
    }
    Ok(())
}

/// Enter en un `.search-input` envía #searchForm
fn bind_search(inputs: Vec<Element>) -> Result<(), JsValue> {
    for input in &inputs {
        on_keydown(input, |e| {
            if e.key() != "Enter" {
                return;
            }
            let Some(form) = get_element_by_id(SEARCH_FORM_ID)
                .and_then(|form| form.dyn_into::<HtmlFormElement>().ok())
            else {
                return;
            };
            e.prevent_default();
            if let Err(err) = form.submit() {
                log::error!("❌ [SHELL] Error enviando búsqueda: {:?}", err);
            }
        })?;
    }
    Ok(())
}
