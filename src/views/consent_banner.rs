// ============================================================================
// CONSENT BANNER - Modal de cookies
// ============================================================================
// Dueño de los nodos del modal y de su máquina de estados. Los listeners se
// registran una sola vez en mount(); las funciones globales de lib.rs solo
// delegan aquí.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement};
use crate::config::CONFIG;
use crate::dom::{
    add_class, alert, confirm, document, get_element_by_id, has_class, lock_page_scroll,
    on_click, on_keydown, remove_class, set_disabled, unlock_page_scroll,
};
use crate::models::{ConsentAction, ConsentOutcome, ConsentSelection, ConsentStatus};
use crate::state::{ModalEvent, ModalState};
use crate::utils::{
    t, Language, ACTIVE_CLASS, CLOSING_CLASS, COOKIE_MODAL_ID, FUNCTIONAL_TOGGLE_ID,
    LOGIN_FORM_ID, MODAL_BACKDROP_SELECTOR, MODAL_DIALOG_SELECTOR, SESSION_TOGGLE_ID,
};
use crate::viewmodels::{plan_outcome, plan_selection, ConsentViewModel, SelectionPlan};
use crate::views::Notifier;

pub struct ConsentBanner {
    modal: Element,
    functional_toggle: Option<HtmlInputElement>,
    session_toggle: Option<HtmlInputElement>,
    state: RefCell<ModalState>,
    /// Ticket del último cierre animado
    close_ticket: Cell<u32>,
    vm: ConsentViewModel,
    notifier: Notifier,
    lang: Language,
    on_change: RefCell<Option<Rc<dyn Fn()>>>,
}

impl ConsentBanner {
    /// Montar sobre #cookieModal; None si la página no tiene modal
    pub fn mount(notifier: Notifier, lang: Language) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(modal) = get_element_by_id(COOKIE_MODAL_ID) else {
            log::debug!("🍪 [CONSENT] Página sin #{}, banner desactivado", COOKIE_MODAL_ID);
            return Ok(None);
        };

        // El servidor puede renderizar el modal ya visible
        let initial = if has_class(&modal, ACTIVE_CLASS) {
            ModalState::Visible
        } else {
            ModalState::Hidden
        };

        let banner = Rc::new(Self {
            functional_toggle: find_toggle(&modal, FUNCTIONAL_TOGGLE_ID)?,
            session_toggle: find_toggle(&modal, SESSION_TOGGLE_ID)?,
            modal,
            state: RefCell::new(initial),
            close_ticket: Cell::new(0),
            vm: ConsentViewModel::new(),
            notifier,
            lang,
            on_change: RefCell::new(None),
        });
        banner.bind()?;

        log::info!("✅ [CONSENT] Banner montado (estado inicial: {:?})", initial);
        Ok(Some(banner))
    }

    fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        if let Some(backdrop) = self.modal.query_selector(MODAL_BACKDROP_SELECTOR)? {
            let this = Rc::clone(self);
            on_click(&backdrop, move |_e| this.close())?;
        }

        // Los clics dentro del diálogo no deben llegar al backdrop
        if let Some(dialog) = self.modal.query_selector(MODAL_DIALOG_SELECTOR)? {
            on_click(&dialog, |e| e.stop_propagation())?;
        }

        let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let this = Rc::clone(self);
        on_keydown(&document, move |e| {
            if e.key() == "Escape" && this.is_open() {
                this.close();
            }
        })?;

        Ok(())
    }

    /// Listener para cambios de consentimiento confirmados por el servidor
    pub fn set_on_change(&self, listener: Rc<dyn Fn()>) {
        *self.on_change.borrow_mut() = Some(listener);
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    fn transition(&self, event: ModalEvent) -> (ModalState, ModalState) {
        let mut state = self.state.borrow_mut();
        let previous = *state;
        *state = previous.next(event);
        (previous, *state)
    }

    /// Abrir el modal y refrescar los toggles con el estado del servidor
    pub fn open(self: &Rc<Self>) {
        self.show();

        let this = Rc::clone(self);
        spawn_local(async move {
            match this.vm.fetch_status().await {
                Ok(status) if status.cookies_accepted => this.apply_toggles(&status),
                Ok(_) => {}
                Err(e) => log::warn!("⚠️ [CONSENT] No se pudo refrescar el estado al abrir: {}", e),
            }
        });
    }

    fn show(&self) {
        self.transition(ModalEvent::Open);
        let result = remove_class(&self.modal, CLOSING_CLASS)
            .and_then(|_| add_class(&self.modal, ACTIVE_CLASS))
            .and_then(|_| lock_page_scroll());
        if let Err(e) = result {
            log::error!("❌ [CONSENT] Error abriendo modal: {:?}", e);
        }
    }

    /// Cerrar con animación: "closing" y, tras la animación, fuera "active"
    pub fn close(self: &Rc<Self>) {
        let ticket = self.close_ticket.get().wrapping_add(1);
        let (previous, next) = self.transition(ModalEvent::Close { ticket });
        if previous == next {
            return;
        }
        self.close_ticket.set(ticket);

        if let Err(e) = add_class(&self.modal, CLOSING_CLASS) {
            log::error!("❌ [CONSENT] Error cerrando modal: {:?}", e);
        }

        let this = Rc::clone(self);
        Timeout::new(CONFIG.modal_close_animation_ms, move || this.finish_close(ticket)).forget();
    }

    fn finish_close(&self, ticket: u32) {
        let (previous, next) = self.transition(ModalEvent::AnimationDone { ticket });
        if previous == next {
            // Se reabrió durante la animación o el timer es de un cierre anterior
            return;
        }
        self.clear_visibility();
    }

    /// Ocultar sin animación
    fn dismiss(&self) {
        self.transition(ModalEvent::Dismiss);
        self.clear_visibility();
    }

    fn clear_visibility(&self) {
        let result = remove_class(&self.modal, ACTIVE_CLASS)
            .and_then(|_| remove_class(&self.modal, CLOSING_CLASS))
            .and_then(|_| unlock_page_scroll());
        if let Err(e) = result {
            log::error!("❌ [CONSENT] Error ocultando modal: {:?}", e);
        }
    }

    /// Carga de página: ocultar si ya hay consentimiento, abrir si no
    pub fn sync_from_server(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move {
            match this.vm.fetch_status().await {
                Ok(status) if status.cookies_accepted => {
                    log::info!("🍪 [CONSENT] Consentimiento ya dado: {:?}", status);
                    this.dismiss();
                    this.apply_toggles(&status);
                }
                Ok(_) => {
                    log::info!("🍪 [CONSENT] Sin consentimiento, mostrando banner");
                    this.show();
                }
                Err(e) => {
                    // Se deja el modal como venga en el markup
                    log::error!("❌ [CONSENT] Error obteniendo estado de cookies: {}", e);
                }
            }
        });
    }

    fn apply_toggles(&self, status: &ConsentStatus) {
        let locked = status.toggles_locked();
        let toggles = [
            (&self.functional_toggle, status.functional),
            (&self.session_toggle, status.session),
        ];
        for (toggle, checked) in toggles {
            if let Some(toggle) = toggle {
                toggle.set_checked(checked);
                if let Err(e) = set_disabled(toggle, locked) {
                    log::warn!("⚠️ [CONSENT] No se pudo bloquear toggle: {:?}", e);
                }
            }
        }
    }

    fn read_selection(&self) -> ConsentSelection {
        let checked = |toggle: &Option<HtmlInputElement>| toggle.as_ref().map_or(false, |t| t.checked());
        ConsentSelection {
            functional: checked(&self.functional_toggle),
            session: checked(&self.session_toggle),
        }
    }

    pub fn accept_all(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = this.vm.accept_all().await;
            this.apply_outcome(ConsentAction::AcceptAll, outcome);
        });
    }

    pub fn accept_selected(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move {
            match plan_selection(this.read_selection()) {
                SelectionPlan::Submit(selection) => {
                    let outcome = this.vm.accept_selected(selection).await;
                    this.apply_outcome(ConsentAction::AcceptSelected, outcome);
                }
                SelectionPlan::ConfirmRejectAll => {
                    if confirm(&t("confirm_reject_all", this.lang)) {
                        let outcome = this.vm.reject_all().await;
                        this.apply_outcome(ConsentAction::RejectAll, outcome);
                    } else {
                        log::info!("🍪 [CONSENT] Selección vacía, el usuario canceló");
                    }
                }
            }
        });
    }

    pub fn reject_all(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = this.vm.reject_all().await;
            this.apply_outcome(ConsentAction::RejectAll, outcome);
        });
    }

    fn apply_outcome(self: &Rc<Self>, action: ConsentAction, outcome: ConsentOutcome) {
        if let ConsentOutcome::Failed { reason } = &outcome {
            log::error!("❌ [CONSENT] {:?} falló: {}", action, reason);
        }

        let has_login_form = get_element_by_id(LOGIN_FORM_ID).is_some();
        let plan = plan_outcome(action, &outcome, has_login_form, self.lang);

        self.notifier.notify(plan.notification);
        if plan.close_modal {
            self.close();
        }
        if plan.consent_changed {
            self.emit_change();
        }
        if plan.login_notice {
            let message = t("session_required_notice", self.lang);
            Timeout::new(CONFIG.reject_alert_delay_ms, move || alert(&message)).forget();
        }
    }

    fn emit_change(&self) {
        let listener = self.on_change.borrow().clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}

fn find_toggle(modal: &Element, id: &str) -> Result<Option<HtmlInputElement>, JsValue> {
    let toggle = match modal.query_selector(&format!("#{}", id))? {
        Some(element) => Some(element),
        None => get_element_by_id(id),
    };
    Ok(toggle.and_then(|element| element.dyn_into::<HtmlInputElement>().ok()))
}
