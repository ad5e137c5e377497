// ============================================================================
// LOGIN GATEKEEPER - Formulario de login con control de cookies
// ============================================================================
// Listeners delegados en #loginForm (contenedor estable): cuando el servidor
// devuelve el formulario con errores solo se reemplaza su contenido y no hay
// que volver a registrar nada.
//
// Invariante: el botón nunca queda habilitado si el último estado conocido
// no permite cookies de sesión.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DomParser, Element, HtmlFormElement, Node, SupportedType};
use crate::dom::{
    alert, delegated_target, get_element_by_id, get_input_by_id, navigate, on_click, on_input,
    on_submit, set_disabled, set_text_content, set_visible, target_id, ElementBuilder,
};
use crate::models::{ConsentStatus, FormField, FormFieldError, LoginCredentials, LoginOutcome};
use crate::state::LoginState;
use crate::utils::{
    t, Language, COOKIE_WARNING_CLASS, COOKIE_WARNING_LINK_CLASS, EMAIL_INPUT_ID,
    FORM_OPTIONS_SELECTOR, LOGIN_BUTTON_SELECTOR, LOGIN_FORM_ID, LOGIN_FRAGMENT_SELECTOR,
    PASSWORD_INPUT_ID, REMEMBER_INPUT_ID,
};
use crate::viewmodels::{gate_plan, submit_gate, ButtonChange, LoginViewModel, SubmitGate};
use crate::views::ConsentBanner;

pub struct LoginGatekeeper {
    form: HtmlFormElement,
    state: LoginState,
    vm: LoginViewModel,
    banner: Option<Rc<ConsentBanner>>,
    lang: Language,
}

impl LoginGatekeeper {
    /// Montar sobre #loginForm; None si la página no tiene formulario
    pub fn mount(banner: Option<Rc<ConsentBanner>>, lang: Language) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(form) = get_element_by_id(LOGIN_FORM_ID) else {
            return Ok(None);
        };
        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| JsValue::from_str("#loginForm is not a <form>"))?;

        let default_label = form
            .query_selector(LOGIN_BUTTON_SELECTOR)?
            .and_then(|button| button.text_content())
            .map(|label| label.trim().to_string())
            .unwrap_or_default();

        let gatekeeper = Rc::new(Self {
            form,
            state: LoginState::new(default_label),
            vm: LoginViewModel::new(lang),
            banner,
            lang,
        });
        gatekeeper.bind()?;

        log::info!("✅ [LOGIN] Formulario montado");
        Ok(Some(gatekeeper))
    }

    fn bind(self: &Rc<Self>) -> Result<(), JsValue> {
        // Submit
        {
            let this = Rc::clone(self);
            on_submit(&self.form, move |e| {
                e.prevent_default();
                if !this.state.begin_submit() {
                    log::warn!("⚠️ [LOGIN] Envío ya en curso, ignorando");
                    return;
                }
                let this = Rc::clone(&this);
                spawn_local(async move {
                    this.handle_submit().await;
                    this.state.end_submit();
                });
            })?;
        }

        // Cada campo limpia solo su propio error
        {
            let this = Rc::clone(self);
            on_input(&self.form, move |e| {
                if let Some(field) = target_id(&e).as_deref().and_then(FormField::from_input_id) {
                    this.clear_field_error(field);
                }
            })?;
        }

        // Enlace del aviso de cookies (inyectado por nosotros)
        {
            let this = Rc::clone(self);
            let link_selector = format!(".{}", COOKIE_WARNING_LINK_CLASS);
            on_click(&self.form, move |e| {
                if delegated_target(&e, &link_selector).is_some() {
                    e.prevent_default();
                    this.open_consent_modal();
                }
            })?;
        }

        Ok(())
    }

    /// Comprobación de cookies sin bloquear (carga de página y cambios de consentimiento)
    pub fn check_cookie_status(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move { this.refresh_gate().await });
    }

    /// Si falla la consulta se deja el botón como está (fail open)
    pub async fn refresh_gate(&self) {
        match self.vm.fetch_status().await {
            Ok(status) => self.apply_status(&status),
            Err(e) => log::error!("❌ [LOGIN] Error comprobando cookies: {}", e),
        }
    }

    fn apply_status(&self, status: &ConsentStatus) {
        let plan = gate_plan(status, self.state.is_submitting());
        if plan.show_warning {
            log::warn!("🍪 [LOGIN] Cookies de sesión no permitidas: {:?}", status);
        }

        let button = match plan.button {
            ButtonChange::Enable => self.set_button_enabled(true),
            ButtonChange::Disable => self.set_button_enabled(false),
            ButtonChange::Keep => Ok(()),
        };
        let result = button.and_then(|_| {
            if plan.show_warning {
                self.ensure_warning()
            } else {
                self.remove_warning()
            }
        });

        if let Err(e) = result {
            log::error!("❌ [LOGIN] Error aplicando estado de cookies: {:?}", e);
        }
    }

    async fn handle_submit(&self) {
        // 1. El estado se vuelve a pedir: el usuario pudo cambiarlo tras el aviso
        let fresh = self.vm.fetch_status().await;
        match submit_gate(&fresh) {
            SubmitGate::Proceed => {}
            SubmitGate::Blocked(status) => {
                self.apply_status(&status);
                alert(&t("cookies_required", self.lang));
                self.open_consent_modal();
                return;
            }
            SubmitGate::Unreachable => {
                if let Err(e) = fresh {
                    log::error!("❌ [LOGIN] Error comprobando cookies antes del envío: {}", e);
                }
                alert(&t("connection_error", self.lang));
                return;
            }
        }

        // 2. Validación local
        let Some(credentials) = self.read_credentials() else {
            log::error!("❌ [LOGIN] Faltan los campos email/password");
            return;
        };

        let errors = self.vm.validate(&credentials.email, &credentials.password);
        if !errors.is_empty() {
            for error in &errors {
                self.show_field_error(error);
            }
            return;
        }
        self.clear_field_error(FormField::Email);
        self.clear_field_error(FormField::Password);

        // 3. Envío
        self.set_loading();

        match self.vm.submit(&credentials).await {
            Ok(LoginOutcome::Redirect { location }) => {
                if let Err(e) = navigate(&location) {
                    log::error!("❌ [LOGIN] No se pudo navegar a {}: {:?}", location, e);
                    alert(&t("login_error", self.lang));
                    self.finish_attempt().await;
                }
            }
            Ok(LoginOutcome::Rerendered { html }) => {
                match self.replace_form_contents(&html) {
                    Ok(true) => {}
                    Ok(false) => {
                        log::error!("❌ [LOGIN] Respuesta sin fragmento {}", LOGIN_FRAGMENT_SELECTOR);
                        alert(&t("login_error", self.lang));
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Error reemplazando formulario: {:?}", e);
                        alert(&t("login_error", self.lang));
                    }
                }
                self.finish_attempt().await;
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Error enviando login: {}", e);
                alert(&t("login_error", self.lang));
                self.finish_attempt().await;
            }
        }
    }

    /// Fin de un intento sin navegación: botón restaurado y estado re-consultado,
    /// por si el consentimiento cambió durante el POST
    async fn finish_attempt(&self) {
        self.state.end_submit();
        self.restore_button();
        self.refresh_gate().await;
    }

    fn read_credentials(&self) -> Option<LoginCredentials> {
        let email = get_input_by_id(EMAIL_INPUT_ID)?;
        let password = get_input_by_id(PASSWORD_INPUT_ID)?;
        let remember = get_input_by_id(REMEMBER_INPUT_ID)
            .map(|input| input.checked())
            .unwrap_or(false);

        Some(LoginCredentials {
            email: email.value().trim().to_string(),
            password: password.value(),
            remember,
        })
    }

    /// Copiar el contenido de `.login-form` del HTML devuelto al formulario actual
    fn replace_form_contents(&self, html: &str) -> Result<bool, JsValue> {
        let parsed = DomParser::new()?.parse_from_string(html, SupportedType::TextHtml)?;
        let Some(fragment) = parsed.query_selector(LOGIN_FRAGMENT_SELECTOR)? else {
            return Ok(false);
        };
        self.form.set_inner_html(&fragment.inner_html());
        log::info!("🔄 [LOGIN] Formulario re-renderizado por el servidor");
        Ok(true)
    }

    fn show_field_error(&self, error: &FormFieldError) {
        if let Some(span) = get_element_by_id(error.field.error_element_id()) {
            set_text_content(&span, &error.message);
            if let Err(e) = set_visible(&span, true) {
                log::warn!("⚠️ [LOGIN] No se pudo mostrar error: {:?}", e);
            }
        }
    }

    fn clear_field_error(&self, field: FormField) {
        if let Some(span) = get_element_by_id(field.error_element_id()) {
            set_text_content(&span, "");
            if let Err(e) = set_visible(&span, false) {
                log::warn!("⚠️ [LOGIN] No se pudo ocultar error: {:?}", e);
            }
        }
    }

    fn button(&self) -> Option<Element> {
        self.form.query_selector(LOGIN_BUTTON_SELECTOR).ok().flatten()
    }

    fn set_button_enabled(&self, enabled: bool) -> Result<(), JsValue> {
        match self.button() {
            Some(button) => set_disabled(&button, !enabled),
            None => Ok(()),
        }
    }

    fn set_loading(&self) {
        if let Some(button) = self.button() {
            if let Err(e) = set_disabled(&button, true) {
                log::warn!("⚠️ [LOGIN] No se pudo deshabilitar el botón: {:?}", e);
            }
            set_text_content(&button, &t("login_loading", self.lang));
        }
    }

    fn restore_button(&self) {
        if let Some(button) = self.button() {
            if let Err(e) = set_disabled(&button, false) {
                log::warn!("⚠️ [LOGIN] No se pudo habilitar el botón: {:?}", e);
            }
            set_text_content(&button, &self.state.default_label());
        }
    }

    fn ensure_warning(&self) -> Result<(), JsValue> {
        if self.form.query_selector(&format!(".{}", COOKIE_WARNING_CLASS))?.is_some() {
            return Ok(());
        }

        let text = ElementBuilder::new("span")?
            .text(&t("cookie_warning_text", self.lang))
            .build();
        let link = ElementBuilder::new("a")?
            .class(COOKIE_WARNING_LINK_CLASS)
            .attr("href", "#")?
            .text(&t("cookie_warning_link", self.lang))
            .build();
        let warning = ElementBuilder::new("div")?
            .class(COOKIE_WARNING_CLASS)
            .attr("role", "alert")?
            .child(&text)?
            .child(&link)?
            .build();

        match self.form.query_selector(FORM_OPTIONS_SELECTOR)? {
            Some(options) => {
                let anchor: &Node = &options;
                match options.parent_node() {
                    Some(parent) => parent.insert_before(&warning, Some(anchor))?,
                    None => self.form.append_child(&warning)?,
                };
            }
            None => {
                self.form.append_child(&warning)?;
            }
        }
        Ok(())
    }

    fn remove_warning(&self) -> Result<(), JsValue> {
        if let Some(warning) = self.form.query_selector(&format!(".{}", COOKIE_WARNING_CLASS))? {
            warning.remove();
        }
        Ok(())
    }

    fn open_consent_modal(&self) {
        match &self.banner {
            Some(banner) => banner.open(),
            None => log::warn!("⚠️ [LOGIN] No hay modal de cookies en la página"),
        }
    }
}
