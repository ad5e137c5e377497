// ============================================================================
// APP - Objeto único que posee los componentes de la página
// ============================================================================
// Se construye una vez al cargar; las funciones globales de lib.rs solo
// delegan en él.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::utils::Language;
use crate::views::{ConsentBanner, DashboardShell, LoginGatekeeper, Notifier};

pub struct App {
    banner: Option<Rc<ConsentBanner>>,
    gatekeeper: Option<Rc<LoginGatekeeper>>,
    // Los listeners del shell viven en el DOM; se guarda para no soltarlo
    _shell: Option<Rc<DashboardShell>>,
}

impl App {
    /// Montar los componentes presentes en la página actual
    pub fn new() -> Result<Self, JsValue> {
        let lang = Language::from_document();
        log::info!("🌐 [APP] Idioma: {}", lang.as_str());

        let banner = ConsentBanner::mount(Notifier::new(), lang)?;
        let gatekeeper = LoginGatekeeper::mount(banner.clone(), lang)?;
        let shell = DashboardShell::mount()?;

        // Un cambio de consentimiento vuelve a evaluar el botón de login
        if let (Some(banner), Some(gatekeeper)) = (&banner, &gatekeeper) {
            let gatekeeper = Rc::downgrade(gatekeeper);
            banner.set_on_change(Rc::new(move || {
                if let Some(gatekeeper) = gatekeeper.upgrade() {
                    gatekeeper.check_cookie_status();
                }
            }));
        }

        Ok(Self {
            banner,
            gatekeeper,
            _shell: shell,
        })
    }

    /// Comprobaciones de carga de página
    pub fn start(&self) {
        if let Some(banner) = &self.banner {
            banner.sync_from_server();
        }
        if let Some(gatekeeper) = &self.gatekeeper {
            gatekeeper.check_cookie_status();
        }
    }

    pub fn banner(&self) -> Option<Rc<ConsentBanner>> {
        self.banner.clone()
    }

    pub fn gatekeeper(&self) -> Option<Rc<LoginGatekeeper>> {
        self.gatekeeper.clone()
    }
}
