// ============================================================================
// NOTIFICATIONS - Toasts con ciclo de vida propio
// ============================================================================
// append -> +10ms clase "show" -> +3000ms sin "show" -> +300ms remove().
// Cada toast tiene sus propios timers: sin cola ni deduplicación.
// ============================================================================

use wasm_bindgen::prelude::*;
use gloo_timers::callback::Timeout;
use crate::config::CONFIG;
use crate::dom::{add_class, body, remove_class, ElementBuilder};
use crate::models::{Notification, NotificationSchedule};
use crate::utils::SHOW_CLASS;

#[derive(Clone, Copy)]
pub struct Notifier {
    schedule: NotificationSchedule,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            schedule: NotificationSchedule::from(&CONFIG.notification),
        }
    }

    /// Mostrar una notificación; los errores de DOM solo se registran
    pub fn notify(&self, notification: Notification) {
        if let Err(e) = self.show(&notification) {
            log::error!("❌ [NOTIFY] No se pudo mostrar \"{}\": {:?}", notification.message, e);
        }
    }

    fn show(&self, notification: &Notification) -> Result<(), JsValue> {
        let body = body().ok_or_else(|| JsValue::from_str("No body"))?;

        let node = ElementBuilder::new("div")?
            .class(&format!("notification {}", notification.kind.css_class()))
            .attr("role", "status")?
            .text(&notification.message)
            .build();
        body.append_child(&node)?;

        log::debug!("🔔 [NOTIFY] {:?}: {}", notification.kind, notification.message);

        {
            let node = node.clone();
            Timeout::new(self.schedule.show_at, move || {
                if let Err(e) = add_class(&node, SHOW_CLASS) {
                    log::warn!("⚠️ [NOTIFY] add_class falló: {:?}", e);
                }
            })
            .forget();
        }
        {
            let node = node.clone();
            Timeout::new(self.schedule.hide_at, move || {
                if let Err(e) = remove_class(&node, SHOW_CLASS) {
                    log::warn!("⚠️ [NOTIFY] remove_class falló: {:?}", e);
                }
            })
            .forget();
        }
        Timeout::new(self.schedule.remove_at, move || node.remove()).forget();

        Ok(())
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
