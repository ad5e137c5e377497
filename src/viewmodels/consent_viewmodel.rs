// ============================================================================
// CONSENT VIEWMODEL - LÓGICA DEL BANNER DE COOKIES
// ============================================================================
// Devuelve siempre un ConsentOutcome: los errores de transporte se pliegan
// en `Failed` para que la vista trate igual ambos fallos.
// ============================================================================

use crate::models::{ConsentAction, ConsentOutcome, ConsentSelection, ConsentStatus, Notification};
use crate::services::{ApiClient, ApiError};
use crate::utils::{t, Language};

/// Qué hacer con la selección de los toggles
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectionPlan {
    /// Al menos una categoría: enviar al endpoint selectivo
    Submit(ConsentSelection),
    /// Ninguna: preguntar si se quiere rechazar todo (sin red)
    ConfirmRejectAll,
}

pub fn plan_selection(selection: ConsentSelection) -> SelectionPlan {
    if selection.is_empty() {
        SelectionPlan::ConfirmRejectAll
    } else {
        SelectionPlan::Submit(selection)
    }
}

/// Efectos de un resultado sobre el banner: siempre una única notificación
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OutcomePlan {
    pub notification: Notification,
    pub close_modal: bool,
    pub consent_changed: bool,
    /// Aviso diferido de que el login necesita cookies de sesión
    pub login_notice: bool,
}

pub fn plan_outcome(
    action: ConsentAction,
    outcome: &ConsentOutcome,
    has_login_form: bool,
    lang: Language,
) -> OutcomePlan {
    match outcome {
        ConsentOutcome::Accepted => {
            let key = match action {
                ConsentAction::AcceptAll => "consent_all_accepted",
                _ => "consent_selected_accepted",
            };
            OutcomePlan {
                notification: Notification::success(t(key, lang)),
                close_modal: true,
                consent_changed: true,
                login_notice: false,
            }
        }
        ConsentOutcome::Rejected => OutcomePlan {
            notification: Notification::info(t("consent_rejected", lang)),
            close_modal: true,
            consent_changed: true,
            login_notice: has_login_form,
        },
        // El modal queda abierto para reintentar
        ConsentOutcome::Failed { .. } => OutcomePlan {
            notification: Notification::error(t("consent_error", lang)),
            close_modal: false,
            consent_changed: false,
            login_notice: false,
        },
    }
}

/// Convertir el resultado del API en un ConsentOutcome
pub fn settle(result: Result<ConsentOutcome, ApiError>) -> ConsentOutcome {
    match result {
        Ok(outcome) => {
            if !outcome.is_success() {
                log::warn!("⚠️ [CONSENT] El servidor no confirmó el cambio: {:?}", outcome);
            }
            outcome
        }
        Err(e) => {
            log::error!("❌ [CONSENT] Error de red: {}", e);
            ConsentOutcome::Failed { reason: e.to_string() }
        }
    }
}

/// ViewModel de consentimiento - SOLO lógica
#[derive(Clone)]
pub struct ConsentViewModel {
    api_client: ApiClient,
}

impl ConsentViewModel {
    pub fn new() -> Self {
        Self {
            api_client: ApiClient::new(),
        }
    }

    pub async fn fetch_status(&self) -> Result<ConsentStatus, ApiError> {
        self.api_client.cookie_status().await
    }

    pub async fn accept_all(&self) -> ConsentOutcome {
        log::info!("🍪 [CONSENT] Aceptando todas las cookies...");
        settle(self.api_client.accept_all().await)
    }

    pub async fn accept_selected(&self, selection: ConsentSelection) -> ConsentOutcome {
        log::info!(
            "🍪 [CONSENT] Aceptando selección: functional={}, session={}",
            selection.functional,
            selection.session
        );
        settle(self.api_client.accept_selected(&selection).await)
    }

    pub async fn reject_all(&self) -> ConsentOutcome {
        log::info!("🍪 [CONSENT] Rechazando cookies opcionales...");
        settle(self.api_client.reject_all().await)
    }
}

impl Default for ConsentViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::NotificationKind;

    #[test]
    fn empty_selection_never_reaches_the_network() {
        assert_eq!(plan_selection(ConsentSelection::default()), SelectionPlan::ConfirmRejectAll);
    }

    #[test]
    fn any_enabled_category_is_submitted() {
        for (functional, session) in [(true, false), (false, true), (true, true)] {
            let selection = ConsentSelection { functional, session };
            assert_eq!(plan_selection(selection), SelectionPlan::Submit(selection));
        }
    }

    #[test]
    fn accept_all_success_closes_with_one_success_toast() {
        let plan = plan_outcome(ConsentAction::AcceptAll, &ConsentOutcome::Accepted, true, Language::English);
        assert_eq!(plan.notification, Notification::success("All cookies accepted"));
        assert!(plan.close_modal);
        assert!(plan.consent_changed);
        assert!(!plan.login_notice);
    }

    #[test]
    fn selected_success_uses_its_own_message() {
        let plan = plan_outcome(ConsentAction::AcceptSelected, &ConsentOutcome::Accepted, false, Language::English);
        assert_eq!(plan.notification.kind, NotificationKind::Success);
        assert_ne!(plan.notification.message, t("consent_all_accepted", Language::English));
    }

    #[test]
    fn failure_keeps_modal_open_with_one_error_toast() {
        let failed = ConsentOutcome::Failed { reason: "boom".to_string() };
        for action in [ConsentAction::AcceptAll, ConsentAction::AcceptSelected, ConsentAction::RejectAll] {
            let plan = plan_outcome(action, &failed, true, Language::English);
            assert_eq!(plan.notification.kind, NotificationKind::Error);
            assert!(!plan.close_modal);
            assert!(!plan.consent_changed);
            assert!(!plan.login_notice);
        }
    }

    #[test]
    fn reject_warns_about_login_only_on_login_page() {
        let on_login = plan_outcome(ConsentAction::RejectAll, &ConsentOutcome::Rejected, true, Language::English);
        assert_eq!(on_login.notification.kind, NotificationKind::Info);
        assert!(on_login.close_modal);
        assert!(on_login.login_notice);

        let elsewhere = plan_outcome(ConsentAction::RejectAll, &ConsentOutcome::Rejected, false, Language::English);
        assert!(!elsewhere.login_notice);
    }

    #[test]
    fn transport_errors_become_failures() {
        let outcome = settle(Err(ApiError::Network("connection refused".into())));
        assert_eq!(
            outcome,
            ConsentOutcome::Failed { reason: "Network error: connection refused".to_string() }
        );
        assert_eq!(settle(Ok(ConsentOutcome::Accepted)), ConsentOutcome::Accepted);
    }
}
