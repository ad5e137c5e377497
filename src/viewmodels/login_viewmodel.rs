// ============================================================================
// LOGIN VIEWMODEL - LÓGICA DEL FORMULARIO DE LOGIN
// ============================================================================
// Validación y llamadas al API; la vista decide qué hacer con el resultado.
// ============================================================================

use regex::Regex;
use crate::config::CONFIG;
use crate::models::{ConsentStatus, FormField, FormFieldError, LoginCredentials, LoginOutcome};
use crate::services::{ApiClient, ApiError};
use crate::utils::{t, t_with, Language};

lazy_static::lazy_static! {
    // Búsqueda sin anclar, igual que en el formulario del servidor
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonChange {
    Enable,
    Disable,
    /// Hay un envío en curso: el botón lo gestiona el envío
    Keep,
}

/// Cómo queda el formulario ante un estado de cookies
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GatePlan {
    pub button: ButtonChange,
    pub show_warning: bool,
}

pub fn gate_plan(status: &ConsentStatus, submitting: bool) -> GatePlan {
    if !status.allows_login() {
        return GatePlan { button: ButtonChange::Disable, show_warning: true };
    }
    GatePlan {
        button: if submitting { ButtonChange::Keep } else { ButtonChange::Enable },
        show_warning: false,
    }
}

/// Decisión previa al envío, siempre sobre un estado recién pedido
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitGate {
    Proceed,
    Blocked(ConsentStatus),
    Unreachable,
}

pub fn submit_gate(fresh: &Result<ConsentStatus, ApiError>) -> SubmitGate {
    match fresh {
        Ok(status) if status.allows_login() => SubmitGate::Proceed,
        Ok(status) => SubmitGate::Blocked(*status),
        Err(_) => SubmitGate::Unreachable,
    }
}

/// ViewModel de login - SOLO lógica
pub struct LoginViewModel {
    api_client: ApiClient,
    lang: Language,
    min_password_length: usize,
}

impl LoginViewModel {
    pub fn new(lang: Language) -> Self {
        Self {
            api_client: ApiClient::new(),
            lang,
            min_password_length: CONFIG.min_password_length,
        }
    }

    /// Consultar el estado de cookies (siempre fresco)
    pub async fn fetch_status(&self) -> Result<ConsentStatus, ApiError> {
        self.api_client.cookie_status().await
    }

    /// Validar ambos campos; nunca corta en el primer error
    pub fn validate(&self, email: &str, password: &str) -> Vec<FormFieldError> {
        let mut errors = Vec::new();

        if email.is_empty() {
            errors.push(self.field_error(FormField::Email, t("email_required", self.lang)));
        } else if !is_valid_email(email) {
            errors.push(self.field_error(FormField::Email, t("email_invalid", self.lang)));
        }

        if password.is_empty() {
            errors.push(self.field_error(FormField::Password, t("password_required", self.lang)));
        } else if password.chars().count() < self.min_password_length {
            let min = self.min_password_length.to_string();
            errors.push(self.field_error(
                FormField::Password,
                t_with("password_too_short", self.lang, &min),
            ));
        }

        errors
    }

    /// Enviar credenciales
    pub async fn submit(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, ApiError> {
        self.api_client.login(credentials).await
    }

    fn field_error(&self, field: FormField, message: String) -> FormFieldError {
        FormFieldError { field, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> LoginViewModel {
        LoginViewModel {
            api_client: ApiClient::with_base_url(""),
            lang: Language::English,
            min_password_length: 6,
        }
    }

    #[test]
    fn email_pattern_accepts_plain_addresses() {
        for email in [
            "user@example.com",
            "a@b.c",
            "first.last@mail.co.uk",
            "x@@y.z",
            "user@example.com.",
            "a@a..",
        ] {
            assert!(is_valid_email(email), "{}", email);
        }
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for email in ["", "user", "user@", "@example.com", "user@example", "user@.com", "user@example.", "a @b.c"] {
            assert!(!is_valid_email(email), "{}", email);
        }
    }

    #[test]
    fn email_pattern_is_unanchored_like_the_regex() {
        assert!(is_valid_email("contact: user@example.com"));
    }

    #[test]
    fn valid_credentials_produce_no_errors() {
        assert!(vm().validate("user@example.com", "secret").is_empty());
    }

    #[test]
    fn both_fields_are_checked_independently() {
        let errors = vm().validate("nope", "123");
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FormField::Email, FormField::Password]);
        assert_eq!(errors[0].message, "Enter a valid email");
        assert_eq!(errors[1].message, "Password must be at least 6 characters long");
    }

    #[test]
    fn empty_fields_report_required() {
        let errors = vm().validate("", "");
        assert_eq!(errors[0].message, "Email is required");
        assert_eq!(errors[1].message, "Password is required");
    }

    fn status(cookies_accepted: bool, session: bool) -> ConsentStatus {
        ConsentStatus { cookies_accepted, session, ..ConsentStatus::default() }
    }

    #[test]
    fn non_accepting_status_disables_button_and_warns() {
        for blocked in [status(false, false), status(true, false), status(false, true)] {
            let plan = gate_plan(&blocked, false);
            assert_eq!(plan.button, ButtonChange::Disable);
            assert!(plan.show_warning);
        }
    }

    #[test]
    fn accepting_status_never_enables_button_mid_submit() {
        assert_eq!(
            gate_plan(&status(true, true), false),
            GatePlan { button: ButtonChange::Enable, show_warning: false }
        );
        assert_eq!(gate_plan(&status(true, true), true).button, ButtonChange::Keep);
    }

    #[test]
    fn revoked_consent_wins_over_restored_button() {
        // Tras un envío fallido el botón se restaura y luego se vuelve a
        // consultar el estado: si se revocó mientras tanto, queda deshabilitado
        let plan = gate_plan(&status(true, false), false);
        assert_eq!(plan.button, ButtonChange::Disable);
    }

    #[test]
    fn pre_submit_check_only_trusts_the_fresh_status() {
        // Aunque la carga dijera que sí, un estado nuevo sin sesión bloquea
        let loaded = status(true, true);
        assert_eq!(gate_plan(&loaded, false).button, ButtonChange::Enable);

        let revoked = status(true, false);
        assert_eq!(submit_gate(&Ok(revoked)), SubmitGate::Blocked(revoked));
        assert_eq!(submit_gate(&Ok(loaded)), SubmitGate::Proceed);
        assert_eq!(
            submit_gate(&Err(ApiError::Network("offline".into()))),
            SubmitGate::Unreachable
        );
    }

    #[test]
    fn password_length_boundary() {
        assert_eq!(vm().validate("user@example.com", "12345").len(), 1);
        assert!(vm().validate("user@example.com", "123456").is_empty());
        // Cuenta caracteres, no bytes
        assert!(vm().validate("user@example.com", "пароль").is_empty());
    }
}
