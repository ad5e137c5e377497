// ============================================================================
// CONSENT MODELS - Estado de consentimiento y resultado de escrituras
// ============================================================================

use serde::{Deserialize, Serialize};

/// Snapshot del estado de cookies devuelto por `/api/cookie_status`.
/// Nunca se cachea: se vuelve a pedir en cada punto de decisión.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct ConsentStatus {
    #[serde(default)]
    pub cookies_accepted: bool,
    #[serde(default)]
    pub session: bool,
    #[serde(default)]
    pub functional: bool,
    #[serde(default)]
    pub all_accepted: bool,
}

impl ConsentStatus {
    /// El login solo es posible con consentimiento y cookies de sesión
    pub fn allows_login(&self) -> bool {
        self.cookies_accepted && self.session
    }

    /// Las categorías quedan bloqueadas cuando se aceptó todo
    pub fn toggles_locked(&self) -> bool {
        self.all_accepted
    }
}

/// Cuerpo de `/api/accept_selected_cookies`
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct ConsentSelection {
    pub functional: bool,
    pub session: bool,
}

impl ConsentSelection {
    pub fn is_empty(&self) -> bool {
        !self.functional && !self.session
    }
}

/// Respuesta JSON de los endpoints de escritura
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ConsentWriteResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConsentAction {
    AcceptAll,
    AcceptSelected,
    RejectAll,
}

impl ConsentAction {
    /// Valor de `status` que indica éxito para esta acción
    pub fn expected_status(&self) -> &'static str {
        match self {
            ConsentAction::AcceptAll | ConsentAction::AcceptSelected => "accepted",
            ConsentAction::RejectAll => "rejected",
        }
    }
}

/// Resultado tipado de una escritura de consentimiento
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ConsentOutcome {
    Accepted,
    Rejected,
    Failed { reason: String },
}

impl ConsentOutcome {
    /// Clasificar la respuesta del servidor según la acción enviada
    pub fn from_reply(action: ConsentAction, reply: &ConsentWriteResponse) -> Self {
        match reply.status.as_deref() {
            Some(status) if status == action.expected_status() => match action {
                ConsentAction::AcceptAll | ConsentAction::AcceptSelected => ConsentOutcome::Accepted,
                ConsentAction::RejectAll => ConsentOutcome::Rejected,
            },
            other => {
                let reason = reply.message.clone().unwrap_or_else(|| match other {
                    Some(status) => format!("unexpected status \"{}\"", status),
                    None => "response without status".to_string(),
                });
                ConsentOutcome::Failed { reason }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, ConsentOutcome::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: Option<&str>, message: Option<&str>) -> ConsentWriteResponse {
        ConsentWriteResponse {
            status: status.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn status_requires_both_consent_and_session() {
        let cases = [
            (false, false, false),
            (true, false, false),
            (false, true, false),
            (true, true, true),
        ];
        for (cookies_accepted, session, allowed) in cases {
            let status = ConsentStatus {
                cookies_accepted,
                session,
                ..Default::default()
            };
            assert_eq!(status.allows_login(), allowed, "{:?}", status);
        }
    }

    #[test]
    fn status_decodes_server_payloads() {
        let all: ConsentStatus = serde_json::from_str(
            r#"{"cookies_accepted":true,"all_accepted":true,"functional":true,"session":true}"#,
        )
        .unwrap();
        assert!(all.allows_login());
        assert!(all.toggles_locked());

        let selected: ConsentStatus = serde_json::from_str(
            r#"{"cookies_accepted":true,"all_accepted":false,"functional":true,"session":false}"#,
        )
        .unwrap();
        assert!(!selected.allows_login());
        assert!(!selected.toggles_locked());
    }

    #[test]
    fn missing_fields_read_as_false() {
        let status: ConsentStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, ConsentStatus::default());
        assert!(!status.allows_login());
    }

    #[test]
    fn selection_serializes_as_flat_pair() {
        let body = serde_json::to_value(ConsentSelection { functional: false, session: true }).unwrap();
        assert_eq!(body, serde_json::json!({"functional": false, "session": true}));
        assert!(ConsentSelection::default().is_empty());
    }

    #[test]
    fn matching_status_is_success() {
        assert_eq!(
            ConsentOutcome::from_reply(ConsentAction::AcceptAll, &reply(Some("accepted"), None)),
            ConsentOutcome::Accepted
        );
        assert_eq!(
            ConsentOutcome::from_reply(ConsentAction::AcceptSelected, &reply(Some("accepted"), None)),
            ConsentOutcome::Accepted
        );
        assert_eq!(
            ConsentOutcome::from_reply(ConsentAction::RejectAll, &reply(Some("rejected"), None)),
            ConsentOutcome::Rejected
        );
    }

    #[test]
    fn mismatched_status_is_failure_with_server_message() {
        let outcome = ConsentOutcome::from_reply(
            ConsentAction::AcceptSelected,
            &reply(Some("rejected"), Some("nothing selected")),
        );
        assert_eq!(outcome, ConsentOutcome::Failed { reason: "nothing selected".to_string() });
        assert!(!outcome.is_success());

        let outcome = ConsentOutcome::from_reply(ConsentAction::AcceptAll, &reply(None, None));
        assert!(matches!(outcome, ConsentOutcome::Failed { .. }));
    }

    #[test]
    fn reject_reply_does_not_count_as_accept() {
        let outcome = ConsentOutcome::from_reply(ConsentAction::AcceptAll, &reply(Some("rejected"), None));
        assert!(matches!(outcome, ConsentOutcome::Failed { ref reason } if reason.contains("rejected")));
    }
}
