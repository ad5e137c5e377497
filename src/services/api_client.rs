// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de UI: hace el request y devuelve modelos tipados.
// Las cookies viajan solas (mismo origen), el cliente no las toca.
// ============================================================================

use gloo_net::http::{Request, Response};
use web_sys::UrlSearchParams;
use crate::config::CONFIG;
use crate::models::{
    ConsentAction, ConsentOutcome, ConsentSelection, ConsentStatus, ConsentWriteResponse,
    LoginCredentials, LoginOutcome,
};
use crate::utils::{
    ACCEPT_COOKIES_PATH, ACCEPT_SELECTED_COOKIES_PATH, COOKIE_STATUS_PATH, LOGIN_PATH,
    REJECT_COOKIES_PATH,
};

/// Error de transporte o de formato
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, text: String },
    Parse(String),
    Build(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, text } => write!(f, "HTTP {}: {}", status, text),
            ApiError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ApiError::Build(msg) => write!(f, "Request build error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Estado actual de consentimiento
    pub async fn cookie_status(&self) -> Result<ConsentStatus, ApiError> {
        let response = Request::get(&self.url(COOKIE_STATUS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(http_error(response).await);
        }

        let status = response
            .json::<ConsentStatus>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::debug!("🍪 [API] cookie_status: {:?}", status);
        Ok(status)
    }

    /// Aceptar todas las cookies
    pub async fn accept_all(&self) -> Result<ConsentOutcome, ApiError> {
        let response = Request::post(&self.url(ACCEPT_COOKIES_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        consent_outcome(ConsentAction::AcceptAll, response).await
    }

    /// Aceptar solo las categorías seleccionadas
    pub async fn accept_selected(&self, selection: &ConsentSelection) -> Result<ConsentOutcome, ApiError> {
        let response = Request::post(&self.url(ACCEPT_SELECTED_COOKIES_PATH))
            .json(selection)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        consent_outcome(ConsentAction::AcceptSelected, response).await
    }

    /// Rechazar todas las cookies no obligatorias
    pub async fn reject_all(&self) -> Result<ConsentOutcome, ApiError> {
        let response = Request::post(&self.url(REJECT_COOKIES_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        consent_outcome(ConsentAction::RejectAll, response).await
    }

    /// Enviar credenciales (form-encoded) a /login.
    /// fetch sigue la redirección; `redirected()` indica login correcto.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginOutcome, ApiError> {
        let params = UrlSearchParams::new()
            .map_err(|e| ApiError::Build(format!("{:?}", e)))?;
        for (name, value) in credentials.form_pairs() {
            params.append(name, value);
        }

        log::info!("🔐 [API] Enviando login para: {}", credentials.email);

        let response = Request::post(&self.url(LOGIN_PATH))
            .body(params)
            .map_err(|e| ApiError::Build(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.redirected() {
            let location = response.url();
            log::info!("✅ [API] Login aceptado, redirección a {}", location);
            return Ok(LoginOutcome::Redirect { location });
        }

        if response.status() >= 500 {
            return Err(http_error(response).await);
        }

        let html = response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        log::info!("⚠️ [API] Login rechazado, formulario re-renderizado ({} bytes)", html.len());
        Ok(LoginOutcome::Rerendered { html })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// El cuerpo JSON se lee aunque el HTTP no sea 2xx: el endpoint selectivo
/// responde 400 con `{"status":"rejected","message":...}`.
async fn consent_outcome(action: ConsentAction, response: Response) -> Result<ConsentOutcome, ApiError> {
    let status = response.status();
    let ok = response.ok();

    match response.json::<ConsentWriteResponse>().await {
        Ok(reply) => {
            let outcome = ConsentOutcome::from_reply(action, &reply);
            log::debug!("🍪 [API] {:?} -> HTTP {} {:?}", action, status, outcome);
            Ok(outcome)
        }
        Err(e) if ok => Err(ApiError::Parse(e.to_string())),
        Err(_) => Err(ApiError::Http {
            status,
            text: "response without JSON body".to_string(),
        }),
    }
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    ApiError::Http { status, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalised() {
        let api = ApiClient::with_base_url("https://example.test/");
        assert_eq!(api.url(COOKIE_STATUS_PATH), "https://example.test/api/cookie_status");

        let same_origin = ApiClient::with_base_url("");
        assert_eq!(same_origin.url(LOGIN_PATH), "/login");
    }

    #[test]
    fn errors_render_readably() {
        let err = ApiError::Http { status: 503, text: "Service Unavailable".to_string() };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}
