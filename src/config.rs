// ============================================================================
// CONFIGURACIÓN - Valores fijados en tiempo de compilación
// ============================================================================
// build.rs vuelca las claves de .env como variables de entorno de rustc;
// aquí se leen con option_env! y se aplican valores por defecto.
// ============================================================================

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefijo de los endpoints. Vacío = mismo origen que la página
    pub api_base_url: String,
    pub log_level: String,
    pub min_password_length: usize,
    pub notification: NotificationConfig,
    pub modal_close_animation_ms: u32,
    pub reject_alert_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub enter_delay_ms: u32,
    pub visible_ms: u32,
    pub fade_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enter_delay_ms: 10,
            visible_ms: 3000,
            fade_ms: 300,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            log_level: "info".to_string(),
            min_password_length: 6,
            notification: NotificationConfig::default(),
            modal_close_animation_ms: 300,
            reject_alert_delay_ms: 500,
        }
    }
}

/// Parsear un valor opcional, usando `default` si falta o es inválido
fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let notification = NotificationConfig {
            enter_delay_ms: parse_or(
                option_env!("NOTIFICATION_ENTER_DELAY_MS"),
                defaults.notification.enter_delay_ms,
            ),
            visible_ms: parse_or(
                option_env!("NOTIFICATION_VISIBLE_MS"),
                defaults.notification.visible_ms,
            ),
            fade_ms: parse_or(
                option_env!("NOTIFICATION_FADE_MS"),
                defaults.notification.fade_ms,
            ),
        };

        Self {
            api_base_url: option_env!("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            log_level: option_env!("LOG_LEVEL")
                .map(|level| level.to_string())
                .unwrap_or(defaults.log_level),
            min_password_length: parse_or(
                option_env!("MIN_PASSWORD_LENGTH"),
                defaults.min_password_length,
            ),
            notification,
            modal_close_animation_ms: parse_or(
                option_env!("MODAL_CLOSE_ANIMATION_MS"),
                defaults.modal_close_animation_ms,
            ),
            reject_alert_delay_ms: parse_or(
                option_env!("REJECT_ALERT_DELAY_MS"),
                defaults.reject_alert_delay_ms,
            ),
        }
    }

    /// Nivel de log para wasm_logger (Info si el valor no es válido)
    pub fn log_level(&self) -> log::Level {
        parse_or(Some(self.log_level.as_str()), log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_falls_back_on_missing_or_garbage() {
        assert_eq!(parse_or::<u32>(None, 300), 300);
        assert_eq!(parse_or::<u32>(Some("abc"), 300), 300);
        assert_eq!(parse_or::<u32>(Some(" 450 "), 300), 450);
    }

    #[test]
    fn defaults_match_ui_timings() {
        let config = AppConfig::default();
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.notification.enter_delay_ms, 10);
        assert_eq!(config.notification.visible_ms, 3000);
        assert_eq!(config.notification.fade_ms, 300);
        assert_eq!(config.modal_close_animation_ms, 300);
    }

    #[test]
    fn log_level_parses_case_insensitively() {
        let mut config = AppConfig::default();
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);

        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
