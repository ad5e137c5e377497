// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================
// Las plantillas del servidor están en ruso; el inglés queda como alternativa
// cuando <html lang="en">.
// ============================================================================

use std::collections::HashMap;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Russian => "RU",
            Language::English => "EN",
        }
    }

    /// Interpretar una etiqueta BCP 47 ("ru", "en-US", ...)
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Language::English
        } else {
            Language::Russian
        }
    }

    /// Idioma declarado en <html lang>
    pub fn from_document() -> Self {
        crate::dom::document()
            .and_then(|doc| doc.document_element())
            .and_then(|root| root.get_attribute("lang"))
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }
}

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: Language) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang {
        Language::Russian => {
            // Validación
            translations.insert("email_required", "Email обязателен для заполнения");
            translations.insert("email_invalid", "Введите корректный email");
            translations.insert("password_required", "Пароль обязателен для заполнения");
            translations.insert("password_too_short", "Пароль должен содержать не менее {} символов");

            // Login
            translations.insert("login_loading", "Вход...");
            translations.insert("cookie_warning_text", "Для входа необходимо разрешить сессионные cookies.");
            translations.insert("cookie_warning_link", "Настроить cookies");
            translations.insert("cookies_required", "Для входа в систему необходимо разрешить сессионные cookies");
            translations.insert("connection_error", "Ошибка соединения с сервером. Попробуйте ещё раз.");
            translations.insert("login_error", "Произошла ошибка при входе. Попробуйте ещё раз.");

            // Banner
            translations.insert("consent_all_accepted", "Все cookies приняты");
            translations.insert("consent_selected_accepted", "Настройки cookies сохранены");
            translations.insert("consent_rejected", "Необязательные cookies отклонены");
            translations.insert("consent_error", "Не удалось сохранить настройки cookies");
            translations.insert("confirm_reject_all", "Вы не выбрали ни одного типа cookies. Отклонить все необязательные cookies?");
            translations.insert("session_required_notice", "Обратите внимание: без сессионных cookies вход в систему невозможен.");
        }
        Language::English => {
            // Validation
            translations.insert("email_required", "Email is required");
            translations.insert("email_invalid", "Enter a valid email");
            translations.insert("password_required", "Password is required");
            translations.insert("password_too_short", "Password must be at least {} characters long");

            // Login
            translations.insert("login_loading", "Signing in...");
            translations.insert("cookie_warning_text", "Session cookies must be enabled to log in.");
            translations.insert("cookie_warning_link", "Cookie settings");
            translations.insert("cookies_required", "You need to allow session cookies to log in");
            translations.insert("connection_error", "Could not reach the server. Please try again.");
            translations.insert("login_error", "Something went wrong while logging in. Please try again.");

            // Banner
            translations.insert("consent_all_accepted", "All cookies accepted");
            translations.insert("consent_selected_accepted", "Cookie preferences saved");
            translations.insert("consent_rejected", "Optional cookies rejected");
            translations.insert("consent_error", "Could not save cookie preferences");
            translations.insert("confirm_reject_all", "No cookie type selected. Reject all optional cookies?");
            translations.insert("session_required_notice", "Please note: logging in is not possible without session cookies.");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no hay traducción
pub fn t(key: &str, lang: Language) -> String {
    get_translations(lang)
        .get(key)
        .map(|translation| translation.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Traducción con un único parámetro `{}`
pub fn t_with(key: &str, lang: Language, arg: &str) -> String {
    t(key, lang).replacen("{}", arg, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_from_tag() {
        assert_eq!(Language::from_tag("en"), Language::English);
        assert_eq!(Language::from_tag("en-GB"), Language::English);
        assert_eq!(Language::from_tag("ru-RU"), Language::Russian);
        assert_eq!(Language::from_tag(""), Language::Russian);
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(t("no_such_key", Language::English), "no_such_key");
    }

    #[test]
    fn both_languages_cover_the_same_keys() {
        let ru = get_translations(Language::Russian);
        let en = get_translations(Language::English);
        let mut ru_keys: Vec<_> = ru.keys().collect();
        let mut en_keys: Vec<_> = en.keys().collect();
        ru_keys.sort();
        en_keys.sort();
        assert_eq!(ru_keys, en_keys);
    }

    #[test]
    fn parameter_is_substituted() {
        assert_eq!(
            t_with("password_too_short", Language::English, "6"),
            "Password must be at least 6 characters long"
        );
    }
}
