use serde::{Deserialize, Serialize};

/// Credenciales leídas del formulario de login
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginCredentials {
    /// Pares clave/valor del cuerpo form-encoded (`remember` = "on"/"off")
    pub fn form_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("remember", if self.remember { "on" } else { "off" }),
        ]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormField {
    Email,
    Password,
}

impl FormField {
    /// ID del span de error asociado
    pub fn error_element_id(&self) -> &'static str {
        match self {
            FormField::Email => crate::utils::EMAIL_ERROR_ID,
            FormField::Password => crate::utils::PASSWORD_ERROR_ID,
        }
    }

    /// Campo al que pertenece un input por su ID
    pub fn from_input_id(id: &str) -> Option<Self> {
        match id {
            crate::utils::EMAIL_INPUT_ID => Some(FormField::Email),
            crate::utils::PASSWORD_INPUT_ID => Some(FormField::Password),
            _ => None,
        }
    }
}

/// Error de validación de un campo; vive hasta la siguiente edición del campo
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FormFieldError {
    pub field: FormField,
    pub message: String,
}

/// Resultado del POST a /login
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoginOutcome {
    /// El servidor redirigió: login correcto
    Redirect { location: String },
    /// HTML con el formulario re-renderizado y sus errores
    Rerendered { html: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_flag_is_encoded_as_on_off() {
        let mut credentials = LoginCredentials {
            email: "user@example.com".to_string(),
            password: "secret1".to_string(),
            remember: true,
        };
        assert_eq!(
            credentials.form_pairs(),
            [("email", "user@example.com"), ("password", "secret1"), ("remember", "on")]
        );

        credentials.remember = false;
        assert_eq!(credentials.form_pairs()[2], ("remember", "off"));
    }

    #[test]
    fn input_ids_map_to_their_own_error_span() {
        assert_eq!(FormField::from_input_id("email"), Some(FormField::Email));
        assert_eq!(FormField::from_input_id("password"), Some(FormField::Password));
        assert_eq!(FormField::from_input_id("remember"), None);
        assert_eq!(FormField::Email.error_element_id(), "emailError");
        assert_eq!(FormField::Password.error_element_id(), "passwordError");
    }
}
