// ============================================================================
// CONSTANTES - Endpoints y contrato DOM con las plantillas del servidor
// ============================================================================

/// Estado de consentimiento (lectura)
pub const COOKIE_STATUS_PATH: &str = "/api/cookie_status";
/// Aceptar todas las categorías
pub const ACCEPT_COOKIES_PATH: &str = "/api/accept_cookies";
/// Aceptar solo las categorías elegidas
pub const ACCEPT_SELECTED_COOKIES_PATH: &str = "/api/accept_selected_cookies";
/// Rechazar todo lo no obligatorio
pub const REJECT_COOKIES_PATH: &str = "/api/reject_cookies";
/// Envío del formulario de login (form-encoded)
pub const LOGIN_PATH: &str = "/login";

// Formulario de login
pub const LOGIN_FORM_ID: &str = "loginForm";
pub const EMAIL_INPUT_ID: &str = "email";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const REMEMBER_INPUT_ID: &str = "remember";
pub const EMAIL_ERROR_ID: &str = "emailError";
pub const PASSWORD_ERROR_ID: &str = "passwordError";
pub const LOGIN_BUTTON_SELECTOR: &str = ".login-btn";
pub const LOGIN_FRAGMENT_SELECTOR: &str = ".login-form";
pub const FORM_OPTIONS_SELECTOR: &str = ".form-options";
pub const COOKIE_WARNING_CLASS: &str = "cookie-warning";
pub const COOKIE_WARNING_LINK_CLASS: &str = "cookie-warning-link";

// Modal de cookies
pub const COOKIE_MODAL_ID: &str = "cookieModal";
pub const MODAL_BACKDROP_SELECTOR: &str = ".cookie-modal-backdrop";
pub const MODAL_DIALOG_SELECTOR: &str = ".cookie-modal-dialog";
pub const FUNCTIONAL_TOGGLE_ID: &str = "functionalToggle";
pub const SESSION_TOGGLE_ID: &str = "sessionToggle";

// Página principal
pub const SIDEBAR_ID: &str = "sidebar";
pub const MAIN_CONTENT_ID: &str = "mainContent";
pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const FILTER_BUTTON_ID: &str = "filterButton";
pub const FILTER_CONTENT_ID: &str = "filterContent";
pub const MENU_ITEM_SELECTOR: &str = ".menu-item";
pub const SEARCH_INPUT_SELECTOR: &str = ".search-input";
pub const SEARCH_FORM_ID: &str = "searchForm";

// Clases de estado
pub const ACTIVE_CLASS: &str = "active";
pub const CLOSING_CLASS: &str = "closing";
pub const SHOW_CLASS: &str = "show";
pub const COLLAPSED_CLASS: &str = "collapsed";
pub const EXPANDED_CLASS: &str = "expanded";
