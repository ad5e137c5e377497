// ============================================================================
// LOGIN STATE - Estado local del formulario de login
// ============================================================================
// El ConsentStatus NO se guarda aquí: se pide de nuevo en cada decisión.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginState {
    pub submitting: Rc<RefCell<bool>>,
    /// Texto original del botón, capturado al montar
    pub default_label: Rc<RefCell<String>>,
}

impl LoginState {
    pub fn new(default_label: String) -> Self {
        Self {
            submitting: Rc::new(RefCell::new(false)),
            default_label: Rc::new(RefCell::new(default_label)),
        }
    }

    /// Marcar inicio de envío; false si ya había uno en curso
    pub fn begin_submit(&self) -> bool {
        let mut submitting = self.submitting.borrow_mut();
        if *submitting {
            return false;
        }
        *submitting = true;
        true
    }

    pub fn end_submit(&self) {
        *self.submitting.borrow_mut() = false;
    }

    pub fn is_submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    pub fn default_label(&self) -> String {
        self.default_label.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_submit_in_flight() {
        let state = LoginState::new("Войти".to_string());
        assert!(state.begin_submit());
        assert!(!state.begin_submit());
        assert!(state.is_submitting());

        state.end_submit();
        assert!(state.begin_submit());
    }

    #[test]
    fn clones_share_state() {
        let state = LoginState::new("Войти".to_string());
        let clone = state.clone();
        assert!(state.begin_submit());
        assert!(clone.is_submitting());
        assert_eq!(clone.default_label(), "Войти");
    }
}
