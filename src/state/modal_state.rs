// ============================================================================
// MODAL STATE - Máquina de estados de visibilidad del modal de cookies
// ============================================================================
// Hidden --Open--> Visible --Close(n)--> Closing(n) --AnimationDone(n)--> Hidden
// Cada cierre lleva su ticket: un AnimationDone de un cierre anterior (el
// modal se reabrió y se volvió a cerrar) no coincide y se ignora.
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
    Closing { ticket: u32 },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ModalEvent {
    Open,
    Close { ticket: u32 },
    /// Fin de la animación de cierre (timer)
    AnimationDone { ticket: u32 },
    /// Ocultar sin animación (consentimiento ya dado al cargar)
    Dismiss,
}

impl ModalState {
    pub fn next(self, event: ModalEvent) -> ModalState {
        match (self, event) {
            (_, ModalEvent::Open) => ModalState::Visible,
            (_, ModalEvent::Dismiss) => ModalState::Hidden,
            (ModalState::Visible, ModalEvent::Close { ticket }) => ModalState::Closing { ticket },
            (ModalState::Closing { ticket: pending }, ModalEvent::AnimationDone { ticket })
                if pending == ticket =>
            {
                ModalState::Hidden
            }
            (state, _) => state,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_open_close_cycle() {
        let state = ModalState::Hidden.next(ModalEvent::Open);
        assert_eq!(state, ModalState::Visible);
        assert!(state.is_open());

        let state = state.next(ModalEvent::Close { ticket: 1 });
        assert_eq!(state, ModalState::Closing { ticket: 1 });
        assert!(!state.is_open());

        assert_eq!(state.next(ModalEvent::AnimationDone { ticket: 1 }), ModalState::Hidden);
    }

    #[test]
    fn close_is_ignored_unless_visible() {
        assert_eq!(ModalState::Hidden.next(ModalEvent::Close { ticket: 1 }), ModalState::Hidden);
        assert_eq!(
            ModalState::Closing { ticket: 1 }.next(ModalEvent::Close { ticket: 2 }),
            ModalState::Closing { ticket: 1 }
        );
    }

    #[test]
    fn reopen_during_animation_wins_over_pending_timer() {
        let state = ModalState::Closing { ticket: 1 }.next(ModalEvent::Open);
        assert_eq!(state, ModalState::Visible);
        assert_eq!(state.next(ModalEvent::AnimationDone { ticket: 1 }), ModalState::Visible);
    }

    #[test]
    fn timer_from_an_earlier_close_does_not_cut_the_next_animation() {
        let state = ModalState::Visible
            .next(ModalEvent::Close { ticket: 1 })
            .next(ModalEvent::Open)
            .next(ModalEvent::Close { ticket: 2 });

        // Vence el timer del primer cierre en mitad de la segunda animación
        let state = state.next(ModalEvent::AnimationDone { ticket: 1 });
        assert_eq!(state, ModalState::Closing { ticket: 2 });

        assert_eq!(state.next(ModalEvent::AnimationDone { ticket: 2 }), ModalState::Hidden);
    }

    #[test]
    fn dismiss_hides_from_any_state() {
        for state in [ModalState::Hidden, ModalState::Visible, ModalState::Closing { ticket: 3 }] {
            assert_eq!(state.next(ModalEvent::Dismiss), ModalState::Hidden);
        }
    }
}
