// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod modal_state;
pub mod login_state;

pub use modal_state::*;
pub use login_state::*;
