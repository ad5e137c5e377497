pub mod login_viewmodel;
pub mod consent_viewmodel;

pub use login_viewmodel::{gate_plan, submit_gate, ButtonChange, LoginViewModel, SubmitGate};
pub use consent_viewmodel::{plan_outcome, plan_selection, ConsentViewModel, SelectionPlan};
