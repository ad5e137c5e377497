pub mod notifications;
pub mod consent_banner;
pub mod login_gatekeeper;
pub mod dashboard_shell;

pub use notifications::Notifier;
pub use consent_banner::ConsentBanner;
pub use login_gatekeeper::LoginGatekeeper;
pub use dashboard_shell::DashboardShell;
