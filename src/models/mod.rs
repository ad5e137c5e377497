pub mod consent;
pub mod login;
pub mod notification;

pub use consent::{ConsentAction, ConsentOutcome, ConsentSelection, ConsentStatus, ConsentWriteResponse};
pub use login::{FormField, FormFieldError, LoginCredentials, LoginOutcome};
pub use notification::{Notification, NotificationSchedule};
