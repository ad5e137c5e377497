use crate::config::NotificationConfig;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Info => "notification-info",
        }
    }
}

/// Mensaje transitorio mostrado como toast
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: NotificationKind::Info }
    }
}

/// Momentos (ms desde la creación) del ciclo de vida de una notificación
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NotificationSchedule {
    pub show_at: u32,
    pub hide_at: u32,
    pub remove_at: u32,
}

impl From<&NotificationConfig> for NotificationSchedule {
    fn from(config: &NotificationConfig) -> Self {
        let show_at = config.enter_delay_ms;
        let hide_at = show_at.saturating_add(config.visible_ms);
        Self {
            show_at,
            hide_at,
            remove_at: hide_at.saturating_add(config.fade_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_removes_node_within_3310ms() {
        let schedule = NotificationSchedule::from(&NotificationConfig::default());
        assert_eq!(schedule.show_at, 10);
        assert_eq!(schedule.hide_at, 3010);
        assert_eq!(schedule.remove_at, 3310);
    }

    #[test]
    fn kinds_have_distinct_classes() {
        let classes = [
            NotificationKind::Success.css_class(),
            NotificationKind::Error.css_class(),
            NotificationKind::Info.css_class(),
        ];
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_eq!(Notification::error("x").kind, NotificationKind::Error);
    }
}
