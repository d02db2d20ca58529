use std::time::Duration;

/// Notifications disappear after this delay unless dismissed earlier.
pub const AUTO_DISMISS: Duration = Duration::from_secs(4);

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub auto_dismiss: Option<Duration>,
}

impl Notification {
    pub fn positive(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Positive,
            message: message.into(),
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }

    pub fn negative(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Negative,
            message: message.into(),
            auto_dismiss: Some(AUTO_DISMISS),
        }
    }
}

#[cfg(any(test, feature = "mock"))]
impl MockNotifier {
    pub fn with_notify(mut self, notification: Notification) -> Self {
        self.expect_notify()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_const(());
        self
    }
}

/// Prints positive notifications to stdout and negative ones to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Positive => println!("\u{2714} {}", notification.message),
            NotificationKind::Negative => eprintln!("\u{2716} {}", notification.message),
        }
    }
}
