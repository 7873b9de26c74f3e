//! Toast notifications emitted by actions.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTheme {
    Light,
    Dark,
    Colored,
}

/// Presentational options forwarded to the toast collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    /// `None` keeps the toast open until dismissed.
    pub auto_close: Option<Duration>,
    pub hide_progress_bar: bool,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub theme: ToastTheme,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopCenter,
            auto_close: Some(Duration::from_millis(5000)),
            hide_progress_bar: false,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
            theme: ToastTheme::Colored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub options: ToastOptions,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            options: ToastOptions::default(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            options: ToastOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ToastOptions) -> Self {
        self.options = options;
        self
    }
}

/// Displays notifications to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F: Fn(Notification)> Notifier for F {
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}
