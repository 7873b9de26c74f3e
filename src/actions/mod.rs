//! User actions on a generated password
//!
//! Each action talks to external collaborators through a trait.

mod copy;
mod notification;

pub use copy::{
    copy_password, Clipboard, ClipboardError, CopyOutcome, COPIED_MESSAGE, COPY_FAILED_MESSAGE,
};
pub use notification::{
    Notification, NotificationKind, Notifier, ToastOptions, ToastPosition, ToastTheme,
};

#[cfg(feature = "async")]
pub use copy::{copy_password_tx, AsyncClipboard};

#[cfg(test)]
pub(crate) use copy::test_support;
