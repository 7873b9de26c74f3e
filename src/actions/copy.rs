//! Copy action - hands the current password to the clipboard.

use secrecy::ExposeSecret;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use super::notification::{Notification, Notifier};
use crate::generator::GeneratedPassword;

pub const COPIED_MESSAGE: &str = "Password copied to clipboard";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy password to clipboard";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Platform clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Platform clipboard with an asynchronous write.
#[cfg(feature = "async")]
pub trait AsyncClipboard {
    fn write_text(&mut self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Password was written to the clipboard.
    Copied,
    /// Password was empty; nothing happened.
    Skipped,
}

/// Copies `password` to `clipboard` and reports the result through `notifier`.
///
/// # Returns
/// - `Ok(Skipped)` for an empty password; the clipboard is not touched and no
///   notification is shown
/// - `Ok(Copied)` after a success notification
///
/// # Errors
///
/// Returns the clipboard error after an error notification has been shown.
pub fn copy_password<C, N>(
    password: &GeneratedPassword,
    clipboard: &mut C,
    notifier: &N,
) -> Result<CopyOutcome, ClipboardError>
where
    C: Clipboard + ?Sized,
    N: Notifier + ?Sized,
{
    if password.is_empty() {
        return Ok(CopyOutcome::Skipped);
    }

    let result = clipboard.write_text(password.expose_secret());
    notifier.notify(notification_for(&result));
    result.map(|()| CopyOutcome::Copied)
}

/// Async version that sends the notification via channel.
#[cfg(feature = "async")]
pub async fn copy_password_tx<C>(
    password: &GeneratedPassword,
    clipboard: &mut C,
    tx: mpsc::Sender<Notification>,
) -> Result<CopyOutcome, ClipboardError>
where
    C: AsyncClipboard,
{
    if password.is_empty() {
        return Ok(CopyOutcome::Skipped);
    }

    let result = clipboard.write_text(password.expose_secret()).await;

    if let Err(_e) = tx.send(notification_for(&result)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send copy notification: {}", _e);
    }

    result.map(|()| CopyOutcome::Copied)
}

fn notification_for(result: &Result<(), ClipboardError>) -> Notification {
    match result {
        Ok(()) => Notification::success(COPIED_MESSAGE),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Clipboard write failed: {}", _e);
            Notification::error(COPY_FAILED_MESSAGE)
        }
    }
}
