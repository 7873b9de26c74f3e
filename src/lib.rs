//! Password generator library
//!
//! This library provides the core of a password generator widget: character
//! class toggles, a length slider, uniform random sampling and a copy to
//! clipboard action with toast notifications.
//!
//! # Features
//!
//! - `async` (default): Enables the async clipboard copy action
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_LENGTH`: Initial password length (default: `8`, clamped to `8..=40`)
//! - `PWD_GEN_CLASSES`: Comma-separated enabled classes
//!   (default: `lowercase,uppercase,digits,symbols`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_generator::{CharacterClass, PasswordGenerator};
//! use secrecy::ExposeSecret;
//!
//! let mut widget = PasswordGenerator::from_env().expect("Invalid configuration");
//!
//! widget.set_length(16);
//! widget.toggle(CharacterClass::Symbols).expect("Symbols was not the last class");
//!
//! println!("Password: {}", widget.password().expose_secret());
//! ```

mod actions;
mod charset;
mod config;
mod generator;
mod widget;

// Public API
pub use actions::{
    copy_password, Clipboard, ClipboardError, CopyOutcome, Notification, NotificationKind,
    Notifier, ToastOptions, ToastPosition, ToastTheme, COPIED_MESSAGE, COPY_FAILED_MESSAGE,
};
pub use charset::{CharacterClass, CharacterSet};
pub use config::{
    ConfigError, Configuration, CLASSES_ENV, DEFAULT_LENGTH, LENGTH_ENV, MAX_LENGTH, MIN_LENGTH,
};
pub use generator::{
    generate, generate_with, GeneratedPassword, IndexSource, OsRandom, RandomIndex, ThreadRandom,
};
pub use widget::PasswordGenerator;

#[cfg(feature = "async")]
pub use actions::{copy_password_tx, AsyncClipboard};
