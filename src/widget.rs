//! Generator widget state.
//!
//! Owns one configuration and the password generated from it. Every accepted
//! configuration change regenerates the password synchronously and replaces
//! the previous one in full.

use crate::actions::{copy_password, Clipboard, ClipboardError, CopyOutcome, Notifier};
use crate::charset::CharacterClass;
use crate::config::{ConfigError, Configuration};
use crate::generator::{generate_with, GeneratedPassword, IndexSource, ThreadRandom};

#[cfg(feature = "async")]
use crate::actions::{copy_password_tx, AsyncClipboard, Notification};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

type Subscriber = Box<dyn FnMut(&GeneratedPassword)>;

pub struct PasswordGenerator<S: IndexSource = ThreadRandom> {
    config: Configuration,
    password: GeneratedPassword,
    source: S,
    subscribers: Vec<Subscriber>,
}

impl PasswordGenerator<ThreadRandom> {
    /// Default configuration: every class enabled, minimum length.
    pub fn new() -> Self {
        Self::with_config(Configuration::default())
    }

    pub fn with_config(config: Configuration) -> Self {
        Self::with_source(config, ThreadRandom::default())
    }

    /// Builds the widget from `PWD_GEN_LENGTH` and `PWD_GEN_CLASSES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::with_config(Configuration::from_env()?))
    }
}

impl Default for PasswordGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: IndexSource> PasswordGenerator<S> {
    /// Builds the widget and generates the initial password.
    pub fn with_source(config: Configuration, mut source: S) -> Self {
        let password = generate_with(&mut source, config.enabled(), config.length());
        Self {
            config,
            password,
            source,
            subscribers: Vec::new(),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn password(&self) -> &GeneratedPassword {
        &self.password
    }

    /// Registers a callback invoked with every newly generated password.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&GeneratedPassword) + 'static,
    {
        self.subscribers.push(Box::new(callback));
    }

    /// Flips `class` and regenerates.
    ///
    /// # Errors
    ///
    /// `LastEnabledClass` when `class` is the only enabled class. Neither the
    /// configuration nor the password change in that case.
    pub fn toggle(&mut self, class: CharacterClass) -> Result<(), ConfigError> {
        self.config.toggle(class)?;
        self.regenerate();
        Ok(())
    }

    /// Clamps and stores the length, regenerating if the stored value changed.
    pub fn set_length(&mut self, length: usize) -> usize {
        let previous = self.config.length();
        let stored = self.config.set_length(length);
        if stored != previous {
            self.regenerate();
        }
        stored
    }

    /// Draws a fresh password for the current configuration.
    pub fn regenerate(&mut self) {
        self.password = generate_with(
            &mut self.source,
            self.config.enabled(),
            self.config.length(),
        );
        for subscriber in &mut self.subscribers {
            subscriber(&self.password);
        }
    }

    /// Copies the current password. See [`copy_password`].
    pub fn copy<C, N>(&self, clipboard: &mut C, notifier: &N) -> Result<CopyOutcome, ClipboardError>
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        copy_password(&self.password, clipboard, notifier)
    }

    /// Async copy of the current password. See [`copy_password_tx`].
    #[cfg(feature = "async")]
    pub async fn copy_tx<C>(
        &self,
        clipboard: &mut C,
        tx: mpsc::Sender<Notification>,
    ) -> Result<CopyOutcome, ClipboardError>
    where
        C: AsyncClipboard,
    {
        copy_password_tx(&self.password, clipboard, tx).await
    }
}
