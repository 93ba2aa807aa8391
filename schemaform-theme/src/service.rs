//! Theme service.
//!
//! Owns the current theme for the whole process. The preference is loaded
//! once by [`ThemeService::init`] and written back synchronously on every
//! change.

use crate::error::ThemeError;
use crate::store::ThemeStore;
use crate::theme::{THEME_KEY, Theme};
use crossbeam_channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock, RwLockWriteGuard};

/// Get/set/subscribe access to the theme preference.
pub struct ThemeService {
    store: Box<dyn ThemeStore>,
    current: RwLock<Theme>,
    subscribers: Mutex<Vec<Sender<Theme>>>,
}

impl ThemeService {
    /// Initializes the service from a store.
    ///
    /// An absent, unrecognised or unreadable stored value yields
    /// [`Theme::Light`]; the next change overwrites it.
    ///
    /// # Errors
    /// Returns `ThemeError::Io` if the store cannot be accessed.
    pub fn init(store: impl ThemeStore + 'static) -> Result<Self, ThemeError> {
        let stored = match store.load(THEME_KEY) {
            Ok(stored) => stored,
            Err(e @ (ThemeError::Json(_) | ThemeError::Corrupt { .. })) => {
                tracing::warn!("Ignoring unreadable theme preference: {}", e);
                None
            }
            Err(e) => return Err(e),
        };
        let theme = match stored {
            Some(value) => Theme::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unrecognised stored theme '{}', using light", value);
                Theme::Light
            }),
            None => Theme::Light,
        };
        tracing::debug!("Theme initialized: {}", theme);

        Ok(Self {
            store: Box::new(store),
            current: RwLock::new(theme),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    /// Returns the current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        *self.current.read()
    }

    /// Persists and applies a theme.
    ///
    /// The current theme is left unchanged if persisting fails.
    ///
    /// # Errors
    /// Returns `ThemeError` if the store cannot be written.
    pub fn set(&self, theme: Theme) -> Result<(), ThemeError> {
        self.apply(self.current.write(), theme)
    }

    /// Switches to the other theme and returns it.
    ///
    /// # Errors
    /// Returns `ThemeError` if the store cannot be written.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let current = self.current.write();
        let next = current.toggled();
        self.apply(current, next)?;
        Ok(next)
    }

    fn apply(
        &self,
        mut current: RwLockWriteGuard<'_, Theme>,
        theme: Theme,
    ) -> Result<(), ThemeError> {
        self.store.save(THEME_KEY, theme.as_str())?;
        *current = theme;
        drop(current);

        tracing::info!("Theme set to {}", theme);
        self.notify(theme);
        Ok(())
    }

    /// Subscribes to theme changes.
    ///
    /// The receiver gets every theme applied after this call.
    #[must_use]
    pub fn subscribe(&self) -> Receiver<Theme> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Returns the number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    fn notify(&self, theme: Theme) {
        // Dropped receivers are pruned here.
        self.subscribers.lock().retain(|tx| tx.send(theme).is_ok());
    }
}

impl std::fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeService")
            .field("current", &self.current())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
