//! Runtime owner of the active brand.
//!
//! The provider is an explicit value handed to consumers. It hydrates the
//! selection from storage on mount, writes the active brand's primary
//! family to the document root and tells subscribers about every change.

use std::fmt;

use freela_core::{ThemeError, TokenTree};
use freela_tokens::colors::SHADES;
use freela_tokens::css::{var_name, DEFAULT_PREFIX};
use tracing::{debug, warn};

use crate::brand::Brand;
use crate::root::DocumentRoot;
use crate::storage::ThemeStorage;
use crate::theme::Theme;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "freela-brand-theme";

/// Lifecycle of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    Uninitialized,
    Hydrating,
    Ready,
}

impl fmt::Display for ProviderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderState::Uninitialized => "uninitialized",
            ProviderState::Hydrating => "hydrating",
            ProviderState::Ready => "ready",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderOptions {
    pub storage_key: String,
    pub default_brand: Brand,
    pub css_prefix: String,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_brand: Brand::default(),
            css_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Handle returned by [`ThemeProvider::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(Brand, &Theme)>;

pub struct ThemeProvider<'t, S, R> {
    storage: S,
    root: R,
    tree: &'t TokenTree,
    options: ProviderOptions,
    state: ProviderState,
    active: Brand,
    theme: Theme,
    applied: Vec<String>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<'t, S, R> ThemeProvider<'t, S, R>
where
    S: ThemeStorage,
    R: DocumentRoot,
{
    pub fn new(storage: S, root: R, tree: &'t TokenTree, options: ProviderOptions) -> Self {
        let active = options.default_brand;
        Self {
            storage,
            root,
            tree,
            theme: Theme::build(active, tree),
            options,
            state: ProviderState::Uninitialized,
            active,
            applied: Vec::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Hydrate from storage and apply the selection. Mounting twice is a no-op.
    pub fn mount(&mut self) -> Brand {
        if self.state == ProviderState::Ready {
            return self.active;
        }

        self.state = ProviderState::Hydrating;
        let brand = self.read_persisted().unwrap_or(self.options.default_brand);
        self.select(brand);
        self.state = ProviderState::Ready;
        debug!(brand = %brand, "theme provider ready");
        brand
    }

    fn read_persisted(&self) -> Option<Brand> {
        let key = &self.options.storage_key;
        match self.storage.load(key) {
            Ok(Some(value)) => match value.parse::<Brand>() {
                Ok(brand) => Some(brand),
                Err(e) => {
                    warn!(%key, "ignoring persisted theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(%key, "theme storage unavailable, using default: {}", e);
                None
            }
        }
    }

    /// Switch the active brand. Only valid once mounted.
    pub fn set_theme(&mut self, name: &str) -> Result<Brand, ThemeError> {
        if self.state != ProviderState::Ready {
            return Err(ThemeError::NotReady {
                state: self.state.to_string(),
            });
        }
        let brand: Brand = name.parse()?;

        self.select(brand);
        if let Err(e) = self.storage.store(&self.options.storage_key, brand.as_str()) {
            warn!(brand = %brand, "could not persist theme selection: {}", e);
        }
        debug!(brand = %brand, "theme changed");
        self.notify();
        Ok(brand)
    }

    fn select(&mut self, brand: Brand) {
        if brand != self.theme.brand {
            self.theme = Theme::build(brand, self.tree);
        }
        self.active = brand;
        self.apply();
    }

    fn apply(&mut self) {
        self.clear_applied();
        for shade in SHADES {
            let name = var_name(&self.options.css_prefix, &["colors", "primary", shade]);
            let value = self
                .theme
                .colors
                .primary
                .get(shade)
                .map(String::as_str)
                .unwrap_or_default();
            self.root.set_property(&name, value);
            self.applied.push(name);
        }
    }

    fn clear_applied(&mut self) {
        for name in self.applied.drain(..) {
            self.root.remove_property(&name);
        }
    }

    fn notify(&mut self) {
        let (brand, theme) = (self.active, &self.theme);
        for (_, listener) in self.listeners.iter_mut() {
            listener(brand, theme);
        }
    }

    pub fn active(&self) -> Brand {
        self.active
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn state(&self) -> ProviderState {
        self.state
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Call `listener` after every successful theme change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(Brand, &Theme) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Remove applied properties and listeners, reset the selection to the
    /// default brand and return to `Uninitialized`.
    pub fn unmount(&mut self) {
        self.clear_applied();
        self.listeners.clear();
        self.reset_selection();
        self.state = ProviderState::Uninitialized;
    }

    fn reset_selection(&mut self) {
        let brand = self.options.default_brand;
        if brand != self.theme.brand {
            self.theme = Theme::build(brand, self.tree);
        }
        self.active = brand;
    }

    /// Forget the persisted selection and fall back to the default brand.
    pub fn clear_persisted(&mut self) -> Brand {
        if let Err(e) = self.storage.remove(&self.options.storage_key) {
            warn!("could not clear persisted theme: {}", e);
        }
        let brand = self.options.default_brand;
        if self.state == ProviderState::Ready {
            let changed = brand != self.active;
            self.select(brand);
            if changed {
                self.notify();
            }
        } else {
            self.reset_selection();
        }
        brand
    }

    /// Give back the storage, e.g. to hand it to a fresh provider.
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S, R> fmt::Debug for ThemeProvider<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
