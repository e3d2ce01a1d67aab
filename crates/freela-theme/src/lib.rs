//! Brand themes for the Freela marketing site.
//!
//! A [`Theme`] projects the shared token tree into component styles for one
//! of three brands. A [`ThemeProvider`] owns the active selection: it
//! rehydrates it from a [`ThemeStorage`], writes the primary color family to
//! a [`DocumentRoot`] and notifies subscribers when the brand changes.

pub mod brand;
pub mod provider;
pub mod root;
pub mod storage;
pub mod theme;

pub use brand::Brand;
pub use provider::{
    ProviderOptions, ProviderState, SubscriptionId, ThemeProvider, DEFAULT_STORAGE_KEY,
};
pub use root::{DocumentRoot, StyleRoot};
pub use storage::{JsonFileStorage, MemoryStorage, ThemeStorage};
pub use theme::{build_theme, Theme};
