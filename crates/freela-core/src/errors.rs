//! Error types for the design system.

use crate::tokens::TokenKind;
use thiserror::Error;

/// Top-level error type for the design system.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors during token lookup.
#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Undefined token: {path}")]
    UndefinedToken { path: String },

    #[error("Invalid token path: {path:?}")]
    InvalidPath { path: String },

    #[error("Token path {path} names a group, not a value")]
    NotALeaf { path: String },

    #[error("Token {path} is a {found}, expected a {expected}")]
    UnexpectedKind {
        path: String,
        expected: TokenKind,
        found: TokenKind,
    },
}

/// Errors from theme selection.
#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    #[error("Unknown theme: {name} (expected one of freela, empresa, agencia)")]
    UnknownTheme { name: String },

    #[error("Theme provider is not ready (state: {state})")]
    NotReady { state: String },
}

/// Errors from the persisted theme selection store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error in theme storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed theme storage: {reason}")]
    Malformed { reason: String },

    #[error("Theme storage unavailable: {reason}")]
    Unavailable { reason: String },
}
