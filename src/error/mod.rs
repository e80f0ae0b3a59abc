//! Error types for the bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors. Errors coming back
//! from the license API never surface here: the client collapses them into a failure
//! `ApiResponse` at the call site, so `AppError` only covers start-up, Discord and
//! command-input problems.

pub mod auth;
pub mod config;
pub mod input;
pub mod license;

use thiserror::Error;

use crate::error::{auth::AuthError, config::ConfigError, input::InputError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so that `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal: the process refuses to start without a complete configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Permission error raised before any remote call is made.
    ///
    /// Rendered to the invoking user as a "Permission Denied" embed.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid command input (out of range amount, missing key, ...).
    ///
    /// Rendered to the invoking user as an "Invalid Input" embed.
    #[error(transparent)]
    InputErr(#[from] InputError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Invalid license API base URL.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
