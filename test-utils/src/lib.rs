//! KeyAuth Bot Test Utils
//!
//! Provides shared testing utilities for the license bot. The bot has no database, so
//! instead of schema builders this crate offers stand-ins for the two external systems
//! the bot talks to.
//!
//! # Overview
//!
//! - **MockLicenseApi**: local HTTP server imitating the license seller API, replying
//!   with scripted bodies and recording every request it receives
//! - **serenity**: factories for Serenity models built from JSON, for exercising
//!   permission checks without a gateway connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::mock::MockLicenseApi;
//!
//! #[tokio::test]
//! async fn test_verify() -> Result<(), TestError> {
//!     let api = MockLicenseApi::start().await?;
//!     api.reply(200, r#"{"success":true,"message":"Key found"}"#);
//!
//!     // Point the client at api.url() and run the operation...
//!
//!     assert_eq!(api.requests()[0].param("type"), Some("verify"));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod mock;
pub mod serenity;
