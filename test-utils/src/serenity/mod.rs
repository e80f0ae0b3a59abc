//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs for
//! testing purposes. These factories create valid Serenity objects by deserializing
//! JSON, simulating what Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::Permissions;
//! use test_utils::serenity::create_test_member;
//!
//! #[test]
//! fn test_admin_check() {
//!     let admin_role = create_test_role(111111111, "Admin", Permissions::ADMINISTRATOR.bits());
//!     let admin = create_test_member(123456789, 987654321, None, &[111111111]);
//!     let member = create_test_member(123456789, 987654321, Some(0), &[]);
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod member;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use role::create_test_role;
