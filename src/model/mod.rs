//! Domain models shared between the license client and the Discord bot.
//!
//! - `license` - actions, keys and operation parameters
//! - `response` - the normalized license API result

pub mod license;
pub mod response;
