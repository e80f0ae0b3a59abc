//! Service layer.
//!
//! Sits between the Discord command handlers and the outside world. The bot keeps no
//! state of its own, so the only service is the license API client together with the
//! parsing of its replies.

pub mod license;
