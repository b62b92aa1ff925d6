//! Client-side core of the mission explorer: the authenticated request pipeline
//! against the mission database API, the mission table view model, and the
//! session/cookie lifecycle used by the gateway.

pub mod api;
pub mod config;
pub mod format;
pub mod media;
pub mod model;
pub mod session;
pub mod table;
