//! Client library for the university media platform's JSON API.
//!
//! Owns everything that touches the network or the wire format: the resource
//! client, the page-embedded resource cache, the resource-to-card mappers,
//! best-source selection and per-day analytics aggregation. The TUI crate
//! renders on top of this and never talks to the network itself.

pub mod analytics;
pub mod client;
pub mod config;
pub mod embedded;
pub mod items;
pub mod resources;
pub mod sources;
pub mod upload;
