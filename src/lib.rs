//! Org chart engine for a fixed team of pipeline agents.
//!
//! [`org`] holds the validated roster, [`layout`] and [`query`] are the pure
//! engine every view consumes, and [`app`] is the terminal front end's state.

pub mod app;
pub mod events;
pub mod layout;
pub mod logging;
pub mod org;
pub mod pipeline;
pub mod query;
pub mod report;
