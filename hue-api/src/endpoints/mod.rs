//! API endpoint modules organized by resource.
//!
//! Each module extends [`UserClient`](crate::client::UserClient) with the
//! operations of one bridge resource category.

pub mod configuration;
pub mod lights;
pub mod groups;
pub mod schedules;
pub mod scenes;
pub mod sensors;
pub mod rules;
