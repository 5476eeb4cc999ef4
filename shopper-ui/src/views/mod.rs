//! View roots. Each one mounts into its own container and owns its state.

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod panels;
pub mod search;
