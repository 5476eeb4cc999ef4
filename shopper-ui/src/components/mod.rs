//! Reusable UI Components

mod message;

pub use message::StatusMessage;
