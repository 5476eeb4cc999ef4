//! Browser side of the API: the same-origin fetch transport.

mod client;

pub use client::{shopper_api, GlooTransport};
