//! Leaflet Map
//!
//! Thin bindings over the global `L` object and a widget that draws a
//! [`MapOverlay`](shopper::map::MapOverlay) onto one map instance.

mod leaflet;

pub use leaflet::MapWidget;

/// Id of the element the inventory map is attached to
pub const MAP_ELEMENT_ID: &str = "map";
